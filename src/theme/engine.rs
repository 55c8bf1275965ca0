//! Current visual mode, shared by every consumer that produces a style.

use std::sync::Arc;
use tokio::sync::watch;

use super::tokens::{colors_for, ThemeMode, ThemeTokens};

/// Mode plus the token set it selects. The two always agree: the tokens are
/// looked up from the mode, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub mode: ThemeMode,
    pub tokens: &'static ThemeTokens,
}

impl ThemeSnapshot {
    fn of(mode: ThemeMode) -> Self {
        Self {
            mode,
            tokens: colors_for(mode),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThemeEngine {
    mode: Arc<watch::Sender<ThemeMode>>,
}

impl ThemeEngine {
    pub fn new(initial: ThemeMode) -> Self {
        let (mode, _) = watch::channel(initial);
        Self {
            mode: Arc::new(mode),
        }
    }

    /// Seed from the platform's reported color scheme, light if unknown.
    pub fn from_platform(preference: Option<&str>) -> Self {
        Self::new(ThemeMode::from_preference(preference))
    }

    pub fn mode(&self) -> ThemeMode {
        *self.mode.borrow()
    }

    pub fn tokens(&self) -> &'static ThemeTokens {
        colors_for(self.mode())
    }

    pub fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot::of(self.mode())
    }

    /// Flip the mode. Every query after this returns sees the new mode.
    pub fn toggle(&self) -> ThemeSnapshot {
        let mut next = ThemeMode::Light;
        self.mode.send_modify(|mode| {
            *mode = mode.toggled();
            next = *mode;
        });
        tracing::debug!(mode = %next, "theme toggled");
        ThemeSnapshot::of(next)
    }

    pub fn set_mode(&self, mode: ThemeMode) -> ThemeSnapshot {
        self.mode.send_if_modified(|current| {
            let changed = *current != mode;
            *current = mode;
            changed
        });
        ThemeSnapshot::of(mode)
    }

    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.mode.subscribe()
    }
}

impl Default for ThemeEngine {
    fn default() -> Self {
        Self::new(ThemeMode::Light)
    }
}
