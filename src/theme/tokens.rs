//! The two color token sets.
//!
//! Exactly two [`ThemeTokens`] values exist, [`LIGHT`] and [`DARK`]. The type
//! cannot be built outside this module, so the mode tag carried by a token set
//! identifies it as reliably as its address does.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Mode for a platform-reported color scheme. Anything other than
    /// `dark` (including no report at all) is light.
    pub fn from_preference(preference: Option<&str>) -> Self {
        match preference.map(|p| p.trim().to_ascii_lowercase()) {
            Some(p) if p == "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named color values for one theme. Colors are CSS color strings.
#[derive(Debug, PartialEq, Eq)]
pub struct ThemeTokens {
    mode: ThemeMode,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub secondary_text: &'static str,
    pub border: &'static str,
    pub primary: &'static str,
    pub accent: &'static str,
    pub error: &'static str,
    pub input_background: &'static str,
    pub placeholder: &'static str,
    pub card: &'static str,
    pub spinner: &'static str,
    pub header_background: &'static str,
    pub header_text: &'static str,
    pub header_button_background: &'static str,
    pub header_button_text: &'static str,
    pub list_background: &'static str,
    pub empty_state_text: &'static str,
    pub chip_background: &'static str,
    pub chip_text: &'static str,
    pub ability_background: &'static str,
    pub ability_text: &'static str,
    pub favorite_button: &'static str,
    pub favorite_button_active: &'static str,
    pub button_text: &'static str,
}

impl ThemeTokens {
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }
}

pub static LIGHT: ThemeTokens = ThemeTokens {
    mode: ThemeMode::Light,
    background: "#f4f4f8",
    surface: "#ffffff",
    text: "#1f2933",
    secondary_text: "#52606d",
    border: "#d2d6dc",
    primary: "#ef4444",
    accent: "#fbbf24",
    error: "#ef4444",
    input_background: "#ffffff",
    placeholder: "#9aa5b1",
    card: "#ffffff",
    spinner: "#ef4444",
    header_background: "#ef4444",
    header_text: "#fdf2f2",
    header_button_background: "rgba(0,0,0,0.15)",
    header_button_text: "#fdf2f2",
    list_background: "#f4f4f8",
    empty_state_text: "#52606d",
    chip_background: "rgba(255, 255, 255, 0.7)",
    chip_text: "#1f2933",
    ability_background: "rgba(255, 255, 255, 0.8)",
    ability_text: "#1f2933",
    favorite_button: "#64748b",
    favorite_button_active: "#22c55e",
    button_text: "#f8fafc",
};

pub static DARK: ThemeTokens = ThemeTokens {
    mode: ThemeMode::Dark,
    background: "#0f172a",
    surface: "#111c34",
    text: "#e2e8f0",
    secondary_text: "#94a3b8",
    border: "#1e293b",
    primary: "#f97316",
    accent: "#facc15",
    error: "#f87171",
    input_background: "#1e293b",
    placeholder: "#64748b",
    card: "#1e293b",
    spinner: "#facc15",
    header_background: "#0b1220",
    header_text: "#f8fafc",
    header_button_background: "rgba(148, 163, 184, 0.25)",
    header_button_text: "#f8fafc",
    list_background: "#0f172a",
    empty_state_text: "#cbd5f5",
    chip_background: "rgba(148, 163, 184, 0.2)",
    chip_text: "#f8fafc",
    ability_background: "rgba(30, 41, 59, 0.9)",
    ability_text: "#e2e8f0",
    favorite_button: "#334155",
    favorite_button_active: "#16a34a",
    button_text: "#f8fafc",
};

/// Token set for `mode`. Pure and total.
pub fn colors_for(mode: ThemeMode) -> &'static ThemeTokens {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_for_returns_the_static_sets() {
        assert!(std::ptr::eq(colors_for(ThemeMode::Light), &LIGHT));
        assert!(std::ptr::eq(colors_for(ThemeMode::Dark), &DARK));
        assert_eq!(colors_for(ThemeMode::Dark).mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_sets_differ() {
        assert_ne!(LIGHT.background, DARK.background);
        assert_ne!(LIGHT, DARK);
    }

    #[test]
    fn test_from_preference() {
        assert_eq!(ThemeMode::from_preference(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_preference(Some(" DARK ")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_preference(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_preference(Some("no-preference")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_preference(None), ThemeMode::Light);
    }

    #[test]
    fn test_toggled_is_involution() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }
}
