//! Component styles derived from a token set, memoized per token set.

use std::sync::Arc;

use super::engine::ThemeEngine;
use super::tokens::{ThemeMode, ThemeTokens};
use super::type_colors::type_color;

/// A style object built purely from one token set.
pub trait DeriveStyles {
    fn derive(tokens: &ThemeTokens) -> Self;
}

/// Caches the last derived style object, keyed by the token set it was
/// derived from.
///
/// The key is the token set's mode tag; with only two token sets in
/// existence that is the same as keying on the set itself. A lookup with the
/// same set returns the cached `Arc`; a lookup with the other set rebuilds.
#[derive(Debug)]
pub struct StyleCache<T> {
    cached: Option<(ThemeMode, Arc<T>)>,
    derivations: u64,
}

impl<T> Default for StyleCache<T> {
    fn default() -> Self {
        Self {
            cached: None,
            derivations: 0,
        }
    }
}

impl<T: DeriveStyles> StyleCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn styles_for(&mut self, tokens: &'static ThemeTokens) -> Arc<T> {
        if let Some((mode, styles)) = &self.cached {
            if *mode == tokens.mode() {
                return Arc::clone(styles);
            }
        }
        self.derivations += 1;
        let styles = Arc::new(T::derive(tokens));
        self.cached = Some((tokens.mode(), Arc::clone(&styles)));
        styles
    }

    /// Styles for the engine's current token set.
    pub fn current(&mut self, engine: &ThemeEngine) -> Arc<T> {
        self.styles_for(engine.tokens())
    }

    /// How many times a style object has actually been built.
    pub fn derivations(&self) -> u64 {
        self.derivations
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    pub color: &'static str,
    pub size: u16,
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxStyle {
    pub background: &'static str,
    pub border: Option<&'static str>,
    pub radius: u16,
}

/// Styles for the list and favorites grids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListStyles {
    pub screen: BoxStyle,
    pub search_input: BoxStyle,
    pub placeholder: &'static str,
    pub card: BoxStyle,
    pub card_name: TextStyle,
    pub spinner: &'static str,
    pub error_text: TextStyle,
    pub empty_state: TextStyle,
    pub retry_button: BoxStyle,
    pub retry_label: TextStyle,
}

impl DeriveStyles for ListStyles {
    fn derive(tokens: &ThemeTokens) -> Self {
        Self {
            screen: BoxStyle {
                background: tokens.list_background,
                border: None,
                radius: 0,
            },
            search_input: BoxStyle {
                background: tokens.input_background,
                border: Some(tokens.border),
                radius: 8,
            },
            placeholder: tokens.placeholder,
            card: BoxStyle {
                background: tokens.card,
                border: Some(tokens.border),
                radius: 10,
            },
            card_name: TextStyle {
                color: tokens.text,
                size: 16,
                bold: true,
            },
            spinner: tokens.spinner,
            error_text: TextStyle {
                color: tokens.error,
                size: 18,
                bold: false,
            },
            empty_state: TextStyle {
                color: tokens.empty_state_text,
                size: 16,
                bold: false,
            },
            retry_button: BoxStyle {
                background: tokens.primary,
                border: None,
                radius: 8,
            },
            retry_label: TextStyle {
                color: tokens.button_text,
                size: 16,
                bold: true,
            },
        }
    }
}

/// Styles for the details view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsStyles {
    pub screen: BoxStyle,
    pub name: TextStyle,
    pub number: TextStyle,
    pub type_chip: BoxStyle,
    pub type_label: TextStyle,
    pub section_title: TextStyle,
    pub ability_chip: BoxStyle,
    pub ability_label: TextStyle,
    pub favorite_button: BoxStyle,
    pub favorite_button_active: BoxStyle,
    pub favorite_label: TextStyle,
    pub error_text: TextStyle,
}

impl DetailsStyles {
    /// Screen box tinted with the entry's primary type color, if it has one.
    pub fn screen_for_type(&self, primary_type: Option<&str>) -> BoxStyle {
        BoxStyle {
            background: primary_type.map(type_color).unwrap_or(self.screen.background),
            ..self.screen.clone()
        }
    }

    pub fn favorite_button(&self, is_favorite: bool) -> &BoxStyle {
        if is_favorite {
            &self.favorite_button_active
        } else {
            &self.favorite_button
        }
    }
}

impl DeriveStyles for DetailsStyles {
    fn derive(tokens: &ThemeTokens) -> Self {
        let pill = |background| BoxStyle {
            background,
            border: None,
            radius: 15,
        };
        Self {
            screen: BoxStyle {
                background: tokens.background,
                border: None,
                radius: 0,
            },
            name: TextStyle {
                color: tokens.text,
                size: 28,
                bold: true,
            },
            number: TextStyle {
                color: tokens.secondary_text,
                size: 20,
                bold: false,
            },
            type_chip: pill(tokens.chip_background),
            type_label: TextStyle {
                color: tokens.chip_text,
                size: 16,
                bold: false,
            },
            section_title: TextStyle {
                color: tokens.text,
                size: 22,
                bold: true,
            },
            ability_chip: pill(tokens.ability_background),
            ability_label: TextStyle {
                color: tokens.ability_text,
                size: 16,
                bold: true,
            },
            favorite_button: BoxStyle {
                background: tokens.favorite_button,
                border: None,
                radius: 20,
            },
            favorite_button_active: BoxStyle {
                background: tokens.favorite_button_active,
                border: None,
                radius: 20,
            },
            favorite_label: TextStyle {
                color: tokens.button_text,
                size: 16,
                bold: true,
            },
            error_text: TextStyle {
                color: tokens.error,
                size: 18,
                bold: false,
            },
        }
    }
}

/// Styles for the navigation header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderStyles {
    pub bar: BoxStyle,
    pub title: TextStyle,
    pub button: BoxStyle,
    pub button_label: TextStyle,
}

impl DeriveStyles for HeaderStyles {
    fn derive(tokens: &ThemeTokens) -> Self {
        Self {
            bar: BoxStyle {
                background: tokens.header_background,
                border: None,
                radius: 0,
            },
            title: TextStyle {
                color: tokens.header_text,
                size: 18,
                bold: true,
            },
            button: BoxStyle {
                background: tokens.header_button_background,
                border: None,
                radius: 12,
            },
            button_label: TextStyle {
                color: tokens.header_button_text,
                size: 14,
                bold: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::tokens::{colors_for, DARK, LIGHT};

    #[test]
    fn test_same_token_set_is_cached() {
        let mut cache: StyleCache<ListStyles> = StyleCache::new();
        let first = cache.styles_for(&LIGHT);
        let second = cache.styles_for(colors_for(ThemeMode::Light));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.derivations(), 1);
    }

    #[test]
    fn test_toggle_forces_recompute() {
        let engine = ThemeEngine::default();
        let mut cache: StyleCache<DetailsStyles> = StyleCache::new();

        let light = cache.current(&engine);
        engine.toggle();
        let dark = cache.current(&engine);

        assert!(!Arc::ptr_eq(&light, &dark));
        assert_eq!(dark.name.color, DARK.text);
        assert_eq!(dark.screen.background, DARK.background);
        assert_eq!(cache.derivations(), 2);

        engine.toggle();
        let light_again = cache.current(&engine);
        assert_eq!(*light_again, *light);
        assert_eq!(light_again.favorite_button.background, LIGHT.favorite_button);
        assert_eq!(cache.derivations(), 3);
    }

    #[test]
    fn test_derived_styles_never_mix_sets() {
        let light = HeaderStyles::derive(&LIGHT);
        let dark = HeaderStyles::derive(&DARK);
        assert_eq!(light.bar.background, LIGHT.header_background);
        assert_eq!(light.title.color, LIGHT.header_text);
        assert_eq!(dark.bar.background, DARK.header_background);
        assert_eq!(dark.button_label.color, DARK.header_button_text);
    }

    #[test]
    fn test_details_type_tint_and_favorite_button() {
        let styles = DetailsStyles::derive(&LIGHT);
        assert_eq!(
            styles.screen_for_type(Some("electric")).background,
            type_color("electric")
        );
        assert_eq!(styles.screen_for_type(None).background, LIGHT.background);
        assert_eq!(
            styles.favorite_button(true).background,
            LIGHT.favorite_button_active
        );
        assert_eq!(styles.favorite_button(false).background, LIGHT.favorite_button);
    }
}
