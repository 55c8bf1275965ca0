//! Theme modes, token sets and derived component styles.

mod engine;
mod styles;
mod tokens;
mod type_colors;

pub use engine::{ThemeEngine, ThemeSnapshot};
pub use styles::{
    BoxStyle, DeriveStyles, DetailsStyles, HeaderStyles, ListStyles, StyleCache, TextStyle,
};
pub use tokens::{colors_for, ThemeMode, ThemeTokens, DARK, LIGHT};
pub use type_colors::type_color;
