//! Theme registry - the selectable themes and their dark/light polarity

use std::collections::HashMap;

use serde::Serialize;

use crate::constants::{DARK_THEME, LIGHT_THEME};

/// A selectable visual theme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeDescriptor {
    pub value: &'static str,
    pub is_dark: bool,
}

/// Every theme a user can pick, in display order
pub const THEME_LIST: &[ThemeDescriptor] = &[
    ThemeDescriptor { value: LIGHT_THEME, is_dark: false },
    ThemeDescriptor { value: DARK_THEME, is_dark: true },
    ThemeDescriptor { value: "midnight", is_dark: true },
    ThemeDescriptor { value: "forest", is_dark: true },
    ThemeDescriptor { value: "sunset", is_dark: true },
    ThemeDescriptor { value: "high-contrast", is_dark: true },
];

/// Lookup table built once from [`THEME_LIST`]; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: &'static [ThemeDescriptor],
    by_value: HashMap<&'static str, ThemeDescriptor>,
}

impl ThemeRegistry {
    /// Build a registry over `themes`. Later duplicates of a value are ignored
    /// so the first descriptor always wins.
    pub fn new(themes: &'static [ThemeDescriptor]) -> Self {
        let mut by_value = HashMap::with_capacity(themes.len());
        for theme in themes {
            by_value.entry(theme.value).or_insert(*theme);
        }
        ThemeRegistry { themes, by_value }
    }

    pub fn builtin() -> Self {
        Self::new(THEME_LIST)
    }

    pub fn get(&self, value: &str) -> Option<&ThemeDescriptor> {
        self.by_value.get(value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.by_value.contains_key(value)
    }

    /// Unknown themes are treated as light
    pub fn is_dark(&self, value: &str) -> bool {
        self.get(value).map(|t| t.is_dark).unwrap_or(false)
    }

    /// Canonical theme of the opposite polarity
    pub fn opposite_of(&self, value: &str) -> &'static str {
        if self.is_dark(value) {
            LIGHT_THEME
        } else {
            DARK_THEME
        }
    }

    pub fn themes(&self) -> &'static [ThemeDescriptor] {
        self.themes
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
