//! UI state - pure data structure with no I/O logic

use std::sync::Arc;

use crate::constants::{DEFAULT_SCREEN, LIGHT_THEME};
use crate::messages::UiSnapshot;
use crate::models::MainConfig;
use crate::theme::ThemeRegistry;

/// Session-wide UI state.
///
/// Fields are only written by the mutation handlers in `app::mutations`;
/// everything else reads through the getters below.
#[derive(Debug, Clone)]
pub struct UiState {
    pub(super) current_production_screen: String,
    pub(super) current_section: String,
    pub(super) current_theme: String,
    pub(super) is_sidebar_hidden: bool,
    pub(super) is_support_chat: bool,
    pub(super) is_user_menu_hidden: bool,
    pub(super) last_production_screen: String,
    pub(super) last_production_viewed: Option<String>,
    pub(super) main_config: MainConfig,
    pub(super) preview_file_id_to_show: String,

    pub(super) registry: Arc<ThemeRegistry>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Arc::new(ThemeRegistry::builtin()))
    }
}

impl UiState {
    pub fn new(registry: Arc<ThemeRegistry>) -> Self {
        UiState {
            current_production_screen: String::from(DEFAULT_SCREEN),
            current_section: String::from(DEFAULT_SCREEN),
            current_theme: String::from(LIGHT_THEME),
            is_sidebar_hidden: true,
            is_support_chat: true,
            is_user_menu_hidden: true,
            last_production_screen: String::from(DEFAULT_SCREEN),
            last_production_viewed: None,
            main_config: MainConfig::new(),
            preview_file_id_to_show: String::new(),
            registry,
        }
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    // ========================
    // Getters
    // ========================

    pub fn current_production_screen(&self) -> &str {
        &self.current_production_screen
    }

    pub fn current_section(&self) -> &str {
        &self.current_section
    }

    pub fn current_theme(&self) -> &str {
        &self.current_theme
    }

    pub fn is_dark_theme(&self) -> bool {
        self.registry.is_dark(&self.current_theme)
    }

    pub fn is_sidebar_hidden(&self) -> bool {
        self.is_sidebar_hidden
    }

    pub fn is_support_chat(&self) -> bool {
        self.is_support_chat
    }

    pub fn is_user_menu_hidden(&self) -> bool {
        self.is_user_menu_hidden
    }

    pub fn last_production_screen(&self) -> &str {
        &self.last_production_screen
    }

    pub fn last_production_viewed(&self) -> Option<&str> {
        self.last_production_viewed.as_deref()
    }

    pub fn main_config(&self) -> &MainConfig {
        &self.main_config
    }

    pub fn preview_file_id_to_show(&self) -> &str {
        &self.preview_file_id_to_show
    }

    /// Convert state to a snapshot for observers
    pub fn to_snapshot(&self) -> UiSnapshot {
        UiSnapshot {
            current_production_screen: self.current_production_screen.clone(),
            current_section: self.current_section.clone(),
            current_theme: self.current_theme.clone(),
            is_dark_theme: self.is_dark_theme(),
            is_sidebar_hidden: self.is_sidebar_hidden,
            is_support_chat: self.is_support_chat,
            is_user_menu_hidden: self.is_user_menu_hidden,
            last_production_screen: self.last_production_screen.clone(),
            last_production_viewed: self.last_production_viewed.clone(),
            main_config: self.main_config.clone(),
            preview_file_id_to_show: self.preview_file_id_to_show.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_values() {
        let state = UiState::default();
        assert_eq!(state.current_production_screen(), "assets");
        assert_eq!(state.current_section(), "assets");
        assert_eq!(state.current_theme(), "light");
        assert!(!state.is_dark_theme());
        assert!(state.is_sidebar_hidden());
        assert!(state.is_support_chat());
        assert!(state.is_user_menu_hidden());
        assert_eq!(state.last_production_screen(), "assets");
        assert_eq!(state.last_production_viewed(), None);
        assert!(state.main_config().is_empty());
        assert_eq!(state.preview_file_id_to_show(), "");
    }

    #[test]
    fn test_snapshot_uses_camel_case() {
        let snapshot = UiState::default().to_snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["currentTheme"], "light");
        assert_eq!(json["isSidebarHidden"], true);
        assert_eq!(json["lastProductionViewed"], serde_json::Value::Null);
        assert_eq!(json["previewFileIdToShow"], "");
    }
}
