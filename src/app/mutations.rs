//! Mutation handlers - the only code that writes `UiState` fields

use std::sync::Arc;

use crate::app::UiState;
use crate::constants::{CLIENT_LANDING_SCREEN, DARK_THEME, LIGHT_THEME};
use crate::messages::Mutation;

impl UiState {
    /// Apply a mutation synchronously
    pub fn commit(&mut self, mutation: Mutation) {
        tracing::debug!(mutation = mutation.name(), "commit");

        match mutation {
            // ========================
            // Theme
            // ========================
            Mutation::SetTheme(theme) => {
                if self.registry().contains(&theme) {
                    self.current_theme = theme;
                }
            }
            Mutation::ToggleDarkTheme(force) => {
                let next = match force {
                    Some(true) => DARK_THEME,
                    Some(false) => LIGHT_THEME,
                    None => self.registry().opposite_of(&self.current_theme),
                };
                self.current_theme = String::from(next);
            }

            // ========================
            // Toggles
            // ========================
            Mutation::ToggleSupportChat(visible) => self.is_support_chat = visible,
            Mutation::ToggleSidebar => self.is_sidebar_hidden = !self.is_sidebar_hidden,
            Mutation::ToggleUserMenu => self.is_user_menu_hidden = !self.is_user_menu_hidden,

            // ========================
            // Navigation
            // ========================
            Mutation::SetCurrentSection(section) => self.current_section = section,
            Mutation::SetLastProductionScreen(screen) => self.last_production_screen = screen,
            Mutation::SetCurrentProduction(production_id) => {
                if let Some(id) = production_id.filter(|id| !id.is_empty()) {
                    self.last_production_viewed = Some(id);
                }
            }
            Mutation::UserLogin(user) => {
                if user.as_ref().is_some_and(|u| u.is_client()) {
                    self.last_production_screen = String::from(CLIENT_LANDING_SCREEN);
                }
            }

            // ========================
            // Preview
            // ========================
            Mutation::ShowPreviewFile(file_id) => self.preview_file_id_to_show = file_id,
            Mutation::HidePreviewFile => self.preview_file_id_to_show.clear(),

            // ========================
            // Config and reset
            // ========================
            Mutation::SetConfig(config) => self.main_config = config,
            Mutation::ResetAll => {
                let main_config = std::mem::take(&mut self.main_config);
                let current_theme = std::mem::take(&mut self.current_theme);
                *self = UiState {
                    main_config,
                    current_theme,
                    ..UiState::new(Arc::clone(&self.registry))
                };
            }
        }
    }
}
