//! Mutations - the closed set of synchronous state transitions

use crate::models::{MainConfig, User};

/// A named state transition. Applied only through `UiState::commit`.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Switch to a registered theme; unknown themes are ignored
    SetTheme(String),
    /// Legacy toggle: `Some(true)` forces dark, `Some(false)` light, `None` flips
    ToggleDarkTheme(Option<bool>),
    ToggleSupportChat(bool),
    ToggleSidebar,
    ToggleUserMenu,
    SetConfig(MainConfig),
    SetCurrentSection(String),
    SetLastProductionScreen(String),
    /// Remember the production being viewed; empty or absent ids are ignored
    SetCurrentProduction(Option<String>),
    UserLogin(Option<User>),
    ShowPreviewFile(String),
    HidePreviewFile,
    /// Back to initial values, keeping the config and the theme
    ResetAll,
}

impl Mutation {
    /// Symbolic name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::SetTheme(_) => "SET_THEME",
            Mutation::ToggleDarkTheme(_) => "TOGGLE_DARK_THEME",
            Mutation::ToggleSupportChat(_) => "TOGGLE_SUPPORT_CHAT",
            Mutation::ToggleSidebar => "TOGGLE_SIDEBAR",
            Mutation::ToggleUserMenu => "TOGGLE_USER_MENU",
            Mutation::SetConfig(_) => "SET_CONFIG",
            Mutation::SetCurrentSection(_) => "SET_CURRENT_SECTION",
            Mutation::SetLastProductionScreen(_) => "SET_LAST_PRODUCTION_SCREEN",
            Mutation::SetCurrentProduction(_) => "SET_CURRENT_PRODUCTION",
            Mutation::UserLogin(_) => "USER_LOGIN",
            Mutation::ShowPreviewFile(_) => "SHOW_PREVIEW_FILE",
            Mutation::HidePreviewFile => "HIDE_PREVIEW_FILE",
            Mutation::ResetAll => "RESET_ALL",
        }
    }
}
