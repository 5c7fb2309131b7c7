//! Store messages - communication between callers and the store actor

use tokio::sync::oneshot;

use crate::error::Result;
use crate::messages::Mutation;
use crate::models::{Event, EventWindow, MainConfig, SearchQuery, SearchResults};

/// Actions sent to the store actor
#[derive(Debug)]
pub enum StoreCommand {
    /// Change theme locally, persist it and sync it to the profile
    ChangeTheme(String),
    /// Flip between the canonical light and dark themes
    ToggleDarkTheme,
    SetSupportChat(bool),
    ToggleSidebar,
    ToggleUserMenu,
    SetCurrentSection(String),
    SetLastProductionScreen(String),
    /// Apply a mutation directly (session hooks, preview, reset)
    Commit(Mutation),

    /// Fetch the server config and commit it, empty on failure
    SetMainConfig {
        reply: Option<oneshot::Sender<MainConfig>>,
    },
    LoadEvents {
        window: EventWindow,
        reply: oneshot::Sender<Result<Vec<Event>>>,
    },
    SearchData {
        query: SearchQuery,
        reply: oneshot::Sender<Result<SearchResults>>,
    },

    /// Stop the actor
    Shutdown,
}

impl StoreCommand {
    /// Action name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            StoreCommand::ChangeTheme(_) => "changeTheme",
            StoreCommand::ToggleDarkTheme => "toggleDarkTheme",
            StoreCommand::SetSupportChat(_) => "setSupportChat",
            StoreCommand::ToggleSidebar => "toggleSidebar",
            StoreCommand::ToggleUserMenu => "toggleUserMenu",
            StoreCommand::SetCurrentSection(_) => "setCurrentSection",
            StoreCommand::SetLastProductionScreen(_) => "setLastProductionScreen",
            StoreCommand::Commit(mutation) => mutation.name(),
            StoreCommand::SetMainConfig { .. } => "setMainConfig",
            StoreCommand::LoadEvents { .. } => "loadEvents",
            StoreCommand::SearchData { .. } => "searchData",
            StoreCommand::Shutdown => "shutdown",
        }
    }
}
