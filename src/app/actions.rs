//! Actions - orchestration between the state and its collaborators

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::app::UiState;
use crate::collaborators::{ChatWidget, LocalStorage, PeopleApi, RemoteClient, SessionContext};
use crate::constants::THEME_STORAGE_KEY;
use crate::error::Result;
use crate::messages::{Mutation, UiSnapshot};
use crate::models::{Event, EventWindow, MainConfig, PersonUpdate, SearchQuery, SearchResults};

/// Everything the store calls out to
#[derive(Clone)]
pub struct Collaborators {
    pub remote: Arc<dyn RemoteClient>,
    pub people: Arc<dyn PeopleApi>,
    pub chat: Arc<dyn ChatWidget>,
    /// Absent storage only disables theme persistence
    pub storage: Option<Arc<dyn LocalStorage>>,
    pub session: Arc<dyn SessionContext>,
}

/// Outcome of the profile part of a theme change.
///
/// The sync task is detached: dropping the handle does not cancel it, and the
/// action that produced it never waits for it.
#[derive(Debug)]
pub enum ThemeSync {
    /// Nobody is logged in
    Skipped,
    /// Called outside a Tokio runtime; the profile was not updated
    NoRuntime,
    Dispatched { seq: u64, handle: JoinHandle<()> },
}

impl ThemeSync {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, ThemeSync::Dispatched { .. })
    }

    /// Wait for the sync task, if any. Only tests and shutdown paths need this.
    pub async fn settled(self) {
        if let ThemeSync::Dispatched { seq, handle } = self {
            if let Err(e) = handle.await {
                tracing::error!(seq, error = %e, "Theme sync task failed");
            }
        }
    }
}

/// The UI state store: state plus the actions that drive it
pub struct UiStore {
    state: UiState,
    collaborators: Collaborators,
    sync_seq: u64,
}

impl UiStore {
    pub fn new(state: UiState, collaborators: Collaborators) -> Self {
        UiStore {
            state,
            collaborators,
            sync_seq: 0,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn snapshot(&self) -> UiSnapshot {
        self.state.to_snapshot()
    }

    pub fn remote(&self) -> Arc<dyn RemoteClient> {
        Arc::clone(&self.collaborators.remote)
    }

    /// Dispatch a mutation without side effects
    pub fn commit(&mut self, mutation: Mutation) {
        self.state.commit(mutation);
    }

    // ========================
    // Theme
    // ========================

    /// Change the theme locally, persist it, and push it to the user profile.
    ///
    /// The local change is applied before anything else and never rolled back.
    /// Outside a Tokio runtime the profile sync is skipped.
    pub fn change_theme_and_sync(&mut self, theme: &str) -> ThemeSync {
        self.state.commit(Mutation::SetTheme(theme.to_string()));

        match &self.collaborators.storage {
            Some(storage) => {
                if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme) {
                    tracing::warn!(theme, error = %e, "Failed to persist theme locally");
                }
            }
            None => tracing::debug!(theme, "No local storage, theme not persisted"),
        }

        let Some(user) = self.collaborators.session.current_user() else {
            return ThemeSync::Skipped;
        };
        if user.id.is_empty() {
            return ThemeSync::Skipped;
        }

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(theme, "No async runtime, theme preference not synced");
            return ThemeSync::NoRuntime;
        };

        // Completion order decides which write lands last on the server
        self.sync_seq += 1;
        let seq = self.sync_seq;
        let people = Arc::clone(&self.collaborators.people);
        let update = PersonUpdate {
            id: user.id,
            theme: theme.to_string(),
        };
        let handle = runtime.spawn(async move {
            let person_id = update.id.clone();
            match people.update_person(update).await {
                Ok(()) => tracing::info!(seq, person_id = %person_id, "Theme preference saved"),
                Err(e) => tracing::error!(
                    seq,
                    person_id = %person_id,
                    error = %e,
                    "Failed to save theme preference"
                ),
            }
        });

        ThemeSync::Dispatched { seq, handle }
    }

    /// Switch to the canonical theme of the opposite polarity
    pub fn toggle_dark_theme(&mut self) -> ThemeSync {
        let next = self.state.registry().opposite_of(self.state.current_theme());
        self.change_theme_and_sync(next)
    }

    // ========================
    // Toggles and navigation
    // ========================

    pub fn set_support_chat(&mut self, visible: bool) {
        self.state.commit(Mutation::ToggleSupportChat(visible));
        self.collaborators.chat.set_chat_visibility(visible);
    }

    pub fn toggle_sidebar(&mut self) {
        self.state.commit(Mutation::ToggleSidebar);
    }

    pub fn toggle_user_menu(&mut self) {
        self.state.commit(Mutation::ToggleUserMenu);
    }

    pub fn set_current_section(&mut self, section: impl Into<String>) {
        self.state.commit(Mutation::SetCurrentSection(section.into()));
    }

    pub fn set_last_production_screen(&mut self, screen: impl Into<String>) {
        self.state.commit(Mutation::SetLastProductionScreen(screen.into()));
    }

    // ========================
    // Remote data
    // ========================

    /// Fetch the server config, committing an empty one if the fetch fails
    pub async fn set_main_config(&mut self) -> MainConfig {
        let config = fetch_main_config(self.collaborators.remote.as_ref()).await;
        self.apply_main_config(config)
    }

    /// Commit a fetched config and return it
    pub fn apply_main_config(&mut self, config: MainConfig) -> MainConfig {
        self.state.commit(Mutation::SetConfig(config.clone()));
        config
    }

    pub async fn load_events(&self, window: EventWindow) -> Result<Vec<Event>> {
        self.collaborators.remote.get_events(window).await
    }

    pub async fn search_data(&self, query: &SearchQuery) -> Result<SearchResults> {
        self.collaborators.remote.search_data(query).await
    }
}

/// Fetch the config, logging and degrading to an empty map on failure
pub async fn fetch_main_config(remote: &dyn RemoteClient) -> MainConfig {
    match remote.get_config().await {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load main config");
            MainConfig::new()
        }
    }
}
