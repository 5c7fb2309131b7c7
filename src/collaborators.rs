//! Interfaces of everything the store talks to but does not own.
//!
//! The store never depends on a concrete transport, storage or widget; the
//! binary wires in [`crate::network::ApiClient`], [`crate::storage::FileStorage`],
//! [`crate::chat::ChatBridge`] and [`crate::session::SessionState`].

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Event, EventWindow, MainConfig, PersonUpdate, SearchQuery, SearchResults, User};

/// Remote data client
#[async_trait]
pub trait RemoteClient: Send + Sync {
    async fn get_config(&self) -> Result<MainConfig>;
    async fn get_events(&self, window: EventWindow) -> Result<Vec<Event>>;
    async fn search_data(&self, query: &SearchQuery) -> Result<SearchResults>;
}

/// Profile endpoint used for the advisory theme sync
#[async_trait]
pub trait PeopleApi: Send + Sync {
    async fn update_person(&self, update: PersonUpdate) -> Result<()>;
}

/// Support chat widget; visibility changes are fire-and-forget
pub trait ChatWidget: Send + Sync {
    fn set_chat_visibility(&self, visible: bool);
}

/// Synchronous key/value persistence
pub trait LocalStorage: Send + Sync {
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// Read-only view of the session owned elsewhere
pub trait SessionContext: Send + Sync {
    fn current_user(&self) -> Option<User>;
}
