//! # ui-store
//!
//! Session-wide UI state for a production tracking client.
//!
//! ## Features
//! - Theme registry with dark/light lookup and validation
//! - Theme changes persisted locally and synced to the user profile
//! - Sidebar, user menu and support chat toggles
//! - Navigation memory (section, last production screen, last production)
//! - Server configuration cache
//! - File preview selection
//!
//! ## Architecture
//! Actor-based with channels:
//! - Callers hold a `StoreHandle` and send commands
//! - The `StoreActor` applies actions and mutations to `UiState`
//! - Collaborators (HTTP, storage, chat, session) sit behind traits
//! - Observers receive `UiSnapshot`s on a watch channel

pub mod app;
pub mod chat;
pub mod collaborators;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod session;
pub mod storage;
pub mod theme;

// Re-export commonly used types
pub use app::{Collaborators, StoreActor, StoreHandle, ThemeSync, UiState, UiStore};
pub use config::Settings;
pub use error::StoreError;
pub use messages::{Mutation, StoreCommand, UiSnapshot};
pub use models::{EventWindow, MainConfig, SearchQuery, User};
pub use theme::{ThemeDescriptor, ThemeRegistry, THEME_LIST};
