//! App layer - the UI state, its mutations and the actions driving them
//!
//! The store actor receives commands from callers, runs actions against the
//! collaborators, commits mutations and publishes snapshots.

pub mod state;
pub mod mutations;
pub mod actions;
pub mod actor;

#[cfg(test)]
pub(crate) mod testing;

pub use state::UiState;
pub use actions::{Collaborators, ThemeSync, UiStore};
pub use actor::{StoreActor, StoreHandle};
