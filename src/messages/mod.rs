//! Message types flowing in and out of the store.
//!
//! Callers send [`StoreCommand`]s to the store actor, the store applies
//! [`Mutation`]s to its state, and observers receive [`UiSnapshot`]s.

pub mod mutation;
pub mod snapshot;
pub mod store;

pub use mutation::Mutation;
pub use snapshot::UiSnapshot;
pub use store::StoreCommand;
