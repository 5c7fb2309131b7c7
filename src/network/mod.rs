//! Network layer - HTTP access to the API server

pub mod client;

pub use client::ApiClient;
