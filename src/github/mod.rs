// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Building the /users/{username}/events URL
// - Fetching the first page of a user's public events
// - Decoding each record into a typed Event
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod event;
mod fetch;

// Re-export the types the rest of the app needs
pub use event::{Activity, Event};
pub use fetch::EventFetcher;
