//! Roster - client core for a remote user directory with persistent favorites
//!
//! Fetches one page of users from the directory endpoint, keeps a locally
//! persisted favorites set, and drives two views (all users, favorites only)
//! through explicit activation events. The presentation layer is a thin
//! external collaborator; see [`view_state`].

pub mod cli;
pub mod directory;
pub mod error;
pub mod models;
pub mod store;
pub mod view_state;
