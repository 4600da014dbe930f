//! Domain types and rules for the watchlist manager.
//!
//! Everything here is free of I/O so it can be shared by the persistence
//! layer, the catalog client, and the HTTP surface.

pub mod catalog;
pub mod content;
pub mod error;
pub mod types;
pub mod watch_status;
pub mod watchlist;
