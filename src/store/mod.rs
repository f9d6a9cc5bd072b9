//! Persistence Gateway
//!
//! Isolates the HTTP layer from store-specific query syntax. A collection is
//! a JSONB document table; a filter is an ordered field -> condition mapping.
//! Identifiers assigned by the store leave this layer already stringified.

mod client;
mod filter;

pub use client::{Document, StoreClient};
pub use filter::{Filter, Match};
