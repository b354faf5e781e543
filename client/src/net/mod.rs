//! Networking modules for the backend HTTP contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the two POST calls and maps failures to page messages;
//! `types` defines the JSON bodies on the wire.

pub mod api;
pub mod types;
