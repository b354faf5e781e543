//! Wiki Chat page client.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single page with two actions: crawl a URL into markdown through the
//! backend, then ask the backend a question about that markdown. The crawl
//! and answer logic live behind the backend's HTTP contract; this crate owns
//! the page state, the view derived from it, and the two HTTP calls.
//!
//! `state` holds the pure transitions, `controller` runs them around the
//! network calls, `view` decides what is enabled and visible, and `net`
//! speaks the wire contract.

pub mod config;
pub mod controller;
pub mod net;
pub mod state;
pub mod view;

pub use config::{ClientConfig, ConfigError};
pub use controller::PageController;
pub use net::api::{ApiError, Backend, HttpBackend};
pub use state::page::{Outcome, PageState};
pub use view::PageView;
