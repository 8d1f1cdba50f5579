//! # meridian-api
//!
//! HTTP boundary for the Meridian dispatch core: the chat, feedback,
//! history, and status endpoints, the chat pipeline that ties the other
//! crates together, and the `meridiand` daemon binary.

pub mod backends;
pub mod cleaner;
pub mod history;
pub mod payloads;
pub mod routes;
pub mod server;
pub mod service;

pub use cleaner::DisclaimerCleaner;
pub use server::{build_state, router, serve, AppState};
pub use service::{ChatReply, ChatService};
