//! Core domain logic for the Mindwell self-exploration toolbox.
//!
//! This crate holds the chat-coach session state machine, the AI provider
//! configuration, the tool-usage history log, and the three local tools
//! (personality quiz scorer, card draw sampler, four-pillars calculator).
//! Persistence and HTTP live in sibling crates behind the traits defined
//! in [`store`] and [`chat`].

pub mod chat;
pub mod config;
pub mod error;
pub mod history;
pub mod store;
pub mod tools;

// Re-export common error type
pub use error::{MindwellError, Result};
