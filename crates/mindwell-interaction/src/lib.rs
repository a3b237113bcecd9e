//! Provider-facing HTTP layer for Mindwell.
//!
//! Implements the chat-completion transport against any
//! OpenAI-compatible endpoint, mapping HTTP-level outcomes onto the
//! domain error taxonomy.

pub mod completion;

pub use completion::CompletionClient;
