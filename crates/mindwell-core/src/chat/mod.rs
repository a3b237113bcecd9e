//! Chat coach domain: transcript messages and the session state machine.

pub mod message;
pub mod session;

pub use message::{ChatMessage, Role};
pub use session::{ChatSession, CompletionBackend, Phase};
