//! The chat coach session state machine.
//!
//! A session is always in exactly one of three phases — `Idle`,
//! `Awaiting` (request in flight) or `Error` — so states like "loading
//! and failed at the same time" are unrepresentable. The user turn is
//! appended optimistically on submit and retained on failure; the only
//! rollback-style operation is a full reset to the seeded greeting.

use async_trait::async_trait;

use crate::chat::ChatMessage;
use crate::config::AiConfig;
use crate::store::TranscriptStore;
use crate::{MindwellError, Result};

/// Greeting seeded into an empty transcript on first load.
pub const GREETING: &str =
    "你好！我是你的 AI 教练。今天你想探讨什么话题？我们可以一起梳理你的目标、现状和可能的行动方案。";

/// Greeting seeded after an explicit reset.
pub const RESET_GREETING: &str = "对话已重置。我们可以重新开始探讨一个新的话题。";

/// Where the session currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// No request in flight; submissions are accepted.
    Idle,
    /// A request is in flight; further submissions are rejected.
    Awaiting,
    /// The last request failed; the reason is kept for display and the
    /// session accepts a new submission.
    Error(String),
}

/// Seam to the chat-completion transport.
///
/// The production implementation lives in `mindwell-interaction`; tests
/// substitute stubs so no network is involved.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Sends the prepared message list and returns the assistant text.
    async fn complete(&self, messages: &[ChatMessage], config: &AiConfig) -> Result<String>;
}

/// Owner of the ordered transcript and the session phase.
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    phase: Phase,
    store: Box<dyn TranscriptStore>,
}

impl ChatSession {
    /// Loads the persisted transcript, seeding the greeting when nothing
    /// usable is stored.
    pub fn load(store: Box<dyn TranscriptStore>) -> Self {
        let transcript = store
            .load()
            .unwrap_or_else(|| vec![ChatMessage::assistant(GREETING)]);
        Self {
            transcript,
            phase: Phase::Idle,
            store,
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The reason recorded by the last failed request, if the session is
    /// in the error phase.
    pub fn last_error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error(reason) => Some(reason),
            _ => None,
        }
    }

    /// Accepts a user turn and prepares the outbound message list.
    ///
    /// Preconditions: the trimmed text is non-empty, no request is in
    /// flight, and a non-empty API key is configured. A missing key is a
    /// configuration error signaled before any network attempt, leaving
    /// the transcript untouched. On acceptance the user message is
    /// appended optimistically, any prior error is cleared, the phase
    /// moves to `Awaiting`, and the returned list is
    /// `[system prompt] + prior transcript + new user message`.
    pub fn submit(&mut self, text: &str, config: &AiConfig) -> Result<Vec<ChatMessage>> {
        let text = text.trim();
        if text.is_empty() {
            return Err(MindwellError::invalid_input("message is empty"));
        }
        if self.phase == Phase::Awaiting {
            return Err(MindwellError::invalid_input(
                "a request is already in flight",
            ));
        }
        if !config.has_api_key() {
            return Err(MindwellError::config(
                "API key is missing; configure it in settings",
            ));
        }

        let user_message = ChatMessage::user(text);

        let mut outbound = Vec::with_capacity(self.transcript.len() + 2);
        outbound.push(ChatMessage::system(config.system_prompt.clone()));
        outbound.extend(self.transcript.iter().cloned());
        outbound.push(user_message.clone());

        self.transcript.push(user_message);
        let prior_phase = std::mem::replace(&mut self.phase, Phase::Awaiting);
        if let Err(err) = self.persist() {
            // A failed write must not strand the session in Awaiting;
            // undo the optimistic append and stay submittable.
            self.transcript.pop();
            self.phase = prior_phase;
            return Err(err);
        }

        Ok(outbound)
    }

    /// Applies a successful response: appends the assistant turn and
    /// returns to `Idle`.
    pub fn resolve(&mut self, text: impl Into<String>) -> Result<()> {
        if self.phase != Phase::Awaiting {
            return Err(MindwellError::invalid_input("no request in flight"));
        }
        self.transcript.push(ChatMessage::assistant(text));
        self.phase = Phase::Idle;
        self.persist()
    }

    /// Applies a failed response: the already-appended user turn is
    /// retained, the reason is recorded, and the session stays
    /// submittable.
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.phase = Phase::Error(reason.into());
    }

    /// One full round trip: submit, call the backend, reconcile.
    ///
    /// Returns the assistant's reply text on success. On failure the
    /// error is both recorded in the phase and returned to the caller.
    pub async fn send(
        &mut self,
        text: &str,
        config: &AiConfig,
        backend: &dyn CompletionBackend,
    ) -> Result<String> {
        let outbound = self.submit(text, config)?;
        match backend.complete(&outbound, config).await {
            Ok(reply) => {
                self.resolve(reply.clone())?;
                Ok(reply)
            }
            Err(err) => {
                self.fail(err.to_string());
                Err(err)
            }
        }
    }

    /// Clears the transcript back to a single seeded greeting.
    ///
    /// Available from any phase. Confirmation is the caller's
    /// responsibility; this method does not ask.
    pub fn reset(&mut self) -> Result<()> {
        self.transcript = vec![ChatMessage::assistant(RESET_GREETING)];
        self.phase = Phase::Idle;
        self.persist()
    }

    /// Number of user/assistant turns currently in the transcript.
    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.transcript)
    }
}
