//! The conversation session.

use chat_core::{detect_mood, ChatBackend, ChatMessage, ChatReply};
use remote_chat::RemoteChatBackend;
use tracing::{debug, warn};

/// Maximum history entries kept per session.
pub const DEFAULT_MAX_HISTORY: usize = 10;

/// How many recent history entries accompany each backend request.
pub const CONTEXT_WINDOW: usize = 5;

/// Confidence assigned when the backend reports none.
const DEFAULT_CONFIDENCE: f32 = 0.8;

/// A single user's conversation with the companion.
///
/// The session appends every user message and every delivered reply to
/// its history, evicting the oldest entries once the cap is reached.
/// Sends are sequenced by `&mut self`; the session does not serialize
/// concurrent calls internally.
pub struct ConversationSession<B: ChatBackend> {
    backend: B,
    history: Vec<ChatMessage>,
    max_history: usize,
}

impl<B: ChatBackend> ConversationSession<B> {
    /// Create a session with the default history cap.
    pub fn new(backend: B) -> Self {
        Self::with_max_history(backend, DEFAULT_MAX_HISTORY)
    }

    /// Create a session keeping at most `max_history` entries.
    pub fn with_max_history(backend: B, max_history: usize) -> Self {
        Self {
            backend,
            history: Vec::new(),
            max_history,
        }
    }

    /// Send a user message and get a reply.
    ///
    /// The user message is appended to history first. The backend gets
    /// one attempt with the most recent [`CONTEXT_WINDOW`] entries as
    /// context; on success the reply is mood-tagged and appended as the
    /// assistant turn. On any failure the fallback responder answers
    /// instead, and its reply is appended the same way, so session
    /// state cannot tell the two apart.
    pub async fn send(&mut self, text: &str) -> ChatReply {
        self.push(ChatMessage::user(text));

        let start = self.history.len().saturating_sub(CONTEXT_WINDOW);
        let context: Vec<ChatMessage> = self.history[start..].to_vec();

        match self.backend.send_chat(text, &context).await {
            Ok(reply) => {
                debug!(backend = self.backend.name(), "backend replied");
                let mood = detect_mood(&reply.text);
                let confidence = reply.confidence.unwrap_or(DEFAULT_CONFIDENCE);
                self.push(ChatMessage::assistant(&reply.text));
                ChatReply {
                    message: reply.text,
                    mood,
                    confidence,
                }
            }
            Err(err) => {
                warn!(
                    backend = self.backend.name(),
                    "backend failed, answering from fallback: {}", err
                );
                let reply = fallback_chat::respond(text);
                self.push(ChatMessage::assistant(&reply.message));
                reply
            }
        }
    }

    /// Read-only snapshot of the history.
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Drop all history entries.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Access the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutably access the backend, e.g. to reconfigure it.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Append and trim to the history cap, oldest entries first.
    fn push(&mut self, msg: ChatMessage) {
        self.history.push(msg);
        if self.history.len() > self.max_history {
            let excess = self.history.len() - self.max_history;
            self.history.drain(0..excess);
        }
    }
}

impl ConversationSession<RemoteChatBackend> {
    /// Point subsequent sends at a different backend endpoint.
    ///
    /// In-flight sends are unaffected.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.backend.set_endpoint(endpoint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_core::{async_trait, BackendReply, ChatBackendError, Mood, Role};
    use std::sync::Mutex;

    /// Backend that always replies with a fixed string.
    struct CannedBackend {
        reply: String,
        confidence: Option<f32>,
        seen_context: Mutex<Vec<usize>>,
    }

    impl CannedBackend {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                confidence: None,
                seen_context: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatBackend for CannedBackend {
        async fn send_chat(
            &self,
            _message: &str,
            context: &[ChatMessage],
        ) -> Result<BackendReply, ChatBackendError> {
            self.seen_context.lock().unwrap().push(context.len());
            Ok(BackendReply {
                text: self.reply.clone(),
                confidence: self.confidence,
            })
        }

        fn name(&self) -> &str {
            "CannedBackend"
        }
    }

    /// Backend that always fails.
    struct DownBackend;

    #[async_trait]
    impl ChatBackend for DownBackend {
        async fn send_chat(
            &self,
            _message: &str,
            _context: &[ChatMessage],
        ) -> Result<BackendReply, ChatBackendError> {
            Err(ChatBackendError::Timeout)
        }

        fn name(&self) -> &str {
            "DownBackend"
        }
    }

    #[tokio::test]
    async fn test_send_appends_user_and_assistant() {
        let mut session = ConversationSession::new(CannedBackend::new("sure"));

        let reply = session.send("are you there?").await;
        assert_eq!(reply.message, "sure");
        assert_eq!(reply.confidence, 0.8); // backend reported none

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[0].content, "are you there?");
        assert_eq!(history[1].role, Role::Assistant);
        assert_eq!(history[1].content, "sure");
    }

    #[tokio::test]
    async fn test_backend_confidence_passed_through() {
        let mut backend = CannedBackend::new("ok");
        backend.confidence = Some(0.42);
        let mut session = ConversationSession::new(backend);

        let reply = session.send("ping").await;
        assert_eq!(reply.confidence, 0.42);
    }

    #[tokio::test]
    async fn test_reply_is_mood_tagged() {
        let mut session = ConversationSession::new(CannedBackend::new("That went great"));
        let reply = session.send("how did it go?").await;
        assert_eq!(reply.mood, Mood::Celebrating);
    }

    #[tokio::test]
    async fn test_fallback_on_backend_failure() {
        let mut session = ConversationSession::new(DownBackend);

        let reply = session.send("hello there").await;
        assert_eq!(reply.mood, Mood::Happy);
        assert_eq!(reply.confidence, 0.95);
        assert!(reply.message.contains("Hey there"));

        // The fallback reply still lands in history as the assistant turn.
        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].role, Role::Assistant);
        assert_eq!(history[1].content, reply.message);
    }

    #[tokio::test]
    async fn test_history_never_exceeds_cap() {
        let mut session = ConversationSession::new(CannedBackend::new("ack"));

        for i in 0..11 {
            session.send(&format!("message {}", i)).await;
            assert!(session.history().len() <= DEFAULT_MAX_HISTORY);
        }

        let history = session.history();
        assert_eq!(history.len(), DEFAULT_MAX_HISTORY);
        // The first user message was evicted long ago.
        assert!(history.iter().all(|m| m.content != "message 0"));
        // Oldest-first eviction keeps the most recent exchange intact.
        assert_eq!(history[history.len() - 2].content, "message 10");
    }

    #[tokio::test]
    async fn test_context_window_is_bounded() {
        let backend = CannedBackend::new("ack");
        let mut session = ConversationSession::new(backend);

        for i in 0..6 {
            session.send(&format!("m{}", i)).await;
        }

        let seen = session.backend().seen_context.lock().unwrap().clone();
        // First send has only the fresh user message as context.
        assert_eq!(seen[0], 1);
        // Later sends never exceed the window.
        assert!(seen.iter().all(|&len| len <= CONTEXT_WINDOW));
        assert_eq!(*seen.last().unwrap(), CONTEXT_WINDOW);
    }

    #[tokio::test]
    async fn test_clear_history() {
        let mut session = ConversationSession::new(CannedBackend::new("ack"));
        session.send("hi").await;
        assert!(!session.history().is_empty());

        session.clear_history();
        assert!(session.history().is_empty());
    }
}
