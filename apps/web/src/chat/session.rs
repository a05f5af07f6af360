//! Chat session state and the submit flow.
//!
//! A submission is split in two so the session lock is never held while the
//! completion call is pending:
//!
//! 1. `ChatSession::begin` appends the user message and marks the session busy.
//! 2. `ChatSession::finish` appends exactly one bot message and clears the mark.
//!
//! `SessionHandle::submit` runs the first step, then spawns the completion
//! and the second step on the runtime.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::chat::models::{Message, SessionView};
use crate::llm_client::prompts::build_chat_prompt;
use crate::llm_client::{CompletionService, LlmError};

/// First message of every session.
pub const GREETING: &str = "Hi! I'm your AI career advisor. Ask me about career paths, skills, \
job opportunities, or any career-related questions!";

/// Shown in place of a reply whenever the completion call fails for any reason.
pub const FALLBACK_REPLY: &str =
    "I'm sorry, I'm having trouble connecting right now. Please try again in a moment.";

/// Why a submission was ignored. The transcript is untouched in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error("message text must not be empty")]
    Blank,

    #[error("a reply is already in progress")]
    Busy,
}

/// Ticket for the one outstanding completion of a session.
#[derive(Debug)]
pub struct PendingReply {
    token: Uuid,
    prompt: String,
}

impl PendingReply {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

#[derive(Debug)]
pub struct ChatSession {
    id: Uuid,
    messages: Vec<Message>,
    in_flight: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            messages: vec![Message::bot(GREETING)],
            in_flight: None,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            session_id: self.id,
            created_at: self.created_at,
            busy: self.is_busy(),
            messages: self.messages().to_vec(),
        }
    }

    /// Appends the user's message and reserves the session for one reply.
    pub fn begin(&mut self, text: &str) -> Result<(Message, PendingReply), SubmitRejection> {
        if text.trim().is_empty() {
            return Err(SubmitRejection::Blank);
        }
        if self.is_busy() {
            return Err(SubmitRejection::Busy);
        }

        let token = Uuid::new_v4();
        let user_message = Message::user(text);
        self.messages.push(user_message.clone());
        self.in_flight = Some(token);

        let pending = PendingReply {
            token,
            prompt: build_chat_prompt(text),
        };
        Ok((user_message, pending))
    }

    /// Appends the bot message for `pending`: the reply verbatim, or the fallback on error.
    ///
    /// Returns `None` if `pending` is not the reply this session is waiting for.
    pub fn finish(
        &mut self,
        pending: PendingReply,
        outcome: Result<String, LlmError>,
    ) -> Option<&Message> {
        if self.in_flight != Some(pending.token) {
            warn!(session_id = %self.id, "Dropping stale chat reply");
            return None;
        }

        let text = match outcome {
            Ok(text) => text,
            Err(e) => {
                warn!(session_id = %self.id, "Completion unavailable: {e}");
                FALLBACK_REPLY.to_string()
            }
        };

        self.messages.push(Message::bot(text));
        self.in_flight = None;
        self.messages.last()
    }
}

/// Shared handle to one visitor's session.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle(Arc<Mutex<ChatSession>>);

impl SessionHandle {
    pub fn new(session: ChatSession) -> Self {
        Self(Arc::new(Mutex::new(session)))
    }

    pub async fn view(&self) -> SessionView {
        self.0.lock().await.view()
    }

    /// False while a reply is pending or the session is locked by another task.
    pub fn is_idle(&self) -> bool {
        self.0.try_lock().map(|s| !s.is_busy()).unwrap_or(false)
    }

    /// Full submission. The user message is stored before this returns; the bot
    /// reply is appended by a spawned task whose handle resolves to it.
    pub async fn submit(
        &self,
        completions: Arc<dyn CompletionService>,
        text: &str,
    ) -> Result<(Message, JoinHandle<Option<Message>>), SubmitRejection> {
        let (user_message, pending) = self.begin(text).await?;
        let session = self.clone();
        let reply =
            tokio::spawn(async move { session.resolve(completions.as_ref(), pending).await });
        Ok((user_message, reply))
    }

    async fn begin(&self, text: &str) -> Result<(Message, PendingReply), SubmitRejection> {
        let mut session = self.0.lock().await;
        let accepted = session.begin(text)?;
        debug!(session_id = %session.id(), "Chat message accepted");
        Ok(accepted)
    }

    // The lock is released while the completion runs.
    async fn resolve(
        &self,
        completions: &dyn CompletionService,
        pending: PendingReply,
    ) -> Option<Message> {
        let outcome = completions.complete(pending.prompt()).await;
        let mut session = self.0.lock().await;
        let reply = session.finish(pending, outcome).cloned();
        if let Some(reply) = &reply {
            debug!(session_id = %session.id(), reply_id = %reply.id, "Chat reply appended");
        }
        reply
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::chat::models::Sender;
    use crate::llm_client::prompts::CAREER_ADVISOR_PREAMBLE;
    use crate::llm_client::testing::ScriptedCompletion;
    use crate::llm_client::GeminiClient;

    #[test]
    fn test_new_session_starts_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::Bot);
        assert_eq!(session.messages()[0].text, GREETING);
        assert!(!session.is_busy());
    }

    #[test]
    fn test_blank_input_leaves_transcript_unchanged() {
        let mut session = ChatSession::new();
        assert_eq!(session.begin("").unwrap_err(), SubmitRejection::Blank);
        assert_eq!(session.begin("   ").unwrap_err(), SubmitRejection::Blank);
        assert_eq!(session.begin("\n\t").unwrap_err(), SubmitRejection::Blank);
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_busy());
    }

    #[test]
    fn test_begin_appends_raw_user_text_and_marks_busy() {
        let mut session = ChatSession::new();
        let (user, pending) = session.begin("  How do I prepare for interviews?").unwrap();

        assert_eq!(session.messages().len(), 2);
        let last = session.messages().last().unwrap();
        assert_eq!(last.sender, Sender::User);
        assert_eq!(last.text, "  How do I prepare for interviews?");
        assert_eq!(last.id, user.id);
        assert!(session.is_busy());
        assert!(pending.prompt().starts_with(CAREER_ADVISOR_PREAMBLE));
        assert!(pending.prompt().ends_with("How do I prepare for interviews?"));
    }

    #[test]
    fn test_second_begin_while_busy_is_rejected() {
        let mut session = ChatSession::new();
        let _pending = session.begin("first").unwrap();
        assert_eq!(session.begin("second").unwrap_err(), SubmitRejection::Busy);
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn test_finish_success_appends_reply_verbatim() {
        let mut session = ChatSession::new();
        let (_, pending) = session.begin("hello").unwrap();
        let reply = session.finish(pending, Ok("X".to_string())).unwrap();
        assert_eq!(reply.sender, Sender::Bot);
        assert_eq!(reply.text, "X");
        assert!(!session.is_busy());
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn test_finish_failure_appends_fallback() {
        let mut session = ChatSession::new();
        let (_, pending) = session.begin("hello").unwrap();
        let reply = session.finish(pending, Err(LlmError::MissingApiKey)).unwrap();
        assert_eq!(reply.text, FALLBACK_REPLY);
        assert!(!session.is_busy());
    }

    #[test]
    fn test_stale_pending_reply_is_ignored() {
        let mut other = ChatSession::new();
        let (_, foreign) = other.begin("elsewhere").unwrap();

        let mut session = ChatSession::new();
        let _pending = session.begin("hello").unwrap();
        assert!(session.finish(foreign, Ok("nope".to_string())).is_none());
        assert_eq!(session.messages().len(), 2);
        assert!(session.is_busy());
    }

    #[test]
    fn test_message_ids_unique_across_session() {
        let mut session = ChatSession::new();
        for i in 0..20 {
            let (_, pending) = session.begin(&format!("question {i}")).unwrap();
            session.finish(pending, Ok(format!("answer {i}")));
        }
        let ids: HashSet<Uuid> = session.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), session.messages().len());
        assert_eq!(ids.len(), 41);
    }

    #[test]
    fn test_user_message_precedes_its_reply() {
        let mut session = ChatSession::new();
        let (_, pending) = session.begin("q").unwrap();
        session.finish(pending, Ok("a".to_string()));
        let senders: Vec<Sender> = session.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::Bot, Sender::User, Sender::Bot]);
    }

    #[tokio::test]
    async fn test_submit_grows_transcript_by_two() {
        let handle = SessionHandle::default();
        let service = Arc::new(ScriptedCompletion::replying("Consider data engineering."));

        let (user, reply) = handle.submit(service.clone(), "What next?").await.unwrap();
        assert_eq!(user.sender, Sender::User);

        let reply = reply.await.unwrap().unwrap();
        assert_eq!(reply.text, "Consider data engineering.");
        let view = handle.view().await;
        assert_eq!(view.messages.len(), 3);
        assert!(!view.busy);
        assert_eq!(service.calls(), 1);
    }

    #[tokio::test]
    async fn test_submit_failure_uses_fallback_text() {
        let handle = SessionHandle::default();
        let service = Arc::new(ScriptedCompletion::failing());

        let (_, reply) = handle.submit(service, "Hello?").await.unwrap();
        assert_eq!(reply.await.unwrap().unwrap().text, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_blank_submit_issues_no_request() {
        let handle = SessionHandle::default();
        let service = Arc::new(ScriptedCompletion::replying("unused"));

        assert_eq!(
            handle.submit(service.clone(), "   ").await.unwrap_err(),
            SubmitRejection::Blank
        );
        assert_eq!(service.calls(), 0);
        assert_eq!(handle.view().await.messages.len(), 1);
    }

    #[tokio::test]
    async fn test_user_message_visible_while_reply_pending() {
        let handle = SessionHandle::default();
        let service = Arc::new(ScriptedCompletion::gated(Some("X")));

        let (_, reply) = handle.submit(service.clone(), "first").await.unwrap();
        service.wait_for_calls(1).await;

        let view = handle.view().await;
        assert_eq!(view.messages.len(), 2);
        assert!(view.busy);

        // A second submission during the wait is a no-op and sends nothing.
        assert_eq!(
            handle.submit(service.clone(), "second").await.unwrap_err(),
            SubmitRejection::Busy
        );
        assert_eq!(handle.view().await.messages.len(), 2);
        assert_eq!(service.calls(), 1);

        service.release();
        assert_eq!(reply.await.unwrap().unwrap().text, "X");

        let view = handle.view().await;
        assert_eq!(view.messages.len(), 3);
        assert!(!view.busy);
        assert_eq!(service.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_gemini_reply_kept_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]},"finishReason":"STOP"}]}"#)
            .create_async()
            .await;
        let gemini = GeminiClient::new(
            Some("test-key".to_string()),
            server.url(),
            std::time::Duration::from_secs(5),
        )
        .unwrap();

        let handle = SessionHandle::default();
        let (_, reply) = handle.submit(Arc::new(gemini), "hello").await.unwrap();
        assert_eq!(reply.await.unwrap().unwrap().text, "  ");
    }
}
