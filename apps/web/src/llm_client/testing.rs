//! Scripted `CompletionService` for unit and handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use super::{CompletionService, LlmError};

/// Answers every prompt with a fixed reply (or `EmptyContent` when `reply` is `None`).
///
/// A gated instance parks each call until `release` is called, which lets a
/// test observe the session while a completion is in flight.
pub struct ScriptedCompletion {
    reply: Option<String>,
    gate: Semaphore,
    calls: AtomicUsize,
    prompts: std::sync::Mutex<Vec<String>>,
}

impl ScriptedCompletion {
    pub fn replying(text: &str) -> Self {
        Self::build(Some(text.to_string()), Semaphore::MAX_PERMITS)
    }

    pub fn failing() -> Self {
        Self::build(None, Semaphore::MAX_PERMITS)
    }

    pub fn gated(reply: Option<&str>) -> Self {
        Self::build(reply.map(str::to_string), 0)
    }

    fn build(reply: Option<String>, permits: usize) -> Self {
        Self {
            reply,
            gate: Semaphore::new(permits),
            calls: AtomicUsize::new(0),
            prompts: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Lets one parked call finish.
    pub fn release(&self) {
        self.gate.add_permits(1);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Yields until `n` calls have started.
    pub async fn wait_for_calls(&self, n: usize) {
        while self.calls() < n {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl CompletionService for ScriptedCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.calls.fetch_add(1, Ordering::SeqCst);
        let permit = self
            .gate
            .acquire()
            .await
            .expect("scripted completion gate closed");
        permit.forget();
        self.reply.clone().ok_or(LlmError::EmptyContent)
    }
}
