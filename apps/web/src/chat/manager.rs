//! In-memory registry of live chat sessions, one per visitor.

use std::collections::{HashMap, VecDeque};

use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::chat::session::{ChatSession, SessionHandle};

#[derive(Debug, Default)]
struct Registry {
    sessions: HashMap<Uuid, SessionHandle>,
    // Creation order, oldest first.
    order: VecDeque<Uuid>,
}

impl Registry {
    fn evict_one(&mut self) -> Option<Uuid> {
        let position = self
            .order
            .iter()
            .position(|id| self.sessions.get(id).map_or(true, SessionHandle::is_idle))
            .unwrap_or(0);
        let id = self.order.remove(position)?;
        self.sessions.remove(&id);
        Some(id)
    }
}

/// Holds at most `max_sessions` sessions. To make room the oldest idle session
/// is evicted; only when every session awaits a reply does the oldest one go.
#[derive(Debug)]
pub struct SessionManager {
    registry: RwLock<Registry>,
    max_sessions: usize,
}

impl SessionManager {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            registry: RwLock::new(Registry::default()),
            max_sessions: max_sessions.max(1),
        }
    }

    /// Starts a fresh session and returns its id with a handle to it.
    pub async fn create(&self) -> (Uuid, SessionHandle) {
        let session = ChatSession::new();
        let id = session.id();
        let handle = SessionHandle::new(session);

        let mut registry = self.registry.write().await;
        while registry.sessions.len() >= self.max_sessions {
            let Some(evicted) = registry.evict_one() else {
                break;
            };
            info!(session_id = %evicted, "Evicted chat session (capacity {})", self.max_sessions);
        }
        registry.sessions.insert(id, handle.clone());
        registry.order.push_back(id);

        (id, handle)
    }

    pub async fn get(&self, id: Uuid) -> Option<SessionHandle> {
        self.registry.read().await.sessions.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.registry.read().await.sessions.len()
    }
}
