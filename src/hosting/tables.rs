use crate::session::Controller;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use tokio::sync::Mutex;
use tokio::sync::RwLock;

pub type SessionId = u64;
pub type Session = Arc<Mutex<Controller>>;

/// Live sessions, each behind its own lock so that one session's training
/// never blocks another's rounds.
pub struct Tables {
    sessions: RwLock<HashMap<SessionId, Session>>,
    count: AtomicU64,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            count: AtomicU64::new(1),
        }
    }
}

impl Tables {
    /// Opens a fresh, untrained session and returns its ID.
    pub async fn open(&self) -> SessionId {
        let id = self.count.fetch_add(1, Ordering::Relaxed);
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(Controller::default())));
        log::info!("opened session {} ({} live)", id, self.len().await);
        id
    }

    /// Drops a session along with its samples and model.
    pub async fn close(&self, id: SessionId) -> anyhow::Result<()> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| log::info!("closed session {}", id))
            .ok_or_else(|| anyhow::anyhow!("session {} not found", id))
    }

    pub async fn get(&self, id: SessionId) -> anyhow::Result<Session> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("session {} not found", id))
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
