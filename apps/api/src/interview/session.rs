//! In-memory interview session store.
//!
//! Turns within one session are serialized by a per-session turn lock held for
//! render + model call + append, so they apply in submission order. The history
//! itself sits behind a read/write lock that is only write-locked for the final
//! append, so viewing a session never waits on a pending model call.
//!
//! Sessions idle for longer than the store's TTL are dropped: lazily when looked
//! up, and in a sweep whenever a new session is created.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::info;
use uuid::Uuid;

use crate::chain::ChainRunner;
use crate::errors::AppError;
use crate::interview::coach::take_turn;
use crate::interview::history::{ConversationHistory, ConversationTurn};

pub type SessionHandle = Arc<InterviewSession>;

#[derive(Default)]
pub struct InterviewSession {
    turn_lock: Mutex<()>,
    history: RwLock<ConversationHistory>,
}

impl InterviewSession {
    /// Committed turns, oldest first.
    pub async fn turns(&self) -> Vec<ConversationTurn> {
        self.history.read().await.turns().to_vec()
    }

    /// Runs one turn and returns the reply with the history after it.
    ///
    /// The turn works on a copy of the history; the copy replaces the stored
    /// history only once the model has replied.
    pub async fn submit_turn(
        &self,
        chain: &ChainRunner,
        user_input: &str,
        window: Option<usize>,
    ) -> Result<(String, Vec<ConversationTurn>), AppError> {
        let _turn = self.turn_lock.lock().await;

        let mut draft = self.history.read().await.clone();
        let reply = take_turn(chain, &mut draft, user_input, window).await?;
        let turns = draft.turns().to_vec();
        *self.history.write().await = draft;

        Ok((reply, turns))
    }
}

struct SessionEntry {
    session: SessionHandle,
    last_active: Instant,
}

impl SessionEntry {
    fn is_idle(&self, now: Instant, ttl: Option<Duration>) -> bool {
        ttl.is_some_and(|ttl| now.duration_since(self.last_active) > ttl)
    }
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<DashMap<Uuid, SessionEntry>>,
    ttl: Option<Duration>,
}

impl SessionStore {
    /// `ttl` of `None` keeps sessions until they are ended explicitly.
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            ttl,
        }
    }

    /// Starts a session with an empty history.
    pub fn create(&self) -> Uuid {
        self.evict_idle();

        let id = Uuid::new_v4();
        self.sessions.insert(
            id,
            SessionEntry {
                session: Arc::default(),
                last_active: Instant::now(),
            },
        );
        info!("Interview session {id} started ({} active)", self.len());
        id
    }

    /// Looks up a live session and marks it active.
    pub fn get(&self, id: Uuid) -> Option<SessionHandle> {
        let now = Instant::now();
        if let Some(mut entry) = self.sessions.get_mut(&id) {
            if !entry.is_idle(now, self.ttl) {
                entry.last_active = now;
                return Some(Arc::clone(&entry.session));
            }
        }

        if self
            .sessions
            .remove_if(&id, |_, entry| entry.is_idle(now, self.ttl))
            .is_some()
        {
            info!("Interview session {id} expired ({} active)", self.len());
        }
        None
    }

    /// Ends a session and drops its history. Returns false if it did not exist.
    pub fn end(&self, id: Uuid) -> bool {
        let removed = self.sessions.remove(&id).is_some();
        if removed {
            info!("Interview session {id} ended ({} active)", self.len());
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    fn evict_idle(&self) {
        if self.ttl.is_none() {
            return;
        }
        let now = Instant::now();
        let before = self.len();
        self.sessions
            .retain(|_, entry| !entry.is_idle(now, self.ttl));
        let evicted = before.saturating_sub(self.len());
        if evicted > 0 {
            info!("Evicted {evicted} idle interview session(s)");
        }
    }
}
