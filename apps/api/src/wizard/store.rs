use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::summary::live_view::LiveSummary;
use crate::summary::registry::{Aggregation, SummaryRegistry};
use crate::summary::state::DraftOverrides;
use crate::wizard::models::{WizardAction, WizardState};
use crate::wizard::step::{sync_step, StepSync};

struct Session {
    state: WizardState,
    live: Mutex<LiveSummary>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Session {
    fn snapshot(&self, id: Uuid) -> SessionSnapshot {
        SessionSnapshot {
            id,
            state: self.state.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub state: WizardState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// In-memory wizard sessions keyed by id. Cheap to clone.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> SessionSnapshot {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let session = Session {
            state: WizardState::default(),
            live: Mutex::new(LiveSummary::new()),
            created_at: now,
            updated_at: now,
        };
        let snapshot = session.snapshot(id);
        self.inner.write().await.insert(id, session);
        debug!(session_id = %id, "wizard session created");
        snapshot
    }

    pub async fn get(&self, id: Uuid) -> Option<SessionSnapshot> {
        self.inner.read().await.get(&id).map(|s| s.snapshot(id))
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    pub async fn dispatch(&self, id: Uuid, action: WizardAction) -> Result<SessionSnapshot, AppError> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        session.state.apply(action)?;
        session.updated_at = Utc::now();
        Ok(session.snapshot(id))
    }

    pub async fn sync_step(
        &self,
        id: Uuid,
        requested: Option<&str>,
    ) -> Result<(SessionSnapshot, StepSync), AppError> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        let sync = sync_step(&mut session.state, requested);
        if sync.changed {
            session.updated_at = Utc::now();
        }
        Ok((session.snapshot(id), sync))
    }

    /// Memoized summary for the session's committed state plus optional drafts.
    ///
    /// Only the map's read lock is taken; the per-session memo has its own
    /// mutex, so summaries of different sessions do not serialize.
    pub async fn summary(
        &self,
        id: Uuid,
        registry: &SummaryRegistry,
        drafts: Option<&Arc<DraftOverrides>>,
    ) -> Result<Arc<Aggregation>, AppError> {
        let sessions = self.inner.read().await;
        let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
        let mut live = session.live.lock().await;
        Ok(live.view(registry, &session.state, drafts))
    }

    /// Drops sessions whose last update is older than `ttl`. Returns how many were removed.
    pub async fn evict_idle(&self, ttl: Duration) -> usize {
        // a ttl too large to subtract from now means nothing can be idle yet
        let Ok(ttl) = chrono::Duration::from_std(ttl) else {
            return 0;
        };
        let Some(cutoff) = Utc::now().checked_sub_signed(ttl) else {
            return 0;
        };

        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.updated_at >= cutoff);
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(evicted, remaining = sessions.len(), "evicted idle wizard sessions");
        }
        evicted
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}
