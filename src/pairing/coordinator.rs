//! Judging session coordination
//!
//! One judge working one event is a session. Requests for the same session
//! run one at a time behind a tokio mutex, so a judge refreshing their
//! screen cannot race their own vote. Each session caches the judged-set
//! per criteria, loaded from the grade ledger on first use and kept current
//! by the vote recorder afterwards.
//!
//! Different judges (and the same judge on different events) never contend
//! with each other.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use tokio::sync::Mutex;
use uuid::Uuid;

use super::scheduler::JudgedSet;

/// In-memory state for one judge working one event
#[derive(Debug, Default)]
pub struct JudgeSession {
    /// Judged-sets keyed by criteria; presence means loaded from the ledger
    sets: HashMap<String, JudgedSet>,
}

impl JudgeSession {
    /// Whether the judged-set for this criteria has been loaded
    pub fn is_loaded(&self, criteria: &str) -> bool {
        self.sets.contains_key(criteria)
    }

    /// Install a judged-set freshly loaded from the grade ledger
    pub fn install(&mut self, criteria: &str, set: JudgedSet) {
        self.sets.insert(criteria.to_string(), set);
    }

    /// The judged-set for this criteria, empty if none was loaded yet
    pub fn judged(&self, criteria: &str) -> &JudgedSet {
        static EMPTY: LazyLock<JudgedSet> = LazyLock::new(JudgedSet::default);
        self.sets.get(criteria).unwrap_or(&EMPTY)
    }

    /// Mark a pair as judged after its vote committed
    ///
    /// Only updates a set that is already loaded. An unloaded criteria keeps
    /// no partial state; its next load picks the pair up from the ledger.
    pub fn record(&mut self, criteria: &str, a: Uuid, b: Uuid) {
        if let Some(set) = self.sets.get_mut(criteria) {
            set.insert(a, b);
        }
    }
}

/// Registry of live judging sessions
///
/// Held in application state. Sessions are created on demand and dropped
/// when their event is deleted.
#[derive(Debug, Default)]
pub struct JudgingCoordinator {
    sessions: Mutex<HashMap<(Uuid, String), Arc<Mutex<JudgeSession>>>>,
}

impl JudgingCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The session for this judge on this event, created if absent
    ///
    /// The registry lock is only held long enough to clone the handle;
    /// callers then serialize on the session's own mutex.
    pub async fn session(&self, event_id: Uuid, judge_name: &str) -> Arc<Mutex<JudgeSession>> {
        let mut sessions = self.sessions.lock().await;
        sessions
            .entry((event_id, judge_name.to_string()))
            .or_default()
            .clone()
    }

    /// Drop every session belonging to an event
    pub async fn forget_event(&self, event_id: Uuid) {
        let mut sessions = self.sessions.lock().await;
        sessions.retain(|(id, _), _| *id != event_id);
    }
}
