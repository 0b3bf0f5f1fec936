//! Summary registry: priority-ordered list of pluggable summary builders.
//!
//! Built once at startup with `&mut` registration, then shared read-only as
//! `Arc<SummaryRegistry>` in `AppState`. `aggregate` runs every builder in
//! order and keeps going when one of them fails; failures are returned next to
//! the items instead of being dropped.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::summary::item::SummaryItem;
use crate::summary::state::{DraftOverrides, SummaryState};

pub const DEFAULT_PRIORITY: i32 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Builder trait
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
pub enum BuilderError {
    #[error("{0}")]
    Failed(String),

    #[error("builder panicked: {0}")]
    Panicked(String),
}

/// A summary builder. Must be a pure function of `(state, drafts)`.
///
/// Builders that have no use for drafts ignore the second argument.
pub trait SummaryBuilder: Send + Sync {
    fn build(
        &self,
        state: &SummaryState,
        drafts: Option<&DraftOverrides>,
    ) -> Result<Vec<SummaryItem>, BuilderError>;
}

impl<F> SummaryBuilder for F
where
    F: Fn(&SummaryState, Option<&DraftOverrides>) -> Result<Vec<SummaryItem>, BuilderError>
        + Send
        + Sync,
{
    fn build(
        &self,
        state: &SummaryState,
        drafts: Option<&DraftOverrides>,
    ) -> Result<Vec<SummaryItem>, BuilderError> {
        self(state, drafts)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregation output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuilderFailure {
    pub key: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Aggregation {
    pub items: Vec<SummaryItem>,
    pub failures: Vec<BuilderFailure>,
}

// ────────────────────────────────────────────────────────────────────────────
// Registry
// ────────────────────────────────────────────────────────────────────────────

struct Registration {
    key: String,
    priority: i32,
    builder: Arc<dyn SummaryBuilder>,
}

#[derive(Default)]
pub struct SummaryRegistry {
    entries: Vec<Registration>,
}

impl SummaryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `builder` under `key`. The first registration of a key wins:
    /// later calls with the same key are ignored and return `false`.
    pub fn register<B>(&mut self, key: impl Into<String>, builder: B, priority: i32) -> bool
    where
        B: SummaryBuilder + 'static,
    {
        let key = key.into();
        if self.contains(&key) {
            tracing::debug!(key = %key, "summary builder already registered; ignoring");
            return false;
        }
        self.entries.push(Registration {
            key,
            priority,
            builder: Arc::new(builder),
        });
        // stable: equal priorities stay in registration order
        self.entries.sort_by_key(|r| r.priority);
        true
    }

    pub fn register_default<B>(&mut self, key: impl Into<String>, builder: B) -> bool
    where
        B: SummaryBuilder + 'static,
    {
        self.register(key, builder, DEFAULT_PRIORITY)
    }

    /// Test isolation only.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|r| r.key == key)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|r| r.key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn aggregate(&self, state: &SummaryState, drafts: Option<&DraftOverrides>) -> Aggregation {
        let mut out = Aggregation::default();

        for entry in &self.entries {
            let result = catch_unwind(AssertUnwindSafe(|| entry.builder.build(state, drafts)))
                .unwrap_or_else(|payload| Err(BuilderError::Panicked(panic_message(&*payload))));

            match result {
                Ok(items) => out.items.extend(items),
                Err(error) => {
                    tracing::warn!(key = %entry.key, %error, "summary builder failed; skipping");
                    out.failures.push(BuilderFailure {
                        key: entry.key.clone(),
                        error: error.to_string(),
                    });
                }
            }
        }

        out
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
