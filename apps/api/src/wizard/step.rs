//! Two-way binding between the `?step=` query parameter and the session's
//! current wizard step.
//!
//! A valid step in the URL wins and is written into the state. A missing or
//! unrecognised one is replaced by the state's step, which the caller should
//! echo back as the canonical query value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::wizard::models::{WizardError, WizardState};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    #[default]
    Role,
    Abilities,
    Jobs,
    Training,
}

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::Role;
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Role,
        WizardStep::Abilities,
        WizardStep::Jobs,
        WizardStep::Training,
    ];

    pub fn as_query(self) -> &'static str {
        match self {
            WizardStep::Role => "role",
            WizardStep::Abilities => "abilities",
            WizardStep::Jobs => "jobs",
            WizardStep::Training => "training",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

impl FromStr for WizardStep {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        WizardStep::ALL
            .into_iter()
            .find(|step| step.as_query().eq_ignore_ascii_case(needle))
            .ok_or_else(|| WizardError::UnknownStep(needle.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StepSync {
    pub step: WizardStep,
    pub canonical_query: String,
    /// True when the query parameter moved the state to a different step.
    pub changed: bool,
}

pub fn sync_step(state: &mut WizardState, requested: Option<&str>) -> StepSync {
    let parsed = requested.and_then(|raw| match raw.parse::<WizardStep>() {
        Ok(step) => Some(step),
        Err(e) => {
            tracing::debug!("ignoring step query: {e}");
            None
        }
    });

    let changed = match parsed {
        Some(step) if step != state.step => {
            state.step = step;
            true
        }
        _ => false,
    };

    StepSync {
        step: state.step,
        canonical_query: state.step.as_query().to_string(),
        changed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_step_updates_state() {
        let mut state = WizardState::default();
        let sync = sync_step(&mut state, Some("jobs"));
        assert_eq!(state.step, WizardStep::Jobs);
        assert!(sync.changed);
        assert_eq!(sync.canonical_query, "jobs");
    }

    #[test]
    fn test_missing_query_reflects_state() {
        let mut state = WizardState {
            step: WizardStep::Abilities,
            ..Default::default()
        };
        let sync = sync_step(&mut state, None);
        assert!(!sync.changed);
        assert_eq!(sync.canonical_query, "abilities");
    }

    #[test]
    fn test_unknown_query_is_replaced_by_state_step() {
        let mut state = WizardState {
            step: WizardStep::Training,
            ..Default::default()
        };
        let sync = sync_step(&mut state, Some("checkout"));
        assert_eq!(state.step, WizardStep::Training);
        assert!(!sync.changed);
        assert_eq!(sync.canonical_query, "training");
    }

    #[test]
    fn test_same_step_is_not_a_change() {
        let mut state = WizardState::default();
        let sync = sync_step(&mut state, Some("ROLE"));
        assert_eq!(sync.step, WizardStep::FIRST);
        assert!(!sync.changed);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "nope".parse::<WizardStep>(),
            Err(WizardError::UnknownStep("nope".to_string()))
        );
    }
}
