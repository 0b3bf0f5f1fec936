use serde::{Deserialize, Serialize};

use crate::wizard::{Ability, Job, Region, Role, WizardState};

/// The part of the wizard state that summary builders read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SummaryState {
    pub region: Option<Region>,
    pub industry_codes: Vec<String>,
    pub roles: Vec<Role>,
    pub abilities: Vec<Ability>,
    pub target_job: Option<Job>,
}

impl SummaryState {
    pub fn select(wizard: &WizardState) -> Self {
        Self {
            region: wizard.region.clone(),
            industry_codes: wizard.industry_codes.clone(),
            roles: wizard.roles.clone(),
            abilities: wizard.abilities.clone(),
            target_job: wizard.target_job.clone(),
        }
    }
}

/// Selections the user is still editing. A `Some` field replaces the
/// committed value, including `Some(vec![])`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DraftOverrides {
    pub region: Option<Region>,
    pub industry_codes: Option<Vec<String>>,
    pub roles: Option<Vec<Role>>,
    pub abilities: Option<Vec<Ability>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::WizardStep;

    #[test]
    fn test_select_ignores_step() {
        let a = WizardState {
            step: WizardStep::Role,
            industry_codes: vec!["62".into()],
            ..Default::default()
        };
        let b = WizardState {
            step: WizardStep::Training,
            ..a.clone()
        };
        assert_eq!(SummaryState::select(&a), SummaryState::select(&b));
    }

    #[test]
    fn test_drafts_accept_partial_json() {
        let drafts: DraftOverrides =
            serde_json::from_str(r#"{"industry_codes":[]}"#).unwrap();
        assert_eq!(drafts.industry_codes, Some(vec![]));
        assert!(drafts.region.is_none());
    }
}
