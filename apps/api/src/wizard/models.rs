use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::wizard::step::WizardStep;

#[derive(Debug, Error, PartialEq)]
pub enum WizardError {
    #[error("invalid selection: {0}")]
    Invalid(String),

    #[error("unknown wizard step '{0}'")]
    UnknownStep(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Region {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Role {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AbilityKind {
    Knowledge,
    Tech,
    Skill,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ability {
    pub id: String,
    pub label: String,
    pub kind: AbilityKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    pub id: String,
    pub title: String,
}

/// Committed wizard selections for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WizardState {
    pub step: WizardStep,
    pub region: Option<Region>,
    pub industry_codes: Vec<String>,
    pub roles: Vec<Role>,
    pub abilities: Vec<Ability>,
    pub target_job: Option<Job>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardAction {
    SetRegion { region: Region },
    ClearRegion,
    SetIndustries { codes: Vec<String> },
    SetRoles { roles: Vec<Role> },
    SetAbilities { abilities: Vec<Ability> },
    SelectJob { job: Job },
    ClearJob,
    GoToStep { step: WizardStep },
    Reset,
}

impl WizardState {
    /// Applies one action. On error the state is left untouched.
    pub fn apply(&mut self, action: WizardAction) -> Result<(), WizardError> {
        match action {
            WizardAction::SetRegion { region } => {
                require_non_blank("region code", &region.code)?;
                self.region = Some(region);
            }
            WizardAction::ClearRegion => self.region = None,
            WizardAction::SetIndustries { codes } => {
                let mut seen = HashSet::new();
                let mut deduped = Vec::with_capacity(codes.len());
                for code in codes {
                    let code = code.trim().to_string();
                    require_non_blank("industry code", &code)?;
                    if seen.insert(code.clone()) {
                        deduped.push(code);
                    }
                }
                self.industry_codes = deduped;
            }
            WizardAction::SetRoles { roles } => {
                for role in &roles {
                    require_non_blank("role id", &role.id)?;
                }
                self.roles = roles;
            }
            WizardAction::SetAbilities { abilities } => {
                let mut seen = HashSet::new();
                let mut deduped = Vec::with_capacity(abilities.len());
                for ability in abilities {
                    require_non_blank("ability id", &ability.id)?;
                    if seen.insert(ability.id.clone()) {
                        deduped.push(ability);
                    }
                }
                self.abilities = deduped;
            }
            WizardAction::SelectJob { job } => {
                require_non_blank("job id", &job.id)?;
                self.target_job = Some(job);
            }
            WizardAction::ClearJob => self.target_job = None,
            WizardAction::GoToStep { step } => self.step = step,
            WizardAction::Reset => *self = WizardState::default(),
        }
        Ok(())
    }
}

fn require_non_blank(what: &str, value: &str) -> Result<(), WizardError> {
    if value.trim().is_empty() {
        return Err(WizardError::Invalid(format!("{what} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ability(id: &str, kind: AbilityKind) -> Ability {
        Ability {
            id: id.to_string(),
            label: id.to_uppercase(),
            kind,
        }
    }

    #[test]
    fn test_set_industries_dedupes_in_first_seen_order() {
        let mut state = WizardState::default();
        state
            .apply(WizardAction::SetIndustries {
                codes: vec!["62".into(), " 54 ".into(), "62".into()],
            })
            .unwrap();
        assert_eq!(state.industry_codes, vec!["62".to_string(), "54".to_string()]);
    }

    #[test]
    fn test_blank_industry_code_rejected_without_mutation() {
        let mut state = WizardState::default();
        state
            .apply(WizardAction::SetIndustries {
                codes: vec!["62".into()],
            })
            .unwrap();
        let err = state
            .apply(WizardAction::SetIndustries {
                codes: vec!["54".into(), "  ".into()],
            })
            .unwrap_err();
        assert!(matches!(err, WizardError::Invalid(_)));
        assert_eq!(state.industry_codes, vec!["62".to_string()]);
    }

    #[test]
    fn test_set_abilities_dedupes_by_id() {
        let mut state = WizardState::default();
        state
            .apply(WizardAction::SetAbilities {
                abilities: vec![
                    ability("k1", AbilityKind::Knowledge),
                    ability("k1", AbilityKind::Tech),
                    ability("t1", AbilityKind::Tech),
                ],
            })
            .unwrap();
        assert_eq!(state.abilities.len(), 2);
        assert_eq!(state.abilities[0].kind, AbilityKind::Knowledge);
    }

    #[test]
    fn test_select_and_clear_job() {
        let mut state = WizardState::default();
        state
            .apply(WizardAction::SelectJob {
                job: Job {
                    id: "15-1252".into(),
                    title: "Software Developer".into(),
                },
            })
            .unwrap();
        assert!(state.target_job.is_some());
        state.apply(WizardAction::ClearJob).unwrap();
        assert!(state.target_job.is_none());
    }

    #[test]
    fn test_reset_restores_default() {
        let mut state = WizardState::default();
        state
            .apply(WizardAction::GoToStep {
                step: WizardStep::Training,
            })
            .unwrap();
        state.apply(WizardAction::Reset).unwrap();
        assert_eq!(state, WizardState::default());
    }

    #[test]
    fn test_action_deserializes_from_tagged_json() {
        let action: WizardAction = serde_json::from_str(
            r#"{"type":"set_region","region":{"code":"VIC","name":"Victoria"}}"#,
        )
        .unwrap();
        assert!(matches!(action, WizardAction::SetRegion { .. }));
    }
}
