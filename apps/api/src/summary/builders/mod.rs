// Built-in summary builders.
// Priorities put foundational selections (region, industry, role) ahead of
// the narrower facets derived from them (job pick, ability tally).

pub mod abilities;
pub mod job;
pub mod selections;

pub use abilities::AbilityCountsBuilder;
pub use job::JobSummaryBuilder;
pub use selections::CoreSummaryBuilder;

use crate::summary::registry::SummaryRegistry;

pub const CORE_KEY: &str = "core";
pub const JOB_KEY: &str = "job";
pub const ABILITY_COUNTS_KEY: &str = "ability-counts";

pub const CORE_PRIORITY: i32 = 20;
pub const JOB_PRIORITY: i32 = 30;
pub const ABILITY_COUNTS_PRIORITY: i32 = 40;

/// Registers the built-in builders. Safe to call more than once.
pub fn register_builtin_builders(registry: &mut SummaryRegistry) {
    registry.register(CORE_KEY, CoreSummaryBuilder, CORE_PRIORITY);
    registry.register(JOB_KEY, JobSummaryBuilder, JOB_PRIORITY);
    registry.register(
        ABILITY_COUNTS_KEY,
        AbilityCountsBuilder,
        ABILITY_COUNTS_PRIORITY,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::state::{DraftOverrides, SummaryState};
    use crate::wizard::{Ability, AbilityKind, Job, Region, Role};

    fn full_state() -> SummaryState {
        SummaryState {
            region: Some(Region {
                code: "VIC".into(),
                name: "Victoria".into(),
            }),
            industry_codes: vec!["62".into()],
            roles: vec![Role {
                id: "2544".into(),
                title: "Registered Nurse".into(),
            }],
            abilities: vec![Ability {
                id: "k-med".into(),
                label: "Medicine".into(),
                kind: AbilityKind::Knowledge,
            }],
            target_job: Some(Job {
                id: "254412".into(),
                title: "Aged Care Nurse".into(),
            }),
        }
    }

    #[test]
    fn test_builtins_register_in_priority_order() {
        let mut registry = SummaryRegistry::new();
        register_builtin_builders(&mut registry);
        assert_eq!(registry.keys(), vec![CORE_KEY, JOB_KEY, ABILITY_COUNTS_KEY]);
    }

    #[test]
    fn test_register_builtins_twice_is_idempotent() {
        let mut registry = SummaryRegistry::new();
        register_builtin_builders(&mut registry);
        register_builtin_builders(&mut registry);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_core_precedes_job_even_when_registered_later() {
        let mut registry = SummaryRegistry::new();
        registry.register(JOB_KEY, JobSummaryBuilder, JOB_PRIORITY);
        registry.register(CORE_KEY, CoreSummaryBuilder, CORE_PRIORITY);

        let agg = registry.aggregate(&full_state(), None);
        let ids: Vec<&str> = agg.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["region", "industries", "industry:62", "roles", "role:2544", "job:254412"]
        );
    }

    #[test]
    fn test_full_pipeline_order() {
        let mut registry = SummaryRegistry::new();
        register_builtin_builders(&mut registry);

        let agg = registry.aggregate(&full_state(), None);
        assert!(agg.failures.is_empty());
        assert_eq!(agg.items.first().map(|i| i.id.as_str()), Some("region"));
        assert_eq!(agg.items.last().map(|i| i.id.as_str()), Some("ability-counts"));
    }

    #[test]
    fn test_repeated_aggregation_is_deep_equal() {
        let mut registry = SummaryRegistry::new();
        register_builtin_builders(&mut registry);
        let state = full_state();
        let drafts = DraftOverrides {
            industry_codes: Some(vec!["54".into(), "99".into()]),
            ..Default::default()
        };
        let before = state.clone();

        let first = registry.aggregate(&state, Some(&drafts));
        let second = registry.aggregate(&state, Some(&drafts));
        assert_eq!(first, second);
        assert_eq!(state, before);
    }
}
