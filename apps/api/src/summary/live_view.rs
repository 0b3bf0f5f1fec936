//! Memoized summary view for one wizard session.
//!
//! Aggregation is re-run only when the selected `SummaryState` slice differs
//! by value from the last one, or when a different drafts `Arc` is passed.
//! Changes to fields outside the slice (the wizard step, for instance) reuse
//! the cached result.
//!
//! The committed view (no drafts) and the draft preview are cached in separate
//! slots, so a preview never evicts the committed summary.

use std::sync::Arc;

use crate::summary::registry::{Aggregation, SummaryRegistry};
use crate::summary::state::{DraftOverrides, SummaryState};
use crate::wizard::WizardState;

struct Cached {
    slice: SummaryState,
    drafts: Option<Arc<DraftOverrides>>,
    result: Arc<Aggregation>,
}

#[derive(Default)]
pub struct LiveSummary {
    committed: Option<Cached>,
    preview: Option<Cached>,
    recomputations: u64,
}

impl LiveSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(
        &mut self,
        registry: &SummaryRegistry,
        wizard: &WizardState,
        drafts: Option<&Arc<DraftOverrides>>,
    ) -> Arc<Aggregation> {
        let slice = SummaryState::select(wizard);
        let slot = if drafts.is_some() {
            &mut self.preview
        } else {
            &mut self.committed
        };

        if let Some(cached) = slot.as_ref() {
            if cached.slice == slice && same_drafts(cached.drafts.as_ref(), drafts) {
                return Arc::clone(&cached.result);
            }
        }

        let result = Arc::new(registry.aggregate(&slice, drafts.map(|d| &**d)));
        self.recomputations += 1;
        tracing::trace!(
            recomputations = self.recomputations,
            items = result.items.len(),
            "summary recomputed"
        );
        *slot = Some(Cached {
            slice,
            drafts: drafts.cloned(),
            result: Arc::clone(&result),
        });
        result
    }

    pub fn invalidate(&mut self) {
        self.committed = None;
        self.preview = None;
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}

fn same_drafts(a: Option<&Arc<DraftOverrides>>, b: Option<&Arc<DraftOverrides>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::builders::register_builtin_builders;
    use crate::wizard::{WizardAction, WizardStep};

    fn registry() -> SummaryRegistry {
        let mut registry = SummaryRegistry::new();
        register_builtin_builders(&mut registry);
        registry
    }

    fn wizard_with_industry(code: &str) -> WizardState {
        let mut state = WizardState::default();
        state
            .apply(WizardAction::SetIndustries {
                codes: vec![code.to_string()],
            })
            .unwrap();
        state
    }

    #[test]
    fn test_unchanged_slice_reuses_result() {
        let registry = registry();
        let mut live = LiveSummary::new();
        let wizard = wizard_with_industry("62");

        let first = live.view(&registry, &wizard, None);
        let second = live.view(&registry, &wizard, None);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(live.recomputations(), 1);
    }

    #[test]
    fn test_change_outside_slice_is_ignored() {
        let registry = registry();
        let mut live = LiveSummary::new();
        let mut wizard = wizard_with_industry("62");

        live.view(&registry, &wizard, None);
        wizard
            .apply(WizardAction::GoToStep {
                step: WizardStep::Jobs,
            })
            .unwrap();
        live.view(&registry, &wizard, None);
        assert_eq!(live.recomputations(), 1);
    }

    #[test]
    fn test_slice_change_recomputes() {
        let registry = registry();
        let mut live = LiveSummary::new();

        live.view(&registry, &wizard_with_industry("62"), None);
        let result = live.view(&registry, &wizard_with_industry("23"), None);
        assert_eq!(live.recomputations(), 2);
        assert_eq!(result.items[1].id, "industry:23");
    }

    #[test]
    fn test_drafts_compared_by_reference() {
        let registry = registry();
        let mut live = LiveSummary::new();
        let wizard = wizard_with_industry("62");
        let drafts = Arc::new(DraftOverrides::default());

        live.view(&registry, &wizard, Some(&drafts));
        live.view(&registry, &wizard, Some(&Arc::clone(&drafts)));
        assert_eq!(live.recomputations(), 1);

        // equal contents, new allocation
        let fresh = Arc::new(DraftOverrides::default());
        live.view(&registry, &wizard, Some(&fresh));
        assert_eq!(live.recomputations(), 2);

        live.view(&registry, &wizard, None);
        assert_eq!(live.recomputations(), 3);
    }

    #[test]
    fn test_preview_does_not_evict_committed_view() {
        let registry = registry();
        let mut live = LiveSummary::new();
        let wizard = wizard_with_industry("62");

        let committed = live.view(&registry, &wizard, None);
        let drafts = Arc::new(DraftOverrides {
            industry_codes: Some(vec!["23".into()]),
            ..Default::default()
        });
        let preview = live.view(&registry, &wizard, Some(&drafts));
        assert_eq!(preview.items[1].id, "industry:23");

        let again = live.view(&registry, &wizard, None);
        assert!(Arc::ptr_eq(&committed, &again));
        assert_eq!(live.recomputations(), 2);

        let preview_again = live.view(&registry, &wizard, Some(&drafts));
        assert!(Arc::ptr_eq(&preview, &preview_again));
        assert_eq!(live.recomputations(), 2);
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let registry = registry();
        let mut live = LiveSummary::new();
        let wizard = WizardState::default();

        live.view(&registry, &wizard, None);
        live.invalidate();
        live.view(&registry, &wizard, None);
        assert_eq!(live.recomputations(), 2);
    }
}
