use std::collections::HashSet;

use crate::reference::industry_label;
use crate::summary::item::SummaryItem;
use crate::summary::registry::{BuilderError, SummaryBuilder};
use crate::summary::state::{DraftOverrides, SummaryState};

const JOIN: &str = " | ";

/// Region, industries and roles. Each facet prefers the draft value.
///
/// Industries and roles each produce a collapsed row (labels joined with
/// `" | "`) followed by one pill per selected entry.
pub struct CoreSummaryBuilder;

impl SummaryBuilder for CoreSummaryBuilder {
    fn build(
        &self,
        state: &SummaryState,
        drafts: Option<&DraftOverrides>,
    ) -> Result<Vec<SummaryItem>, BuilderError> {
        let mut items = Vec::new();

        let region = drafts
            .and_then(|d| d.region.as_ref())
            .or(state.region.as_ref());
        if let Some(region) = region {
            items.push(SummaryItem::row("region", "Region", region.name.as_str()));
        }

        let codes = normalized_codes(
            drafts
                .and_then(|d| d.industry_codes.as_deref())
                .unwrap_or(&state.industry_codes),
        );
        if !codes.is_empty() {
            let labelled: Vec<(&str, &str)> = codes
                .into_iter()
                .map(|code| (code, industry_label(code).unwrap_or(code)))
                .collect();
            let joined = labelled
                .iter()
                .map(|(_, name)| *name)
                .collect::<Vec<_>>()
                .join(JOIN);
            items.push(SummaryItem::row("industries", "Industries", joined));
            items.extend(
                labelled
                    .into_iter()
                    .map(|(code, name)| SummaryItem::pill(format!("industry:{code}"), name)),
            );
        }

        let roles = drafts
            .and_then(|d| d.roles.as_deref())
            .unwrap_or(&state.roles);
        if !roles.is_empty() {
            let joined = roles
                .iter()
                .map(|r| r.title.as_str())
                .collect::<Vec<_>>()
                .join(JOIN);
            items.push(SummaryItem::row("roles", "Roles", joined));
            items.extend(
                roles
                    .iter()
                    .map(|r| SummaryItem::pill(format!("role:{}", r.id), r.title.as_str())),
            );
        }

        Ok(items)
    }
}

/// Trims codes, drops blanks and keeps the first occurrence of each.
/// Draft codes arrive unvalidated, unlike committed ones.
fn normalized_codes(codes: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    codes
        .iter()
        .map(|code| code.trim())
        .filter(|code| !code.is_empty() && seen.insert(*code))
        .collect()
}
