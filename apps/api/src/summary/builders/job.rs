use crate::summary::item::SummaryItem;
use crate::summary::registry::{BuilderError, SummaryBuilder};
use crate::summary::state::{DraftOverrides, SummaryState};

/// One pill for the selected target job, nothing otherwise.
pub struct JobSummaryBuilder;

impl SummaryBuilder for JobSummaryBuilder {
    fn build(
        &self,
        state: &SummaryState,
        _drafts: Option<&DraftOverrides>,
    ) -> Result<Vec<SummaryItem>, BuilderError> {
        Ok(state
            .target_job
            .iter()
            .map(|job| SummaryItem::pill(format!("job:{}", job.id), job.title.as_str()))
            .collect())
    }
}
