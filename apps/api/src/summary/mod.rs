// Summary aggregation: independently registered builders each contribute
// entries, concatenated in priority order into one list for the UI.

pub mod builders;
pub mod handlers;
pub mod item;
pub mod live_view;
pub mod registry;
pub mod state;

pub use item::{SummaryItem, SummaryValue};
pub use live_view::LiveSummary;
pub use registry::{
    Aggregation, BuilderError, BuilderFailure, SummaryBuilder, SummaryRegistry, DEFAULT_PRIORITY,
};
pub use state::{DraftOverrides, SummaryState};
