// Wizard session state: the selections the summary builders read.
// Reducer + step sync are pure; the store wraps them per session.

pub mod handlers;
pub mod models;
pub mod step;
pub mod store;

pub use models::{Ability, AbilityKind, Job, Region, Role, WizardAction, WizardError, WizardState};
pub use step::{sync_step, StepSync, WizardStep};
pub use store::{SessionSnapshot, SessionStore};
