pub mod orchestrator;
pub mod overview;
pub mod submission;

pub use orchestrator::{Dashboard, Route};
pub use overview::{DashboardOverview, ModuleCard, ModuleView};
pub use submission::{ProgressFlags, Submission};
