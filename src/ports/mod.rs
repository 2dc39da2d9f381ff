//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SubmissionGateway` - persists module submissions (autosave target)
//! - `SnapshotSource` - reads the latest submissions back so a user resumes

mod snapshot_source;
mod submission_gateway;

pub use snapshot_source::SnapshotSource;
pub use submission_gateway::{GatewayError, SubmissionGateway};
