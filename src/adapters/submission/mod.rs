//! Submission adapters - implementations of `SubmissionGateway` and
//! `SnapshotSource`.

mod file_store;
mod http_gateway;
mod in_memory;

pub use file_store::FileSubmissionStore;
pub use http_gateway::{HttpGatewayConfig, HttpSubmissionGateway};
pub use in_memory::InMemorySubmissionStore;
