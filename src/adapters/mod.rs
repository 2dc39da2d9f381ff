//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `submission` - Submission stores (in-memory, YAML files, remote endpoint)
//! - `http` - REST API over the diagnostic session and the scoring helpers

pub mod http;
pub mod submission;

pub use submission::{
    FileSubmissionStore, HttpGatewayConfig, HttpSubmissionGateway, InMemorySubmissionStore,
};
