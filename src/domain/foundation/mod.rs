//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the diagnostic domain.

mod errors;
mod identity;
mod ids;
mod module_id;
mod module_status;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use identity::Identity;
pub use ids::ItemId;
pub use module_id::ModuleId;
pub use module_status::{ModuleProgress, ModuleStatus};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
