//! Application layer - side effects around the pure domain.
//!
//! - `autosave` - debounced persistence of one module
//! - `session` - one user's dashboard wired to autosave
//! - `registry` - one session per identity

pub mod autosave;
pub mod registry;
pub mod session;

pub use autosave::{AutoSaveConfig, AutoSavePipeline, SaveIndicator};
pub use registry::{SessionRegistry, SharedSession};
pub use session::DiagnosticSession;
