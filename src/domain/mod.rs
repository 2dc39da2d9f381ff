//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `answers` - Per-module answer records and their step rules
//! - `wizard` - Step sequencing, validation gate and the per-module state machine
//! - `scoring` - Positional scoring for the target and radar widgets
//! - `dashboard` - Module selection, gating and submissions

pub mod answers;
pub mod dashboard;
pub mod foundation;
pub mod scoring;
pub mod wizard;
