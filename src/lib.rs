//! Mentor Diagnostic - guided diagnostic wizard for mentorship businesses
//!
//! Four questionnaires (Mentor, Mentee, Method, Delivery) walked step by step,
//! autosaved in the background and tracked on a dashboard. Mentor gates the
//! other three.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
