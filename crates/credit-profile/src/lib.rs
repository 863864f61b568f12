//! Synthetic credit profiles computed from a handful of applicant financial attributes.
//!
//! - `profile`: intake validation, the scoring engine, insight and recommendation
//!   generators, report views, the remote predictor adapter and HTTP routes.
//! - `config`: environment-driven application configuration.
//! - `telemetry`: tracing subscriber setup.
//! - `error`: application-level error type.

pub mod config;
pub mod error;
pub mod profile;
pub mod telemetry;
