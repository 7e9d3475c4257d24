//! Library powering the case intake valuation service: configuration,
//! telemetry, and the estimation workflows.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
