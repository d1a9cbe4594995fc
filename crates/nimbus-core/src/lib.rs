//! Nimbus Core - Shared types and traits
//!
//! This crate defines the core abstractions used across:
//! - nimbus-simulation (traffic, cost and latency models, feedback session)
//! - nimbus-cli (control and display surface)
//!
//! Key types:
//! - SimulationInputs (the three bounded dashboard controls)
//! - HourlySeries and CostBreakdown (simulation outputs)
//! - FeedbackEntry and InvocationLogEntry (session records)
//! - Clock trait (time source for timestamps)
//! - Error types

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
