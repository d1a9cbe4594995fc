//! Pay-per-use pricing model
//!
//! Mirrors Lambda-style billing:
//! - compute is billed per GB-second (memory in GB × duration in s × invocations)
//! - requests are billed per million invocations
//! - logging and storage are flat fractions of the compute + request total
//!
//! Prices can be overridden from a JSON file; missing fields keep their
//! defaults.

use std::fs;
use std::path::Path;

use nimbus_core::{CostBreakdown, NimbusError, Result, SimulationInputs};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default compute price ($ per GB-second)
pub const PRICE_PER_GB_SECOND: f64 = 0.0000166667;

/// Default request price ($ per million invocations)
pub const PRICE_PER_MILLION_INVOCATIONS: f64 = 0.20;

/// Logging & monitoring share of the total cost
pub const LOGGING_SHARE: f64 = 0.02;

/// Storage share of the total cost
pub const STORAGE_SHARE: f64 = 0.05;

/// Prices and derived-cost fractions used by [`PricingModel::compute_cost`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingModel {
    pub price_per_gb_second: f64,
    pub price_per_million_invocations: f64,
    pub logging_share: f64,
    pub storage_share: f64,
}

impl Default for PricingModel {
    fn default() -> Self {
        Self {
            price_per_gb_second: PRICE_PER_GB_SECOND,
            price_per_million_invocations: PRICE_PER_MILLION_INVOCATIONS,
            logging_share: LOGGING_SHARE,
            storage_share: STORAGE_SHARE,
        }
    }
}

impl PricingModel {
    /// Load a pricing model from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let model: PricingModel = serde_json::from_str(&raw)?;
        model.validate()?;

        info!("Loaded pricing model from {}", path.display());
        Ok(model)
    }

    /// Reject negative or non-finite prices
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("price_per_gb_second", self.price_per_gb_second),
            ("price_per_million_invocations", self.price_per_million_invocations),
            ("logging_share", self.logging_share),
            ("storage_share", self.storage_share),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(NimbusError::config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// GB-seconds consumed by one hour of traffic
    pub fn gb_seconds(inputs: &SimulationInputs) -> f64 {
        (inputs.memory_mb() as f64 / 1024.0)
            * (inputs.avg_duration_ms() as f64 / 1000.0)
            * inputs.invocations_per_hour() as f64
    }

    /// Cost of one hour of traffic at the given inputs
    pub fn compute_cost(&self, inputs: &SimulationInputs) -> CostBreakdown {
        let gb_seconds = Self::gb_seconds(inputs);
        let compute_cost = gb_seconds * self.price_per_gb_second;
        let invocation_cost = (inputs.invocations_per_hour() as f64 / 1_000_000.0)
            * self.price_per_million_invocations;
        let total_cost = compute_cost + invocation_cost;

        debug!(
            "Cost: gb_seconds={:.3}, compute=${:.6}, invocations=${:.6}, total=${:.6}",
            gb_seconds, compute_cost, invocation_cost, total_cost
        );

        CostBreakdown {
            compute_cost,
            invocation_cost,
            total_cost,
            logging_cost: self.logging_share * total_cost,
            storage_cost: self.storage_share * total_cost,
        }
    }
}

/// Cost breakdown under the default price list
pub fn compute_cost(inputs: &SimulationInputs) -> CostBreakdown {
    PricingModel::default().compute_cost(inputs)
}
