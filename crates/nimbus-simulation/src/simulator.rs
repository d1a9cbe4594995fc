//! Dashboard simulator
//!
//! Evaluates every model for one set of inputs in a single synchronous pass:
//! cost, traffic, latency and summary metrics. Each interaction with the
//! control surface produces a fresh [`DashboardReport`].

use nimbus_core::{CostBreakdown, Result, SimulationInputs, SummaryMetrics};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::latency::{LatencyModel, LatencyPercentiles};
use crate::metrics::summary_metrics;
use crate::pricing::PricingModel;
use crate::traffic::{simulate_daily_traffic, DailyTraffic};

/// Everything the display surface needs for one render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub invocations_per_hour: u32,
    pub avg_duration_ms: u32,
    pub memory_mb: u32,
    pub cost: CostBreakdown,
    /// Percentage shares of the cost distribution chart
    pub cost_shares: [f64; 4],
    pub traffic: DailyTraffic,
    pub latency: LatencyPercentiles,
    pub summary: SummaryMetrics,
}

/// Simulator configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatorConfig {
    pub pricing: PricingModel,
    pub latency: LatencyModel,
    /// Seed for latency and metric draws; OS entropy when unset
    pub seed: Option<u64>,
}

/// Runs the traffic, cost and latency models
pub struct Simulator {
    pricing: PricingModel,
    latency: LatencyModel,
    rng: StdRng,
}

impl Simulator {
    pub fn new(config: SimulatorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Simulator {
            pricing: config.pricing,
            latency: config.latency,
            rng,
        }
    }

    /// Evaluate all models for `inputs`
    pub fn run(&mut self, inputs: &SimulationInputs) -> Result<DashboardReport> {
        debug!(
            "Simulating {} invocations/h, {} ms, {} MB",
            inputs.invocations_per_hour(),
            inputs.avg_duration_ms(),
            inputs.memory_mb()
        );

        let cost = self.pricing.compute_cost(inputs);
        let traffic = simulate_daily_traffic(inputs);
        let latency = self.latency.simulate(inputs, &mut self.rng)?;
        let summary = summary_metrics(&traffic.concurrency, &mut self.rng);

        info!(
            "Simulation complete: total cost ${:.6}/h, peak concurrency {}",
            cost.total_cost, summary.peak_concurrency
        );

        Ok(DashboardReport {
            invocations_per_hour: inputs.invocations_per_hour(),
            avg_duration_ms: inputs.avg_duration_ms(),
            memory_mb: inputs.memory_mb(),
            cost,
            cost_shares: cost.shares(),
            traffic,
            latency,
            summary,
        })
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> Simulator {
        Simulator::new(SimulatorConfig {
            seed: Some(seed),
            ..SimulatorConfig::default()
        })
    }

    #[test]
    fn test_report_matches_models() {
        let inputs = SimulationInputs::new(1_000, 500, 512).unwrap();
        let report = seeded(1).run(&inputs).unwrap();

        assert_eq!(report.cost, PricingModel::default().compute_cost(&inputs));
        assert_eq!(report.traffic, simulate_daily_traffic(&inputs));
        assert_eq!(
            report.summary.peak_concurrency,
            report.traffic.peak_concurrency() as u64
        );
        assert_eq!(report.invocations_per_hour, 1_000);
    }

    #[test]
    fn test_seeded_reports_repeat() {
        let inputs = SimulationInputs::default();
        let a = seeded(99).run(&inputs).unwrap();
        let b = seeded(99).run(&inputs).unwrap();

        assert_eq!(a.latency, b.latency);
        assert_eq!(a.summary, b.summary);
    }

    #[test]
    fn test_each_run_redraws_latency() {
        let inputs = SimulationInputs::default();
        let mut sim = seeded(5);
        let first = sim.run(&inputs).unwrap();
        let second = sim.run(&inputs).unwrap();

        // Deterministic parts stay put, random parts move
        assert_eq!(first.cost, second.cost);
        assert_ne!(first.latency, second.latency);
    }

    #[test]
    fn test_custom_pricing_flows_through() {
        let pricing = PricingModel {
            price_per_million_invocations: 0.0,
            price_per_gb_second: 0.0,
            ..PricingModel::default()
        };
        let mut sim = Simulator::new(SimulatorConfig {
            pricing,
            seed: Some(0),
            ..SimulatorConfig::default()
        });
        let report = sim.run(&SimulationInputs::default()).unwrap();

        assert_eq!(report.cost.total_cost, 0.0);
        assert_eq!(report.cost_shares, [0.0; 4]);
    }

    #[test]
    fn test_report_serializes() {
        let report = seeded(3).run(&SimulationInputs::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["traffic"]["invocations"].as_array().unwrap().len(), 24);
        assert_eq!(json["latency"]["p99"].as_array().unwrap().len(), 24);
        assert!(json["cost"]["total_cost"].is_number());
    }
}
