//! Synthetic 24 hour traffic pattern
//!
//! Load follows `sin²(πh/12)`: zero at midnight and noon, peaking at 06:00
//! and 18:00. Concurrency is estimated Little's-law style as arrival rate ×
//! service time, normalized per minute.

use std::f64::consts::PI;

use nimbus_core::{HourlySeries, SimulationInputs};
use serde::{Deserialize, Serialize};

/// Invocation curve and concurrency estimate for one simulated day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTraffic {
    pub invocations: HourlySeries,
    pub concurrency: HourlySeries,
}

impl DailyTraffic {
    /// Highest concurrency over the day
    pub fn peak_concurrency(&self) -> f64 {
        self.concurrency.max()
    }

    /// Hour of day with the most invocations (earliest hour on ties)
    pub fn peak_hour(&self) -> usize {
        let mut best = 0;
        for (hour, value) in self.invocations.iter().enumerate() {
            if value > self.invocations.values()[best] {
                best = hour;
            }
        }
        best
    }
}

/// Relative load at `hour`, in [0, 1]
pub fn traffic_factor(hour: usize) -> f64 {
    (PI * hour as f64 / 12.0).sin().powi(2)
}

/// Invocations and concurrency for each hour of the day
pub fn simulate_daily_traffic(inputs: &SimulationInputs) -> DailyTraffic {
    let peak = inputs.invocations_per_hour() as f64;
    let duration_secs = inputs.avg_duration_ms() as f64 / 1000.0;

    let invocations = HourlySeries::from_fn(|h| peak * traffic_factor(h));
    let concurrency = HourlySeries::from_fn(|h| invocations.values()[h] * duration_secs / 60.0);

    DailyTraffic {
        invocations,
        concurrency,
    }
}
