//! Synthetic latency percentiles
//!
//! p50 is drawn around the configured execution time; p95 and p99 stack
//! normally distributed offsets on top of the previous percentile:
//!
//! ```text
//! p50(h) ~ N(avg_duration, 50)
//! p95(h) = p50(h) + N(150, 20)
//! p99(h) = p95(h) + N(100, 15)
//! ```
//!
//! Ordering p50 <= p95 <= p99 holds in expectation only. An unlucky draw can
//! invert a pair and the series are returned as drawn.

use nimbus_core::{HourlySeries, NimbusError, Result, SimulationInputs, HOURS_PER_DAY};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Normal distribution parameters for the latency percentiles (ms)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencyModel {
    pub p50_std_dev: f64,
    pub p95_offset_mean: f64,
    pub p95_offset_std_dev: f64,
    pub p99_offset_mean: f64,
    pub p99_offset_std_dev: f64,
}

impl Default for LatencyModel {
    fn default() -> Self {
        Self {
            p50_std_dev: 50.0,
            p95_offset_mean: 150.0,
            p95_offset_std_dev: 20.0,
            p99_offset_mean: 100.0,
            p99_offset_std_dev: 15.0,
        }
    }
}

/// Hourly p50/p95/p99 latency in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatencyPercentiles {
    pub p50: HourlySeries,
    pub p95: HourlySeries,
    pub p99: HourlySeries,
}

impl LatencyPercentiles {
    /// Number of hours where p50 > p95 or p95 > p99
    pub fn inversions(&self) -> usize {
        (0..HOURS_PER_DAY)
            .filter(|&h| {
                let p95 = self.p95.values()[h];
                self.p50.values()[h] > p95 || p95 > self.p99.values()[h]
            })
            .count()
    }

    pub fn is_monotonic(&self) -> bool {
        self.inversions() == 0
    }
}

fn normal(mean: f64, std_dev: f64) -> Result<Normal<f64>> {
    Normal::new(mean, std_dev).map_err(|e| {
        NimbusError::config(format!(
            "invalid latency distribution N({}, {}): {}",
            mean, std_dev, e
        ))
    })
}

impl LatencyModel {
    /// Draw one day of latency percentiles.
    ///
    /// All 24 p50 samples are drawn first, then the p95 offsets, then the p99
    /// offsets, so a seeded generator always yields the same series.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        inputs: &SimulationInputs,
        rng: &mut R,
    ) -> Result<LatencyPercentiles> {
        let base = normal(inputs.avg_duration_ms() as f64, self.p50_std_dev)?;
        let p95_offset = normal(self.p95_offset_mean, self.p95_offset_std_dev)?;
        let p99_offset = normal(self.p99_offset_mean, self.p99_offset_std_dev)?;

        let p50 = HourlySeries::from_fn(|_| base.sample(&mut *rng));
        let p95 = HourlySeries::from_fn(|h| p50.values()[h] + p95_offset.sample(&mut *rng));
        let p99 = HourlySeries::from_fn(|h| p95.values()[h] + p99_offset.sample(&mut *rng));

        let latency = LatencyPercentiles { p50, p95, p99 };

        let inversions = latency.inversions();
        if inversions > 0 {
            debug!("Latency percentiles out of order in {} hour(s)", inversions);
        }

        Ok(latency)
    }
}

/// Latency percentiles under the default model
pub fn simulate_latency<R: Rng + ?Sized>(
    inputs: &SimulationInputs,
    rng: &mut R,
) -> Result<LatencyPercentiles> {
    LatencyModel::default().simulate(inputs, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mean(series: &HourlySeries) -> f64 {
        series.sum() / HOURS_PER_DAY as f64
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let inputs = SimulationInputs::default();
        let a = simulate_latency(&inputs, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = simulate_latency(&inputs, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);

        let c = simulate_latency(&inputs, &mut StdRng::seed_from_u64(8)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_percentiles_centered_on_duration() {
        let inputs = SimulationInputs::new(1_000, 1_500, 512).unwrap();
        let latency = simulate_latency(&inputs, &mut StdRng::seed_from_u64(42)).unwrap();

        // 24 samples with σ=50: the mean stays well within 100 ms of the target
        assert!((mean(&latency.p50) - 1_500.0).abs() < 100.0);
        assert!((mean(&latency.p95) - 1_650.0).abs() < 120.0);
        assert!((mean(&latency.p99) - 1_750.0).abs() < 140.0);
    }

    #[test]
    fn test_zero_variance_is_monotonic() {
        let model = LatencyModel {
            p50_std_dev: 0.0,
            p95_offset_std_dev: 0.0,
            p99_offset_std_dev: 0.0,
            ..LatencyModel::default()
        };
        let inputs = SimulationInputs::new(1_000, 400, 512).unwrap();
        let latency = model.simulate(&inputs, &mut StdRng::seed_from_u64(1)).unwrap();

        assert!(latency.p50.iter().all(|v| v == 400.0));
        assert!(latency.p95.iter().all(|v| v == 550.0));
        assert!(latency.p99.iter().all(|v| v == 650.0));
        assert!(latency.is_monotonic());
    }

    #[test]
    fn test_inversions_are_preserved() {
        // Offsets centered below zero force p95 under p50
        let model = LatencyModel {
            p95_offset_mean: -500.0,
            p95_offset_std_dev: 0.0,
            ..LatencyModel::default()
        };
        let inputs = SimulationInputs::default();
        let latency = model.simulate(&inputs, &mut StdRng::seed_from_u64(3)).unwrap();

        assert_eq!(latency.inversions(), HOURS_PER_DAY);
        assert!(!latency.is_monotonic());
    }

    #[test]
    fn test_invalid_std_dev_rejected() {
        let model = LatencyModel {
            p50_std_dev: f64::NAN,
            ..LatencyModel::default()
        };
        let result = model.simulate(&SimulationInputs::default(), &mut StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(NimbusError::Config(_))));
    }
}
