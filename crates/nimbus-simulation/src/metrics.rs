//! Summary metrics shown beside the charts
//!
//! Cold starts and errors are independent random draws, not derived from the
//! series. Peak concurrency is the truncated maximum of the concurrency curve.

use nimbus_core::{HourlySeries, SummaryMetrics};
use rand::Rng;

/// Cold starts per day are drawn from `[1, COLD_STARTS_MAX)`
const COLD_STARTS_MAX: u32 = 5;

/// Errors per day are drawn from `[0, ERRORS_MAX)`
const ERRORS_MAX: u32 = 3;

pub fn summary_metrics<R: Rng + ?Sized>(concurrency: &HourlySeries, rng: &mut R) -> SummaryMetrics {
    let cold_starts = rng.gen_range(1..COLD_STARTS_MAX);
    let errors = rng.gen_range(0..ERRORS_MAX);
    let peak_concurrency = concurrency.max().max(0.0) as u64;

    SummaryMetrics {
        cold_starts,
        errors,
        peak_concurrency,
    }
}
