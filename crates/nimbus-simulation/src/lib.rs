//! Nimbus Simulation Engine
//!
//! Models a serverless deployment from three controls (invocations per hour,
//! execution time, memory size):
//! - cost breakdown under GB-second and per-request pricing
//! - a 24 hour invocation curve and the matching concurrency estimate
//! - synthetic p50/p95/p99 latency
//! - a feedback session that fabricates one invocation log per submission
//!
//! All randomness comes from a caller-supplied `rand::Rng`, so every run can be
//! reproduced from a seed.

pub mod pricing;
pub mod traffic;
pub mod latency;
pub mod metrics;
pub mod invocation_log;
pub mod session;
pub mod catalog;
pub mod simulator;

pub use pricing::{compute_cost, PricingModel};
pub use traffic::{simulate_daily_traffic, traffic_factor, DailyTraffic};
pub use latency::{simulate_latency, LatencyModel, LatencyPercentiles};
pub use metrics::summary_metrics;
pub use invocation_log::synthesize_invocation_log;
pub use session::Session;
pub use simulator::{DashboardReport, Simulator, SimulatorConfig};
