//! Core types shared across Nimbus components

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{NimbusError, Result};

/// Number of samples in a daily series (one per hour of day)
pub const HOURS_PER_DAY: usize = 24;

/// Inclusive bounds of a single control-surface input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputBounds {
    pub field: &'static str,
    pub min: u32,
    pub max: u32,
}

impl InputBounds {
    /// Reject values outside `[min, max]`
    pub fn check(&self, value: u32) -> Result<u32> {
        if value < self.min || value > self.max {
            return Err(NimbusError::InputOutOfRange {
                field: self.field,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }
}

pub const INVOCATIONS_BOUNDS: InputBounds = InputBounds {
    field: "invocations_per_hour",
    min: 100,
    max: 50_000,
};

pub const DURATION_BOUNDS: InputBounds = InputBounds {
    field: "avg_duration_ms",
    min: 100,
    max: 3_000,
};

pub const MEMORY_BOUNDS: InputBounds = InputBounds {
    field: "memory_mb",
    min: 128,
    max: 3_008,
};

/// The three dashboard controls driving a simulation run.
///
/// Values are checked against the control-surface bounds on construction,
/// so every downstream formula can treat them as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationInputs {
    invocations_per_hour: u32,
    avg_duration_ms: u32,
    memory_mb: u32,
}

impl SimulationInputs {
    pub fn new(invocations_per_hour: u32, avg_duration_ms: u32, memory_mb: u32) -> Result<Self> {
        Ok(Self {
            invocations_per_hour: INVOCATIONS_BOUNDS.check(invocations_per_hour)?,
            avg_duration_ms: DURATION_BOUNDS.check(avg_duration_ms)?,
            memory_mb: MEMORY_BOUNDS.check(memory_mb)?,
        })
    }

    pub fn invocations_per_hour(&self) -> u32 {
        self.invocations_per_hour
    }

    pub fn avg_duration_ms(&self) -> u32 {
        self.avg_duration_ms
    }

    pub fn memory_mb(&self) -> u32 {
        self.memory_mb
    }
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self {
            invocations_per_hour: 1_000,
            avg_duration_ms: 500,
            memory_mb: 512,
        }
    }
}

/// One value per hour of day, hours 0..=23
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HourlySeries([f64; HOURS_PER_DAY]);

impl HourlySeries {
    /// Build a series by evaluating `f` at every hour
    pub fn from_fn(f: impl FnMut(usize) -> f64) -> Self {
        Self(std::array::from_fn(f))
    }

    pub fn values(&self) -> &[f64; HOURS_PER_DAY] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    pub fn max(&self) -> f64 {
        self.iter().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn sum(&self) -> f64 {
        self.iter().sum()
    }
}

/// A labelled slice of the cost distribution chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostSlice {
    pub label: &'static str,
    pub amount: f64,
}

/// Monetary cost of one simulated hour of traffic.
///
/// `total_cost` is compute plus invocation cost only. Logging and storage
/// are reported as fractions of that total and are not part of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub compute_cost: f64,
    pub invocation_cost: f64,
    pub total_cost: f64,
    pub logging_cost: f64,
    pub storage_cost: f64,
}

impl CostBreakdown {
    /// Slices of the cost distribution chart, in display order
    pub fn slices(&self) -> [CostSlice; 4] {
        [
            CostSlice {
                label: "Compute (Lambda)",
                amount: self.compute_cost,
            },
            CostSlice {
                label: "Invocation Cost",
                amount: self.invocation_cost,
            },
            CostSlice {
                label: "Logging & Monitoring",
                amount: self.logging_cost,
            },
            CostSlice {
                label: "Storage",
                amount: self.storage_cost,
            },
        ]
    }

    /// Percentage of each slice relative to the sum of all four slices
    pub fn shares(&self) -> [f64; 4] {
        let slices = self.slices();
        let sum: f64 = slices.iter().map(|s| s.amount).sum();
        if sum <= 0.0 {
            return [0.0; 4];
        }
        slices.map(|s| s.amount / sum * 100.0)
    }
}

/// IAM role label attached to a simulated invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IamRole {
    Admin,
    DevOps,
    #[serde(rename = "API Trigger")]
    ApiTrigger,
    #[default]
    Viewer,
}

impl IamRole {
    pub const ALL: [IamRole; 4] = [
        IamRole::Admin,
        IamRole::DevOps,
        IamRole::ApiTrigger,
        IamRole::Viewer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IamRole::Admin => "Admin",
            IamRole::DevOps => "DevOps",
            IamRole::ApiTrigger => "API Trigger",
            IamRole::Viewer => "Viewer",
        }
    }
}

impl std::fmt::Display for IamRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for IamRole {
    type Err = NimbusError;

    /// Accepts the display label in any case, with spaces, dashes or
    /// underscores ("API Trigger", "api-trigger", "api_trigger").
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        IamRole::ALL
            .into_iter()
            .find(|role| role.label().replace(' ', "").to_lowercase() == normalized)
            .ok_or_else(|| NimbusError::UnknownRole(s.to_string()))
    }
}

/// Severity of a synthesized invocation log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Accepted feedback submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub name: String,
    pub text: String,
    pub timestamp: String,
}

/// Fabricated log line recorded for each accepted feedback submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationLogEntry {
    pub time: String,
    pub request_id: Uuid,
    pub execution_time_ms: u32,
    pub memory_used_mb: u32,
    pub iam_role: IamRole,
    pub log_level: LogLevel,
}

/// Scalar metrics shown next to the charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub cold_starts: u32,
    pub errors: u32,
    pub peak_concurrency: u64,
}
