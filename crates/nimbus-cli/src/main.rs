//! Nimbus CLI - Serverless architecture simulator
//!
//! Provides commands for:
//! - Simulating a day of traffic, latency and cost for given controls
//! - Running a feedback session that fabricates invocation logs
//! - Showing the static catalog (IAM users, functions, endpoint, sample logs)
//!
//! Binary: nimbus

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use nimbus_core::{IamRole, SimulationInputs};
use nimbus_simulation::{DashboardReport, PricingModel, Session, Simulator, SimulatorConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod render;

/// Nimbus - serverless traffic & cost simulator
#[derive(Parser)]
#[command(name = "nimbus")]
#[command(about = "Simulate serverless traffic, latency and cost", long_about = None)]
struct Cli {
    /// Seed for all random draws (OS entropy when unset)
    #[arg(long, global = true, env = "NIMBUS_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate 24 hours of traffic and print the dashboard
    Simulate {
        /// Invocations per hour at peak (100-50000)
        #[arg(short, long, default_value_t = 1_000)]
        invocations: u32,

        /// Execution time per request in ms (100-3000)
        #[arg(short, long, default_value_t = 500)]
        duration: u32,

        /// Memory allocated per function in MB (128-3008)
        #[arg(short, long, default_value_t = 512)]
        memory: u32,

        /// Pricing overrides (JSON)
        #[arg(long, env = "NIMBUS_PRICING")]
        pricing: Option<PathBuf>,

        /// Print the report as JSON instead of tables
        #[arg(long)]
        json: bool,

        /// Write the JSON report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Submit feedback read from stdin, one `name|feedback` per line
    Session {
        /// IAM roles to attribute invocations to (repeatable)
        #[arg(long = "role")]
        roles: Vec<IamRole>,
    },

    /// Show IAM users, functions, the public endpoint and sample logs
    Catalog,
}

/// Split one stdin line into `(name, feedback)`.
///
/// Blank lines yield `None`. Everything after the first `|` is feedback; a
/// line without `|` is all name and no feedback. Both halves are trimmed.
fn parse_feedback_line(line: &str) -> Option<(&str, &str)> {
    if line.trim().is_empty() {
        return None;
    }
    let (name, text) = line.split_once('|').unwrap_or((line, ""));
    Some((name.trim(), text.trim()))
}

fn write_report(path: &Path, report: &DashboardReport) -> anyhow::Result<()> {
    let body = serde_json::to_string_pretty(report)?;
    fs::write(path, body)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    info!("Report written to {}", path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nimbus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            invocations,
            duration,
            memory,
            pricing,
            json,
            output,
        } => {
            let inputs = SimulationInputs::new(invocations, duration, memory)?;

            let pricing = match pricing {
                Some(path) => PricingModel::from_json_file(&path)
                    .with_context(|| format!("failed to load pricing from {}", path.display()))?,
                None => PricingModel::default(),
            };

            let mut simulator = Simulator::new(SimulatorConfig {
                pricing,
                seed: cli.seed,
                ..SimulatorConfig::default()
            });
            let report = simulator.run(&inputs)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                render::print_report(&report);
            }

            if let Some(path) = output {
                write_report(&path, &report)?;
            }
        }
        Commands::Session { roles } => {
            let mut session = match cli.seed {
                Some(seed) => Session::seeded(seed),
                None => Session::start(),
            };
            session.select_roles(roles);
            println!("Session {}", session.id());

            for line in io::stdin().lock().lines() {
                let line = line?;
                let Some((name, text)) = parse_feedback_line(&line) else {
                    continue;
                };

                match session.submit(name, text) {
                    Ok(entry) => println!(
                        "✅ Thanks, {}! Feedback recorded at {}",
                        entry.name, entry.timestamp
                    ),
                    Err(e) => println!("⚠️  {}", e),
                }
            }

            render::print_feedback(session.feedback());
            render::print_logs(session.logs());
            session.end();
        }
        Commands::Catalog => render::print_catalog(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use nimbus_core::ValidationError;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_session_roles_parse() {
        let cli = Cli::parse_from([
            "nimbus",
            "session",
            "--role",
            "admin",
            "--role",
            "api-trigger",
        ]);
        match cli.command {
            Commands::Session { roles } => {
                assert_eq!(roles, vec![IamRole::Admin, IamRole::ApiTrigger]);
            }
            _ => panic!("expected session command"),
        }
    }

    #[test]
    fn test_simulate_defaults() {
        let cli = Cli::parse_from(["nimbus", "simulate", "--seed", "4"]);
        assert_eq!(cli.seed, Some(4));
        match cli.command {
            Commands::Simulate { invocations, duration, memory, json, .. } => {
                let defaults = SimulationInputs::default();
                assert_eq!(invocations, defaults.invocations_per_hour());
                assert_eq!(duration, defaults.avg_duration_ms());
                assert_eq!(memory, defaults.memory_mb());
                assert!(!json);
            }
            _ => panic!("expected simulate command"),
        }
    }

    #[test]
    fn test_feedback_line_split() {
        assert_eq!(parse_feedback_line("ada|nice charts"), Some(("ada", "nice charts")));
        assert_eq!(parse_feedback_line("  ada |  nice  "), Some(("ada", "nice")));
        // Only the first separator splits
        assert_eq!(parse_feedback_line("a|b|c"), Some(("a", "b|c")));
    }

    #[test]
    fn test_feedback_line_blank_skipped() {
        assert_eq!(parse_feedback_line(""), None);
        assert_eq!(parse_feedback_line("   \t"), None);
    }

    #[test]
    fn test_feedback_line_missing_parts_rejected() {
        let mut session = Session::seeded(1);

        let (name, text) = parse_feedback_line("just a name").unwrap();
        assert_eq!((name, text), ("just a name", ""));
        assert_eq!(session.submit(name, text), Err(ValidationError::EmptyText));

        let (name, text) = parse_feedback_line("|orphan text").unwrap();
        assert_eq!(session.submit(name, text), Err(ValidationError::EmptyName));

        let (name, text) = parse_feedback_line("   | ").unwrap();
        assert_eq!(session.submit(name, text), Err(ValidationError::EmptyName));

        assert!(session.feedback().is_empty());
    }

    #[test]
    fn test_write_report_round_trip() {
        let inputs = SimulationInputs::new(2_000, 800, 1_024).unwrap();
        let report = Simulator::new(SimulatorConfig {
            seed: Some(11),
            ..SimulatorConfig::default()
        })
        .run(&inputs)
        .unwrap();

        let path = std::env::temp_dir().join(format!("nimbus-report-{}.json", std::process::id()));
        write_report(&path, &report).unwrap();
        let body = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);

        let loaded: DashboardReport = serde_json::from_str(&body).unwrap();
        assert_eq!(loaded.invocations_per_hour, 2_000);
        assert_eq!(loaded.avg_duration_ms, 800);
        assert_eq!(loaded.memory_mb, 1_024);
        assert_eq!(loaded.summary, report.summary);
        assert!((loaded.cost.total_cost - report.cost.total_cost).abs() < 1e-12);
        for (a, b) in loaded.latency.p99.iter().zip(report.latency.p99.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_write_report_bad_path() {
        let report = Simulator::new(SimulatorConfig {
            seed: Some(0),
            ..SimulatorConfig::default()
        })
        .run(&SimulationInputs::default())
        .unwrap();

        let path = std::env::temp_dir().join("nimbus-missing-dir").join("nested").join("r.json");
        assert!(write_report(&path, &report).is_err());
    }
}
