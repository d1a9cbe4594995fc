//! Text rendering of reports, session tables and the catalog

use nimbus_core::{FeedbackEntry, InvocationLogEntry};
use nimbus_simulation::catalog::{FUNCTIONS, IAM_USERS, PUBLIC_ENDPOINT, SAMPLE_LOGS};
use nimbus_simulation::DashboardReport;

fn banner(title: &str) {
    println!("\n╔══════════════════════════════════════════════════════════╗");
    println!("║  {:<56}║", title);
    println!("╚══════════════════════════════════════════════════════════╝\n");
}

pub fn print_report(report: &DashboardReport) {
    banner("Serverless Architecture Simulation");

    println!("Configuration:");
    println!("  Invocations: {}/hr", report.invocations_per_hour);
    println!("  Execution time: {} ms", report.avg_duration_ms);
    println!("  Memory: {} MB", report.memory_mb);

    banner("Load, Latency & Concurrency (24h)");

    println!(
        "{:>4} {:>14} {:>12} {:>10} {:>10} {:>10}",
        "Hour", "Invocations", "Concurrency", "p50 (ms)", "p95 (ms)", "p99 (ms)"
    );
    println!("{}", "-".repeat(65));

    let traffic = &report.traffic;
    let latency = &report.latency;
    for hour in 0..nimbus_core::HOURS_PER_DAY {
        println!(
            "{:>4} {:>14.1} {:>12.2} {:>10.1} {:>10.1} {:>10.1}",
            hour,
            traffic.invocations.values()[hour],
            traffic.concurrency.values()[hour],
            latency.p50.values()[hour],
            latency.p95.values()[hour],
            latency.p99.values()[hour],
        );
    }

    banner("Cost Distribution");

    println!("{:<24} {:>14} {:>8}", "Service", "Cost ($/hr)", "Share");
    println!("{}", "-".repeat(48));
    for (slice, share) in report.cost.slices().iter().zip(report.cost_shares) {
        println!("{:<24} {:>14.6} {:>7.1}%", slice.label, slice.amount, share);
    }
    println!("{}", "-".repeat(48));
    println!("{:<24} {:>14.6}", "Total (compute + invocations)", report.cost.total_cost);

    banner("Summary Metrics");

    println!("  Cold Starts:      {}x", report.summary.cold_starts);
    println!("  Errors (24h):     {}", report.summary.errors);
    println!("  Peak Concurrency: {} funcs/sec", report.summary.peak_concurrency);
    println!("  Busiest Hour:     {:02}:00", report.traffic.peak_hour());
    println!();
}

pub fn print_feedback(feedback: &[FeedbackEntry]) {
    banner("Feedback");

    if feedback.is_empty() {
        println!("No feedback submitted.");
        return;
    }

    println!("{:<20} {:<20} {}", "Timestamp", "Name", "Feedback");
    println!("{}", "-".repeat(72));
    for entry in feedback {
        println!("{:<20} {:<20} {}", entry.timestamp, entry.name, entry.text);
    }
}

pub fn print_logs<'a>(logs: impl IntoIterator<Item = &'a InvocationLogEntry>) {
    banner("Lambda Invocation Logs");

    let mut logs = logs.into_iter().peekable();
    if logs.peek().is_none() {
        println!("No invocations yet.");
        return;
    }

    println!(
        "{:<10} {:<38} {:>10} {:>10} {:<12} {:<6}",
        "Time", "Request ID", "Exec (ms)", "Mem (MB)", "IAM Role", "Level"
    );
    println!("{}", "-".repeat(91));
    for log in logs {
        println!(
            "{:<10} {:<38} {:>10} {:>10} {:<12} {:<6}",
            log.time,
            log.request_id.to_string(),
            log.execution_time_ms,
            log.memory_used_mb,
            log.iam_role.to_string(),
            log.log_level.to_string(),
        );
    }
}

pub fn print_catalog() {
    banner("IAM Users");

    println!("{:<20} {:<12} {:<18} {}", "User ID", "Role", "Permissions", "MFA Enabled");
    println!("{}", "-".repeat(64));
    for user in IAM_USERS.iter() {
        println!(
            "{:<20} {:<12} {:<18} {}",
            user.user_id,
            user.role.to_string(),
            user.permissions,
            user.mfa_enabled
        );
    }

    banner("Serverless Functions");

    println!("{:<20} {:<14} {:<14} {}", "Function", "Region", "Trigger", "Last Modified");
    println!("{}", "-".repeat(64));
    for function in FUNCTIONS.iter() {
        println!(
            "{:<20} {:<14} {:<14} {}",
            function.name, function.region, function.trigger, function.last_modified
        );
    }

    banner("Public Endpoint");
    println!("{}", PUBLIC_ENDPOINT);

    banner("Sample Logs");
    for line in SAMPLE_LOGS.iter() {
        println!("{}", line);
    }
    println!();
}
