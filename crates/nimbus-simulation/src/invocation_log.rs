//! Fabricated invocation log entries
//!
//! Each accepted feedback submission "invokes" a function and records one log
//! line with random execution time, memory use, role and severity.

use nimbus_core::{Clock, IamRole, InvocationLogEntry, LogLevel, LOG_TIME_FORMAT};
use rand::Rng;
use uuid::Uuid;

/// Execution time range in ms (inclusive)
const EXECUTION_TIME_MS: std::ops::RangeInclusive<u32> = 150..=1000;

const MEMORY_CHOICES_MB: [u32; 3] = [128, 256, 512];

/// Weighted by repetition: 3/5 INFO, 1/5 WARN, 1/5 ERROR
const LOG_LEVEL_CHOICES: [LogLevel; 5] = [
    LogLevel::Info,
    LogLevel::Info,
    LogLevel::Info,
    LogLevel::Warn,
    LogLevel::Error,
];

fn pick<T: Copy, R: Rng + ?Sized>(choices: &[T], rng: &mut R) -> T {
    choices[rng.gen_range(0..choices.len())]
}

/// Random v4 request id drawn from `rng`
fn request_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

/// Synthesize one log entry.
///
/// The role is drawn from `selected_roles`, or is [`IamRole::default`] when
/// nothing is selected.
pub fn synthesize_invocation_log<R: Rng + ?Sized>(
    selected_roles: &[IamRole],
    rng: &mut R,
    clock: &dyn Clock,
) -> InvocationLogEntry {
    let execution_time_ms = rng.gen_range(EXECUTION_TIME_MS);
    let memory_used_mb = pick(&MEMORY_CHOICES_MB, rng);
    let iam_role = if selected_roles.is_empty() {
        IamRole::default()
    } else {
        pick(selected_roles, rng)
    };
    let log_level = pick(&LOG_LEVEL_CHOICES, rng);

    InvocationLogEntry {
        time: clock.now().format(LOG_TIME_FORMAT).to_string(),
        request_id: request_id(rng),
        execution_time_ms,
        memory_used_mb,
        iam_role,
        log_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use nimbus_core::FixedClock;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2025, 4, 20, 14, 4, 5).unwrap())
    }

    #[test]
    fn test_fields_within_ranges() {
        let mut rng = StdRng::seed_from_u64(5);
        let roles = [IamRole::Admin, IamRole::DevOps];

        for _ in 0..300 {
            let entry = synthesize_invocation_log(&roles, &mut rng, &clock());
            assert!(EXECUTION_TIME_MS.contains(&entry.execution_time_ms));
            assert!(MEMORY_CHOICES_MB.contains(&entry.memory_used_mb));
            assert!(roles.contains(&entry.iam_role));
            assert_eq!(entry.time, "14:04:05");
            assert_eq!(entry.request_id.get_version_num(), 4);
        }
    }

    #[test]
    fn test_empty_selection_uses_default_role() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let entry = synthesize_invocation_log(&[], &mut rng, &clock());
            assert_eq!(entry.iam_role, IamRole::Viewer);
        }
    }

    #[test]
    fn test_log_level_weighting() {
        let mut rng = StdRng::seed_from_u64(2024);
        let n = 5_000;
        let info = (0..n)
            .map(|_| synthesize_invocation_log(&[], &mut rng, &clock()))
            .filter(|entry| entry.log_level == LogLevel::Info)
            .count();

        let share = info as f64 / n as f64;
        assert!((share - 0.6).abs() < 0.05, "INFO share {}", share);
    }

    #[test]
    fn test_seeded_entries_repeat() {
        let draw = || {
            synthesize_invocation_log(&IamRole::ALL, &mut StdRng::seed_from_u64(1), &clock())
        };
        let (a, b) = (draw(), draw());
        assert_eq!(a, b);
    }

    #[test]
    fn test_request_ids_unique() {
        let mut rng = StdRng::seed_from_u64(77);
        let ids: HashSet<Uuid> = (0..100)
            .map(|_| synthesize_invocation_log(&[], &mut rng, &clock()).request_id)
            .collect();
        assert_eq!(ids.len(), 100);
    }
}
