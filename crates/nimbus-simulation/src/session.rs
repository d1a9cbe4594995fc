//! Feedback session state
//!
//! A session owns everything that lives for one dashboard visit:
//!
//! ```text
//! Session
//! ├── feedback        append-only, oldest first
//! ├── invocation logs one per accepted submission, newest first
//! ├── selected roles  IAM roles drawn from when synthesizing logs
//! ├── rng             seedable, injected at start
//! └── clock           timestamps for feedback and logs
//! ```
//!
//! Sessions are independent of each other; nothing is shared or persisted.
//! `end` drops all recorded state.

use std::collections::VecDeque;

use nimbus_core::{
    Clock, FeedbackEntry, IamRole, InvocationLogEntry, SystemClock, ValidationError,
    FEEDBACK_TIMESTAMP_FORMAT,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::invocation_log::synthesize_invocation_log;

/// In-memory state of one dashboard session
pub struct Session {
    id: Uuid,
    feedback: Vec<FeedbackEntry>,
    logs: VecDeque<InvocationLogEntry>,
    selected_roles: Vec<IamRole>,
    rng: StdRng,
    clock: Box<dyn Clock>,
}

impl Session {
    /// Start a session seeded from OS entropy
    pub fn start() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Start a session whose synthesized logs are reproducible
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let id = Uuid::new_v4();
        info!("Session {} started", id);

        Session {
            id,
            feedback: Vec::new(),
            logs: VecDeque::new(),
            selected_roles: Vec::new(),
            rng,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Replace the IAM role selection. Duplicates are dropped, first
    /// occurrence wins.
    pub fn select_roles(&mut self, roles: impl IntoIterator<Item = IamRole>) {
        self.selected_roles.clear();
        for role in roles {
            if !self.selected_roles.contains(&role) {
                self.selected_roles.push(role);
            }
        }
        debug!("Session {} roles: {:?}", self.id, self.selected_roles);
    }

    pub fn selected_roles(&self) -> &[IamRole] {
        &self.selected_roles
    }

    /// Record a feedback submission.
    ///
    /// Both fields must be non-empty. On success the entry is appended and one
    /// synthesized invocation log is placed at the head of the log list.
    pub fn submit(&mut self, name: &str, text: &str) -> Result<FeedbackEntry, ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }

        let entry = FeedbackEntry {
            name: name.to_string(),
            text: text.to_string(),
            timestamp: self.clock.now().format(FEEDBACK_TIMESTAMP_FORMAT).to_string(),
        };
        self.feedback.push(entry.clone());

        let log =
            synthesize_invocation_log(&self.selected_roles, &mut self.rng, self.clock.as_ref());
        info!(
            "Feedback from '{}' accepted, invocation {} ({} ms, {} MB, {}, {})",
            entry.name,
            log.request_id,
            log.execution_time_ms,
            log.memory_used_mb,
            log.iam_role,
            log.log_level
        );
        self.logs.push_front(log);

        Ok(entry)
    }

    /// Feedback in submission order
    pub fn feedback(&self) -> &[FeedbackEntry] {
        &self.feedback
    }

    /// Invocation logs, most recent first
    pub fn logs(&self) -> impl ExactSizeIterator<Item = &InvocationLogEntry> {
        self.logs.iter()
    }

    /// Drop all session state
    pub fn end(&mut self) {
        info!(
            "Session {} ended ({} feedback entries, {} invocation logs)",
            self.id,
            self.feedback.len(),
            self.logs.len()
        );
        self.feedback.clear();
        self.logs.clear();
        self.selected_roles.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::start()
    }
}
