//! The scripted live-demo walkthrough.
//!
//! A fixed ticket-automation storyboard: the player loops an index through
//! the steps and a percentage through the progress bar, advanced by a timer
//! owned by the live-demo section. Pure presentation data - nothing external
//! is read or written.

use derive_more::Display;
use serde::Serialize;

/// Period between automatic step advances.
pub const STEP_INTERVAL_MS: u32 = 2_500;

/// Progress gained per tick.
pub const PROGRESS_STEP: u32 = 25;

/// Progress wraps modulo this value, so the visible sequence is
/// 0, 25, 50, 75, 100, 0, ...
pub const PROGRESS_MODULUS: u32 = 101;

/// Where a step sits in the scripted workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum StepStatus {
    #[display("received")]
    Received,
    #[display("processing")]
    Processing,
    #[display("completed")]
    Completed,
}

/// One stage of the scripted workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemoStep {
    pub title: &'static str,
    pub description: &'static str,
    pub status: StepStatus,
    pub icon: &'static str,
}

/// The fixed four-step script the player cycles through.
pub const DEMO_STEPS: [DemoStep; 4] = [
    DemoStep {
        title: "New Ticket Received",
        description: "Password reset request from Sarah Johnson",
        status: StepStatus::Received,
        icon: "user",
    },
    DemoStep {
        title: "AI Analysis & Triage",
        description: "Analyzing content, priority, and technician availability",
        status: StepStatus::Processing,
        icon: "bot",
    },
    DemoStep {
        title: "Auto-Response Sent",
        description: "Instant reply with password reset link generated",
        status: StepStatus::Completed,
        icon: "check-circle",
    },
    DemoStep {
        title: "Time Automatically Logged",
        description: "2 minutes tracked and categorized for billing",
        status: StepStatus::Completed,
        icon: "clock",
    },
];

/// The static ticket shown beside the workflow player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TicketFixture {
    pub id: &'static str,
    pub customer: &'static str,
    pub issue: &'static str,
    pub priority: &'static str,
    pub category: &'static str,
    pub assigned_to: &'static str,
    pub time_spent: &'static str,
    pub status: &'static str,
}

pub const TICKET: TicketFixture = TicketFixture {
    id: "TK-2024-001247",
    customer: "Acme Corp",
    issue: "Employee password reset - Sarah Johnson",
    priority: "Medium",
    category: "Account Access",
    assigned_to: "Auto-Agent",
    time_spent: "2m 15s",
    status: "Resolved",
};

/// Loops a step index through the demo script and a percentage through the
/// progress bar. Owned by the live-demo section; its timer is the only
/// writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemoPlayer {
    pub step: usize,
    pub progress: u32,
}

impl DemoPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick: the step index wraps at `step_count`, progress
    /// wraps modulo [`PROGRESS_MODULUS`].
    pub fn tick(&mut self, step_count: usize) {
        self.step = (self.step + 1) % step_count;
        self.progress = (self.progress + PROGRESS_STEP) % PROGRESS_MODULUS;
    }
}
