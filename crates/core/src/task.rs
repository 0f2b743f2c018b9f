//! Canonical task status and priority values.
//!
//! Statuses and priorities are stored as plain text; the server does not
//! enforce a transition state machine (any status may follow any other).
//! Clients present these canonical sets in their pickers.

pub const STATUS_NOT_STARTED: &str = "not_started";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_BLOCKED: &str = "blocked";
pub const STATUS_COMPLETED: &str = "completed";

/// The status values clients present, in board-column order.
pub const ALL_STATUSES: [&str; 4] = [
    STATUS_NOT_STARTED,
    STATUS_IN_PROGRESS,
    STATUS_BLOCKED,
    STATUS_COMPLETED,
];

pub const PRIORITY_LOW: &str = "Low";
pub const PRIORITY_MEDIUM: &str = "Medium";
pub const PRIORITY_HIGH: &str = "High";

/// The priority values clients present, ascending.
pub const ALL_PRIORITIES: [&str; 3] = [PRIORITY_LOW, PRIORITY_MEDIUM, PRIORITY_HIGH];
