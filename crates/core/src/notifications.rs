//! Notification type names.

pub const NOTIFICATION_TASK_ASSIGNMENT: &str = "task_assignment";
pub const NOTIFICATION_STATUS_UPDATE: &str = "status_update";
pub const NOTIFICATION_DEADLINE_ALERT: &str = "deadline_alert";
pub const NOTIFICATION_OTHER: &str = "other";
