//! In-process event fabric for realtime fan-out.

pub mod bus;

pub use bus::{EventBus, PlatformEvent, EVENT_COMMENT, EVENT_NOTIFICATION, EVENT_TASK_UPDATE};
