mod config;
mod recording;

pub use self::config::{ClientConfig, GestureMode, ReconcileMode};
pub use self::recording::{Accent, Recording};
