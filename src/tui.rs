use anyhow::Result;

use crate::catalog::DeviceProfile;
use crate::model::{ClientConfig, GestureMode};

#[derive(Clone, Debug)]
pub struct TuiRunOptions {
    pub config: ClientConfig,
    /// Decides whether left-swipe deletes are recognised.
    pub device: DeviceProfile,
}

impl TuiRunOptions {
    pub fn new(config: ClientConfig) -> Self {
        let device = detect_device(config.gestures, |key| std::env::var(key).ok());
        Self { config, device }
    }
}

/// `auto` treats Termux as a touch device, otherwise defers to
/// `GUESTBOOK_USER_AGENT` when it is set.
pub fn detect_device(mode: GestureMode, env: impl Fn(&str) -> Option<String>) -> DeviceProfile {
    match mode {
        GestureMode::On => DeviceProfile::Touch,
        GestureMode::Off => DeviceProfile::Pointer,
        GestureMode::Auto => {
            if env("TERMUX_VERSION").is_some() {
                DeviceProfile::Touch
            } else if let Some(ua) = env("GUESTBOOK_USER_AGENT") {
                DeviceProfile::from_user_agent(&ua)
            } else {
                DeviceProfile::Pointer
            }
        }
    }
}

pub fn run(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run(opts)
}
