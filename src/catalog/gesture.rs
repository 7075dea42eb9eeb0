use std::sync::OnceLock;

use regex::Regex;

use super::{Catalog, DeleteConfirmation, DeleteOrigin};

/// Minimum leftward travel, in terminal columns, for a drag to count as a swipe.
pub const SWIPE_THRESHOLD: u16 = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Slide {
    #[default]
    Resting,
    /// Swiped away, waiting on the delete confirmation.
    SlidOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceProfile {
    Touch,
    Pointer,
}

impl DeviceProfile {
    pub fn from_user_agent(user_agent: &str) -> Self {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| {
            Regex::new(r"(?i)Mobi|Android").expect("valid user agent pattern")
        });
        if re.is_match(user_agent) {
            DeviceProfile::Touch
        } else {
            DeviceProfile::Pointer
        }
    }
}

/// Swipe-left-to-delete. A thin alternate trigger for the single-delete path.
#[derive(Debug)]
pub struct GestureHandler {
    enabled: bool,
    anchor: Option<(usize, u16)>,
}

impl GestureHandler {
    pub fn new(profile: DeviceProfile) -> Self {
        Self {
            enabled: profile == DeviceProfile::Touch,
            anchor: None,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Pointer went down on `row` at column `x`.
    pub fn press(&mut self, row: usize, x: u16) {
        if self.enabled {
            self.anchor = Some((row, x));
        }
    }

    pub fn cancel(&mut self) {
        self.anchor = None;
    }

    /// Pointer released at column `x`. A long enough leftward drag slides the
    /// row out and asks for confirmation.
    pub fn release(&mut self, catalog: &mut Catalog, x: u16) -> Option<DeleteConfirmation> {
        let (row, start) = self.anchor.take()?;
        if start.saturating_sub(x) < SWIPE_THRESHOLD {
            return None;
        }
        tracing::debug!(row, travel = start - x, "swipe left");
        catalog.request_delete(row, DeleteOrigin::Swipe)
    }
}

#[cfg(test)]
#[path = "../tests/catalog/gesture_tests.rs"]
mod tests;
