//! Flash Dismisser Module
//! One-shot deferred removal of `flash`-classed notification banners.
//!
//! The banners are rendered server-side; this side only takes them down
//! after a fixed visible duration. The clock is injected so tests can drive
//! the deadline manually.

use std::time::{Duration, Instant};

use crate::dom::{Document, ElementId};

/// Class marker carried by flash notification banners.
pub const FLASH_CLASS: &str = "flash";

/// How long banners stay visible before dismissal.
pub const DEFAULT_FLASH_DELAY: Duration = Duration::from_millis(3500);

/// Time source for the dismissal deadline.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for tests.
#[derive(Debug)]
pub struct ManualClock {
    now: Instant,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Instant::now(),
        }
    }

    /// Move time forward.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now
    }
}

/// Removes flash banners after a fixed delay (3.5 s on the dashboard page).
#[derive(Debug, Clone)]
pub struct FlashDismisser {
    delay: Duration,
}

impl Default for FlashDismisser {
    fn default() -> Self {
        Self::new()
    }
}

impl FlashDismisser {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_FLASH_DELAY,
        }
    }

    /// Override the visible duration.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Capture the currently present banners and schedule their removal.
    ///
    /// Returns `None` when the page has no banners; no timer is scheduled
    /// in that case. Banners added after arming are not captured.
    pub fn arm(&self, document: &Document, clock: &impl Clock) -> Option<PendingDismissal> {
        let targets = document.elements_by_class(FLASH_CLASS);
        if targets.is_empty() {
            tracing::debug!("no flash banners present, nothing scheduled");
            return None;
        }
        Some(PendingDismissal {
            due: clock.now() + self.delay,
            targets,
        })
    }
}

/// A scheduled one-shot removal. There is no way to cancel it; firing is
/// idempotent since removing an already-removed banner is a no-op.
#[derive(Debug)]
pub struct PendingDismissal {
    due: Instant,
    targets: Vec<ElementId>,
}

impl PendingDismissal {
    /// Deadline the removal fires at.
    pub fn due(&self) -> Instant {
        self.due
    }

    /// Number of banners captured at arm time.
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// True once the deadline has passed.
    pub fn is_due(&self, clock: &impl Clock) -> bool {
        clock.now() >= self.due
    }

    /// Remove every captured banner if the deadline has passed. Removal
    /// order carries no guarantee. Returns whether the removal fired.
    pub fn fire_if_due(&self, document: &mut Document, clock: &impl Clock) -> bool {
        if !self.is_due(clock) {
            return false;
        }
        self.remove_all(document);
        true
    }

    /// Block out the remaining delay, then remove the banners. Convenience
    /// for the demo binary; library callers drive [`Self::fire_if_due`]
    /// themselves.
    pub fn run(self, document: &mut Document, clock: &impl Clock) {
        let now = clock.now();
        if self.due > now {
            std::thread::sleep(self.due - now);
        }
        self.remove_all(document);
    }

    fn remove_all(&self, document: &mut Document) {
        for id in &self.targets {
            document.remove(*id);
        }
        tracing::debug!(count = self.targets.len(), "flash banners dismissed");
    }
}
