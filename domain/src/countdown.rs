//! Countdown shown by the success presenter.
//!
//! The countdown is driven by an external one-second ticker. It reports
//! expiry exactly once; after expiry, a manual reset or a cancel it ignores
//! any further ticks, so a late tick can never fire the reset twice.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// Still counting, with this many seconds left
    Remaining(u32),
    /// Reached zero on this tick; the reset callback should fire now
    Expired,
    /// The countdown already finished; nothing to do
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CountdownPhase {
    Running,
    Expired,
    ResetByUser,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessCountdown {
    remaining: u32,
    phase: CountdownPhase,
}

impl SuccessCountdown {
    pub fn new(start_secs: u32) -> Self {
        Self {
            remaining: start_secs,
            phase: CountdownPhase::Running,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.phase == CountdownPhase::Running
    }

    /// Advance by one second
    pub fn tick(&mut self) -> CountdownTick {
        if !self.is_running() {
            return CountdownTick::Stopped;
        }

        if self.remaining <= 1 {
            self.remaining = 0;
            self.phase = CountdownPhase::Expired;
            return CountdownTick::Expired;
        }

        self.remaining -= 1;
        CountdownTick::Remaining(self.remaining)
    }

    /// "Send another message": stop counting and report whether the reset
    /// callback should fire (false if it already fired or was cancelled)
    pub fn reset_now(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.phase = CountdownPhase::ResetByUser;
        true
    }

    /// Stop without firing, e.g. when the presenter is torn down
    pub fn cancel(&mut self) {
        if self.is_running() {
            self.phase = CountdownPhase::Cancelled;
        }
    }

    pub fn status_text(&self) -> String {
        format!("Redirecting back to form in {} seconds...", self.remaining)
    }
}
