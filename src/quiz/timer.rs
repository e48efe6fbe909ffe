// src/quiz/timer.rs

/// Seconds allotted to each quiz question.
pub const QUESTION_TIME_SECS: u32 = 30;

/// Per-question countdown. Ticks are driven externally at one-second
/// granularity; expiry is reported exactly once per arm, after which
/// the countdown stays halted until the next reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    expired: bool,
}

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still counting; carries the seconds left.
    Running(u32),
    /// This tick reached zero. Reported once.
    Expired,
    /// Already expired earlier; the tick was ignored.
    Halted,
}

impl Countdown {
    pub fn new(secs: u32) -> Self {
        Self {
            remaining: secs,
            expired: false,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Re-arm for the next question.
    pub fn reset(&mut self, secs: u32) {
        self.remaining = secs;
        self.expired = false;
    }

    /// Advance one second. Decrements the remaining time; the tick that
    /// hits zero yields `Expired`, every later tick yields `Halted`.
    pub fn tick(&mut self) -> Tick {
        if self.expired {
            return Tick::Halted;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.expired = true;
            Tick::Expired
        } else {
            Tick::Running(self.remaining)
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(QUESTION_TIME_SECS)
    }
}
