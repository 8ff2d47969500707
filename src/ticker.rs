use std::time::Duration;

/// After a stall the ticker fires at most this many ticks in one poll and
/// drops the rest, like a fixed-timestep loop with a clamped frame delta.
pub const MAX_CATCH_UP_TICKS: u32 = 5;

/// Cancellable fixed-rate schedule for the movement tick.
///
/// Times are offsets from session start. A stopped ticker never reports due
/// ticks, so no recurring work outlives the phase that started it.
#[derive(Debug, Clone)]
pub struct MoveTicker {
    period: Duration,
    next_due: Option<Duration>,
}

impl MoveTicker {
    pub fn new(period: Duration) -> Self {
        Self { period: period.max(Duration::from_millis(1)), next_due: None }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Arm the schedule; the first tick falls one period after `now`.
    /// Restarting a running ticker re-phases it cleanly.
    pub fn start(&mut self, now: Duration) {
        self.next_due = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of ticks due at `now`, advancing the schedule past them.
    pub fn poll(&mut self, now: Duration) -> u32 {
        let Some(mut due) = self.next_due else { return 0 };
        let mut fired = 0;
        while now >= due && fired < MAX_CATCH_UP_TICKS {
            fired += 1;
            due += self.period;
        }
        if now >= due {
            // Still behind: skip the backlog instead of bursting later.
            due = now + self.period;
        }
        self.next_due = Some(due);
        fired
    }
}
