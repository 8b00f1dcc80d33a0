use dashmap::DashMap;
use tokio::time::{Duration, Instant};

/// Submit cooldown, scoped per (user, problem), in-memory only.
///
/// Stored as a deadline instead of a ticking counter: `remaining` derives
/// the seconds left from the deadline, so the countdown expires on its own
/// and cannot be cancelled. Expired entries are purged on read.
pub struct CooldownTracker {
    deadlines: DashMap<(i32, i32), Instant>,
    window: Duration,
}

impl CooldownTracker {
    pub fn new(window: Duration) -> Self {
        Self {
            deadlines: DashMap::new(),
            window,
        }
    }

    /// Whole seconds left before the next submit is accepted, rounded up;
    /// 0 once expired.
    pub fn remaining(&self, user_id: i32, problem_id: i32) -> u64 {
        let key = (user_id, problem_id);
        let deadline = match self.deadlines.get(&key).map(|d| *d) {
            Some(deadline) => deadline,
            None => return 0,
        };
        let now = Instant::now();
        if deadline <= now {
            self.deadlines.remove(&key);
            return 0;
        }
        ((deadline - now).as_millis()).div_ceil(1000) as u64
    }

    /// Restart the countdown; called once a submission completes, whatever
    /// the verdict.
    pub fn arm(&self, user_id: i32, problem_id: i32) {
        self.deadlines
            .insert((user_id, problem_id), Instant::now() + self.window);
    }
}
