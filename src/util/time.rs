use std::fmt;

use chrono::{DateTime, Utc};
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, Duration},
};

const SEC_MS: i64 = 1000;
const MIN_MS: i64 = 60 * SEC_MS;
const HOUR_MS: i64 = 60 * MIN_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Remaining time toward a target instant, split the way the contest page
/// displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Remaining {
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
    /// target passed; terminal, a view stops ticking here
    Finished,
}

impl Countdown {
    /// Whole hours/minutes/seconds by integer division of the millisecond
    /// delta; days are dropped.
    pub fn between(now: DateTime<Utc>, target: DateTime<Utc>) -> Self {
        let delta = (target - now).num_milliseconds();
        if delta < 0 {
            return Countdown::Finished;
        }
        Countdown::Remaining {
            hours: (delta % DAY_MS) / HOUR_MS,
            minutes: (delta % HOUR_MS) / MIN_MS,
            seconds: (delta % MIN_MS) / SEC_MS,
        }
    }

    pub fn finished(&self) -> bool {
        matches!(self, Countdown::Finished)
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Remaining {
                hours,
                minutes,
                seconds,
            } => write!(f, "{hours}h {minutes}m {seconds}s"),
            Countdown::Finished => write!(f, "finished"),
        }
    }
}

/// Owned per-second countdown toward `target`.
///
/// Emits on a watch channel and exits on its own once `Finished` is
/// published; dropping the handle tears it down early. One task per
/// timer, no shared interval handles.
pub struct CountdownTask {
    rx: watch::Receiver<Countdown>,
    task: JoinHandle<()>,
}

impl CountdownTask {
    pub fn start(target: DateTime<Utc>) -> Self {
        let (tx, rx) = watch::channel(Countdown::between(Utc::now(), target));
        let task = tokio::spawn(async move {
            let mut ticker = time::interval(Duration::from_secs(1));
            // the value at `start` is already published
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let state = Countdown::between(Utc::now(), target);
                let stop = state.finished();
                if tx.send(state).is_err() || stop {
                    break;
                }
            }
        });
        Self { rx, task }
    }

    pub fn current(&self) -> Countdown {
        *self.rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Countdown> {
        self.rx.clone()
    }
}

impl Drop for CountdownTask {
    fn drop(&mut self) {
        self.task.abort();
    }
}
