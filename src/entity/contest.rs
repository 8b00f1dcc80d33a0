use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    session::Auth,
    util::filter::Filter,
};

/// Time-derived state of a contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    NotStarted,
    Active,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub user_id: i32,
    pub joined_at: DateTime<Utc>,
}

/// Slim snapshot embedded in a contest problem list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemMeta {
    pub id: i32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestProblem {
    pub problem_id: i32,
    pub problem: ProblemMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contest {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub author_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// membership implies "joined"; recorded before start, kept for the
    /// contest's entire lifetime
    #[serde(default)]
    pub participants: Vec<Participant>,
    /// position in this list defines the display label (A, B, C, ...)
    #[serde(default)]
    pub problems: Vec<ContestProblem>,
}

/// Display label for the i-th contest problem, `'A' + index`.
///
/// Single letter is enough at this system's scale; the label is defined
/// by list position, never re-derived from any other sort.
pub fn problem_label(index: usize) -> Result<char> {
    if index >= 26 {
        return Err(Error::BadArgument("contest problem index"));
    }
    Ok((b'A' + index as u8) as char)
}

impl Filter for Contest {
    fn readable(&self, _auth: &Auth) -> bool {
        // the contest card itself (title, window) is public; its content
        // is gated separately by `content_visible`
        true
    }
    fn writable(&self, auth: &Auth) -> bool {
        auth.user_id() == Some(self.author_id) || auth.is_admin()
    }
}

impl Contest {
    /// `start_time < end_time` must hold for a well-formed contest.
    pub fn validate(&self) -> Result<()> {
        match self.start_time < self.end_time {
            true => Ok(()),
            false => Err(Error::BadArgument("contest time window")),
        }
    }

    /// Pure function of wall-clock time; recompute on every check, never
    /// cache across render ticks.
    pub fn phase(&self, now: DateTime<Utc>) -> Phase {
        if now < self.start_time {
            Phase::NotStarted
        } else if now < self.end_time {
            Phase::Active
        } else {
            Phase::Finished
        }
    }

    pub fn is_participant(&self, user_id: i32) -> bool {
        self.participants.iter().any(|p| p.user_id == user_id)
    }

    /// Join gate: signed in, before the start, not yet a member.
    pub fn can_join(&self, auth: &Auth, now: DateTime<Utc>) -> bool {
        match auth.user_id() {
            Some(user_id) => {
                self.phase(now) == Phase::NotStarted && !self.is_participant(user_id)
            }
            None => false,
        }
    }

    /// Problems and leaderboard stay dark until the start even for a valid
    /// session; during the run they are participant-only, afterwards
    /// public.
    pub fn content_visible(&self, auth: &Auth, now: DateTime<Utc>) -> bool {
        match self.phase(now) {
            Phase::NotStarted => auth.is_admin(),
            Phase::Active => {
                auth.is_admin()
                    || auth
                        .user_id()
                        .map(|id| self.is_participant(id))
                        .unwrap_or(false)
            }
            Phase::Finished => true,
        }
    }
}
