use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    session::Auth,
    util::filter::Filter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Private,
    Link,
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemStatus {
    Draft,
    PendingReview,
    Published,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub expected_output: String,
    #[serde(default)]
    pub is_sample: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// seconds
    pub time_limit: f64,
    /// megabytes
    pub memory_limit: i32,
    pub author_id: i32,
    pub visibility: Visibility,
    pub status: ProblemStatus,
    /// set while `status` is rejected, cleared by any forward transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderation_comment: Option<String>,
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
    /// the author's reference solution, travels with the problem for rejudging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_source_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_language: Option<String>,
    #[serde(default)]
    pub solved_count: i64,
}

/// Moderator verdict on a pending problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Filter for Problem {
    fn readable(&self, auth: &Auth) -> bool {
        (self.status == ProblemStatus::Published && self.visibility != Visibility::Private)
            || auth.user_id() == Some(self.author_id)
            || auth.is_admin()
    }
    fn writable(&self, auth: &Auth) -> bool {
        auth.user_id() == Some(self.author_id) || auth.is_admin()
    }
}

impl Problem {
    /// Access-checked read. An unreadable problem surfaces as a generic
    /// not-found so its existence is not leaked.
    pub fn read(&self, auth: &Auth) -> Result<&Self> {
        match self.readable(auth) {
            true => Ok(self),
            false => Err(Error::NotFound),
        }
    }

    /// Author sends a draft (or a rejected problem, after rework) to the
    /// moderation queue.
    pub fn submit_for_review(&mut self) -> Result<()> {
        match self.status {
            ProblemStatus::Draft | ProblemStatus::Rejected => {
                self.status = ProblemStatus::PendingReview;
                self.moderation_comment = None;
                Ok(())
            }
            _ => Err(Error::InvalidTransition(
                "only draft or rejected problems can be sent to review",
            )),
        }
    }

    /// Apply a moderation decision. Admin only, valid only while the
    /// problem sits in review; a rejection must carry a reason, stored
    /// verbatim.
    pub fn moderate(
        &mut self,
        auth: &Auth,
        decision: Decision,
        comment: Option<String>,
    ) -> Result<()> {
        if !auth.is_admin() {
            return Err(Error::PermissionDeny("moderation requires admin role"));
        }
        if self.status != ProblemStatus::PendingReview {
            return Err(Error::InvalidTransition(
                "moderation verdict on a problem not in review",
            ));
        }
        match decision {
            Decision::Approve => {
                self.status = ProblemStatus::Published;
                self.moderation_comment = None;
            }
            Decision::Reject => {
                let comment = comment
                    .filter(|c| !c.is_empty())
                    .ok_or(Error::MissingReason)?;
                self.status = ProblemStatus::Rejected;
                self.moderation_comment = Some(comment);
            }
        }
        Ok(())
    }
}
