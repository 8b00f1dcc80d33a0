use std::sync::Arc;

use tokio::time::Duration;
use tracing::instrument;

use super::{
    judger::{Judger, SubmitRequest},
    rate_limit::CooldownTracker,
};
use crate::{
    entity::submission::Submission,
    error::{Error, Result},
    session::Auth,
};

/// One submit-and-judge round trip plus the read path for history.
pub struct SubmitController {
    judger: Arc<dyn Judger>,
    cooldown: CooldownTracker,
}

impl SubmitController {
    pub fn new(judger: Arc<dyn Judger>, cooldown_window: Duration) -> Self {
        Self {
            judger,
            cooldown: CooldownTracker::new(cooldown_window),
        }
    }

    /// Seconds before this user may submit to this problem again.
    pub fn cooldown_remaining(&self, auth: &Auth, problem_id: i32) -> u64 {
        match auth.user_id() {
            Some(user_id) => self.cooldown.remaining(user_id, problem_id),
            None => 0,
        }
    }

    /// Submit one attempt and wait for the judged record.
    ///
    /// The cooldown is checked before anything leaves the client and armed
    /// only once a verdict lands, whatever the verdict is; a remote
    /// failure arms nothing.
    #[instrument(skip_all, fields(problem_id = req.problem_id))]
    pub async fn submit(&self, auth: &Auth, req: SubmitRequest) -> Result<Submission> {
        let session = auth.assume_login()?;
        let user_id = session.user.id;
        let problem_id = req.problem_id;

        let remaining = self.cooldown.remaining(user_id, problem_id);
        if remaining > 0 {
            tracing::debug!(remaining, "submit_cooldown");
            return Err(Error::RateLimit(remaining));
        }

        let submission = self.judger.submit(&session.token, req).await?;
        self.cooldown.arm(user_id, problem_id);
        tracing::info!(
            submission_id = submission.id,
            verdict = %submission.verdict,
            "submit_done"
        );
        Ok(submission)
    }

    /// The current user's attempts, optionally narrowed to one problem.
    /// The backend returns newest first; the order is passed through
    /// untouched.
    pub async fn history(&self, auth: &Auth, problem_id: Option<i32>) -> Result<Vec<Submission>> {
        let session = auth.assume_login()?;
        Ok(self.judger.history(&session.token, problem_id).await?)
    }

    /// Full per-case detail. A record embedded by a fresh submit already
    /// carries it, so no second round trip in that case.
    pub async fn details(&self, auth: &Auth, submission: &Submission) -> Result<Submission> {
        if submission.cases.is_some() {
            return Ok(submission.clone());
        }
        let session = auth.assume_login()?;
        Ok(self.judger.submission(&session.token, submission.id).await?)
    }
}
