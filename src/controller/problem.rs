use std::sync::Arc;

use super::judger::Judger;
use crate::{
    entity::problem::Problem,
    error::Result,
    session::Auth,
};

/// Read path for problem snapshots.
///
/// Status transitions and moderation live on [`Problem`] itself and touch
/// local state only; the page applies them after its own request
/// succeeds.
pub struct ProblemController {
    judger: Arc<dyn Judger>,
}

impl ProblemController {
    pub fn new(judger: Arc<dyn Judger>) -> Self {
        Self { judger }
    }

    /// Fetch one problem and apply the visibility gate; anything the
    /// caller may not see comes back as a generic not-found.
    pub async fn fetch(&self, auth: &Auth, id: i32) -> Result<Problem> {
        let token = auth.session().map(|s| s.token.as_str());
        let problem = self.judger.problem(token, id).await?;
        problem.read(auth)?;
        Ok(problem)
    }
}
