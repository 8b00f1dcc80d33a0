use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::instrument;

use super::judger::Judger;
use crate::{
    entity::contest::{problem_label, Contest, ContestProblem, Phase},
    error::{Error, Result},
    session::Auth,
};

/// Result of a join attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined,
    /// already a participant: a quiet success, not an error
    Already,
}

/// Admission and content gating for one contest view.
pub struct ContestController {
    judger: Arc<dyn Judger>,
}

impl ContestController {
    pub fn new(judger: Arc<dyn Judger>) -> Self {
        Self { judger }
    }

    /// Contest snapshot; a malformed time window is rejected up front.
    pub async fn fetch(&self, id: i32) -> Result<Contest> {
        let contest = self.judger.contest(id).await?;
        contest.validate()?;
        Ok(contest)
    }

    /// Register for the contest. Repeat joins are a no-op success and
    /// never reach the network; the join window closes at start time.
    #[instrument(skip_all, fields(contest_id = contest.id))]
    pub async fn join(
        &self,
        auth: &Auth,
        contest: &Contest,
        now: DateTime<Utc>,
    ) -> Result<JoinOutcome> {
        let session = auth.assume_login()?;
        if contest.is_participant(session.user.id) {
            return Ok(JoinOutcome::Already);
        }
        if contest.phase(now) != Phase::NotStarted {
            return Err(Error::InvalidTransition(
                "join window closed at contest start",
            ));
        }
        self.judger.join_contest(&session.token, contest.id).await?;
        tracing::info!(user_id = session.user.id, "contest_join");
        Ok(JoinOutcome::Joined)
    }

    /// Labeled problem list, gated by contest content visibility; an
    /// ungated caller gets a generic not-found so the set does not leak
    /// before the start.
    pub fn problems<'a>(
        &self,
        auth: &Auth,
        contest: &'a Contest,
        now: DateTime<Utc>,
    ) -> Result<Vec<(char, &'a ContestProblem)>> {
        if !contest.content_visible(auth, now) {
            return Err(Error::NotFound);
        }
        contest
            .problems
            .iter()
            .enumerate()
            .map(|(index, problem)| Ok((problem_label(index)?, problem)))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::controller::test::{auth, t0, MockJudger};
    use crate::entity::contest::{Participant, ProblemMeta};
    use crate::entity::user::Role;
    use chrono::Duration;

    fn contest() -> Contest {
        let t = t0();
        Contest {
            id: 5,
            title: "weekly".into(),
            description: String::new(),
            author_id: 1,
            start_time: t + Duration::hours(1),
            end_time: t + Duration::hours(3),
            participants: vec![Participant {
                user_id: 42,
                joined_at: t,
            }],
            problems: (0..3)
                .map(|i| ContestProblem {
                    problem_id: 30 + i,
                    problem: ProblemMeta {
                        id: 30 + i,
                        title: format!("p{i}"),
                    },
                })
                .collect(),
        }
    }

    fn controller(judger: &Arc<MockJudger>) -> ContestController {
        ContestController::new(judger.clone() as Arc<dyn Judger>)
    }

    #[tokio::test]
    async fn join_before_start() {
        let judger = Arc::new(MockJudger::accepting());
        let ctrl = controller(&judger);
        let c = contest();

        assert!(matches!(
            ctrl.join(&crate::session::Auth::Guest, &c, t0()).await,
            Err(Error::Unauthenticated)
        ));

        let outcome = ctrl.join(&auth(7, Role::User), &c, t0()).await.unwrap();
        assert_eq!(outcome, JoinOutcome::Joined);
        assert_eq!(judger.join_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn repeat_join_is_a_quiet_noop() {
        let judger = Arc::new(MockJudger::accepting());
        let ctrl = controller(&judger);
        let c = contest();

        // user 42 is already in the participant snapshot
        let outcome = ctrl.join(&auth(42, Role::User), &c, t0()).await.unwrap();
        assert_eq!(outcome, JoinOutcome::Already);
        assert_eq!(judger.join_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn join_window_closes_at_start() {
        let judger = Arc::new(MockJudger::accepting());
        let ctrl = controller(&judger);
        let c = contest();

        for offset in [Duration::hours(1), Duration::hours(2), Duration::hours(4)] {
            let res = ctrl.join(&auth(7, Role::User), &c, t0() + offset).await;
            assert!(matches!(res, Err(Error::InvalidTransition(_))));
        }
        assert_eq!(judger.join_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn problems_are_labeled_in_order() {
        let judger = Arc::new(MockJudger::accepting());
        let ctrl = controller(&judger);
        let c = contest();
        let mid = t0() + Duration::hours(2);

        // participant during the run
        let listed = ctrl.problems(&auth(42, Role::User), &c, mid).unwrap();
        let labels: Vec<char> = listed.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!['A', 'B', 'C']);
        assert_eq!(listed[0].1.problem_id, 30);

        // non-participant during the run: generic not-found
        assert!(matches!(
            ctrl.problems(&auth(7, Role::User), &c, mid),
            Err(Error::NotFound)
        ));
        // anyone after the end
        assert!(ctrl
            .problems(&auth(7, Role::User), &c, t0() + Duration::hours(3))
            .is_ok());
    }

    #[tokio::test]
    async fn fetch_rejects_malformed_window() {
        let judger = Arc::new(MockJudger::accepting());
        let mut c = contest();
        c.end_time = c.start_time;
        *judger.contest_row.lock().unwrap() = Some(c);
        let ctrl = controller(&judger);

        assert!(matches!(ctrl.fetch(5).await, Err(Error::BadArgument(_))));
    }
}
