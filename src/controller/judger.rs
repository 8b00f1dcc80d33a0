use async_trait::async_trait;
use uuid::Uuid;

use crate::entity::{
    contest::Contest, leaderboard::RankEntry, problem::Problem, submission::Submission,
};

/// Failure reported by a collaborator across the network boundary.
///
/// Mapped onto the crate [`Error`](crate::Error) at controller level, the
/// way the frontend maps grpc status codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    #[error("Unauthenticated")]
    Unauthenticated,
    #[error("permission denied: `{0}`")]
    PermissionDenied(String),
    #[error("not found: `{0}`")]
    NotFound(&'static str),
    #[error("network error: `{0}`")]
    Network(String),
    #[error("backend error: `{0}`")]
    Internal(String),
}

impl RemoteError {
    /// transient failures are surfaced as retryable; local state stays
    /// untouched
    pub fn retryable(&self) -> bool {
        matches!(self, RemoteError::Network(_) | RemoteError::Internal(_))
    }
}

/// One judged attempt, as sent to the judging engine.
#[derive(Debug, Clone, derive_builder::Builder)]
pub struct SubmitRequest {
    pub problem_id: i32,
    #[builder(default)]
    pub contest_id: Option<i32>,
    #[builder(setter(into))]
    pub language: String,
    #[builder(setter(into))]
    pub source_code: String,
    /// client generated, lets the backend drop accidental duplicates
    #[builder(default = "Uuid::new_v4()")]
    pub request_id: Uuid,
}

/// Contract of the remote judging engine.
///
/// The real transport lives outside this crate; the lifecycle core only
/// depends on this surface. Snapshots come back as plain JSON-shaped
/// entities.
#[async_trait]
pub trait Judger: Send + Sync {
    /// judge one attempt and return the terminal record, detail embedded
    async fn submit(&self, token: &str, req: SubmitRequest) -> Result<Submission, RemoteError>;

    /// full detail of one historical submission
    async fn submission(&self, token: &str, id: i32) -> Result<Submission, RemoteError>;

    /// the calling user's attempts, newest first, optionally narrowed to
    /// one problem; ordering is owned by the backend
    async fn history(
        &self,
        token: &str,
        problem_id: Option<i32>,
    ) -> Result<Vec<Submission>, RemoteError>;

    async fn problem(&self, token: Option<&str>, id: i32) -> Result<Problem, RemoteError>;

    async fn contest(&self, id: i32) -> Result<Contest, RemoteError>;

    /// ranked rows, solved_count descending, ties in backend order
    async fn leaderboard(&self, contest_id: i32) -> Result<Vec<RankEntry>, RemoteError>;

    async fn join_contest(&self, token: &str, contest_id: i32) -> Result<(), RemoteError>;
}
