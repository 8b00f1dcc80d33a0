pub mod contest;
pub mod leaderboard;
pub mod problem;
pub mod submission;
pub mod user;

pub use contest::{Contest, ContestProblem, Phase};
pub use leaderboard::{LeaderboardState, RankEntry};
pub use problem::{Decision, Problem, ProblemStatus, TestCase, Visibility};
pub use submission::{CaseResult, Submission, Verdict};
pub use user::{Role, UserInfo};
