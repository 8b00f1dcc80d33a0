pub mod contest;
pub mod judger;
pub mod leaderboard;
pub mod problem;
pub mod rate_limit;
pub mod submit;
pub mod token;
