use serde::{Deserialize, Serialize};

/// One leaderboard row, ranked by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub user_id: i32,
    pub user_name: String,
    pub solved_count: i64,
}

/// What a leaderboard view renders.
///
/// An empty answer is an explicit "no data" state, not a spinner; rows are
/// kept exactly in backend order (solved_count descending, ties as
/// returned).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LeaderboardState {
    /// the first fetch has not landed yet
    #[default]
    Loading,
    Empty,
    Ready(Vec<RankEntry>),
}

impl LeaderboardState {
    pub fn from_rows(rows: Vec<RankEntry>) -> Self {
        match rows.is_empty() {
            true => LeaderboardState::Empty,
            false => LeaderboardState::Ready(rows),
        }
    }
}
