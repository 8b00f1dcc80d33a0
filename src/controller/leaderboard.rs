use std::sync::Arc;

use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, Duration},
};

use super::judger::Judger;
use crate::entity::leaderboard::LeaderboardState;

/// Periodic leaderboard refresh for one open contest view.
///
/// One owned task per view: the first fetch fires immediately, then one
/// per interval. The task is the only writer, so responses apply in
/// completion order; a failed tick logs and leaves the last state in
/// place. Dropping the sync aborts the task — the only cancellation
/// point.
pub struct LeaderboardSync {
    rx: watch::Receiver<LeaderboardState>,
    task: JoinHandle<()>,
}

impl LeaderboardSync {
    pub fn start(judger: Arc<dyn Judger>, contest_id: i32, interval: Duration) -> Self {
        let (tx, rx) = watch::channel(LeaderboardState::Loading);
        let task = tokio::spawn(async move {
            let mut ticker = time::interval(interval);
            let mut tick: u64 = 0;
            loop {
                ticker.tick().await;
                tick += 1;
                match judger.leaderboard(contest_id).await {
                    Ok(rows) => {
                        tracing::debug!(contest_id, tick, rows = rows.len(), "leaderboard_tick");
                        if tx.send(LeaderboardState::from_rows(rows)).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        // best effort: keep the last state, retry next tick
                        tracing::warn!(contest_id, tick, err = %err, "leaderboard_poll");
                    }
                }
            }
        });
        Self { rx, task }
    }

    /// Current state; `Loading` until the first response lands.
    pub fn state(&self) -> LeaderboardState {
        self.rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LeaderboardState> {
        self.rx.clone()
    }
}

impl Drop for LeaderboardSync {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod test {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::controller::test::MockJudger;
    use crate::entity::leaderboard::RankEntry;

    fn rows() -> Vec<RankEntry> {
        vec![
            RankEntry {
                user_id: 42,
                user_name: "alice".into(),
                solved_count: 3,
            },
            RankEntry {
                user_id: 7,
                user_name: "bob".into(),
                solved_count: 3,
            },
            RankEntry {
                user_id: 9,
                user_name: "eve".into(),
                solved_count: 1,
            },
        ]
    }

    #[tokio::test(start_paused = true)]
    async fn first_fetch_is_immediate_then_per_interval() {
        let judger = Arc::new(MockJudger::accepting());
        *judger.leaderboard_rows.lock().unwrap() = rows();
        let sync = LeaderboardSync::start(
            judger.clone() as Arc<dyn Judger>,
            5,
            Duration::from_secs(30),
        );
        assert_eq!(sync.state(), LeaderboardState::Loading);

        // paused clock advances as soon as every task is idle
        time::sleep(Duration::from_millis(1)).await;
        assert_eq!(judger.leaderboard_calls.load(Ordering::SeqCst), 1);
        assert_eq!(sync.state(), LeaderboardState::Ready(rows()));

        time::sleep(Duration::from_secs(30)).await;
        assert_eq!(judger.leaderboard_calls.load(Ordering::SeqCst), 2);
        time::sleep(Duration::from_secs(60)).await;
        assert_eq!(judger.leaderboard_calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn backend_tie_order_is_preserved() {
        let judger = Arc::new(MockJudger::accepting());
        *judger.leaderboard_rows.lock().unwrap() = rows();
        let sync = LeaderboardSync::start(
            judger.clone() as Arc<dyn Judger>,
            5,
            Duration::from_secs(30),
        );
        time::sleep(Duration::from_millis(1)).await;

        match sync.state() {
            LeaderboardState::Ready(got) => {
                let names: Vec<&str> = got.iter().map(|r| r.user_name.as_str()).collect();
                // alice and bob tie on 3 solved; backend put alice first
                assert_eq!(names, vec!["alice", "bob", "eve"]);
            }
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn empty_is_not_loading() {
        let judger = Arc::new(MockJudger::accepting());
        let sync = LeaderboardSync::start(
            judger.clone() as Arc<dyn Judger>,
            5,
            Duration::from_secs(30),
        );
        assert_eq!(sync.state(), LeaderboardState::Loading);

        time::sleep(Duration::from_millis(1)).await;
        assert_eq!(sync.state(), LeaderboardState::Empty);
        assert_ne!(sync.state(), LeaderboardState::Loading);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_tick_keeps_last_state_and_retries() {
        let judger = Arc::new(MockJudger::accepting());
        *judger.leaderboard_rows.lock().unwrap() = rows();
        let sync = LeaderboardSync::start(
            judger.clone() as Arc<dyn Judger>,
            5,
            Duration::from_secs(30),
        );
        time::sleep(Duration::from_millis(1)).await;
        assert_eq!(sync.state(), LeaderboardState::Ready(rows()));

        // next tick fails: the view keeps what it had
        *judger.fail_leaderboard.lock().unwrap() = true;
        time::sleep(Duration::from_secs(30)).await;
        assert_eq!(judger.leaderboard_calls.load(Ordering::SeqCst), 2);
        assert_eq!(sync.state(), LeaderboardState::Ready(rows()));

        // and recovers on the one after
        *judger.fail_leaderboard.lock().unwrap() = false;
        time::sleep(Duration::from_secs(30)).await;
        assert_eq!(sync.state(), LeaderboardState::Ready(rows()));
    }

    #[tokio::test(start_paused = true)]
    async fn drop_stops_the_polling() {
        let judger = Arc::new(MockJudger::accepting());
        let sync = LeaderboardSync::start(
            judger.clone() as Arc<dyn Judger>,
            5,
            Duration::from_secs(30),
        );
        time::sleep(Duration::from_millis(1)).await;
        assert_eq!(judger.leaderboard_calls.load(Ordering::SeqCst), 1);

        drop(sync);
        time::sleep(Duration::from_secs(120)).await;
        assert_eq!(judger.leaderboard_calls.load(Ordering::SeqCst), 1);
    }
}
