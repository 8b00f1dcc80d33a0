//! Lifecycle core of a judging-platform client.
//!
//! Everything here is the state a browser view derives its decisions from:
//! problem moderation status, contest phase, submission verdicts and the
//! local submit cooldown, plus the polling task that keeps a leaderboard
//! fresh. Transport, storage and rendering live elsewhere; the remote
//! judging engine and the identity provider are consumed through the
//! traits in [`controller`].

pub mod config;
pub mod controller;
pub mod entity;
pub mod error;
pub mod init;
pub mod session;
pub mod util;

pub use error::{Error, Result};
