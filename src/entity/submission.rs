use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Judged outcome. `Pending` is the only transient state; the judging
/// engine alone finalizes a submission, the client never mutates one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// implicit initial state, before the judging engine responds
    #[default]
    Pending,
    Accepted,
    #[serde(rename = "Wrong Answer")]
    WrongAnswer,
    #[serde(rename = "Runtime Error")]
    RuntimeError,
    #[serde(rename = "Compilation Error")]
    CompileError,
    #[serde(rename = "System Error")]
    SystemError,
}

impl Verdict {
    /// Terminal verdicts never change once observed.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::Pending)
    }
    pub fn accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pending => write!(f, "Pending"),
            Verdict::Accepted => write!(f, "Accepted"),
            Verdict::WrongAnswer => write!(f, "Wrong Answer"),
            Verdict::RuntimeError => write!(f, "Runtime Error"),
            Verdict::CompileError => write!(f, "Compilation Error"),
            Verdict::SystemError => write!(f, "System Error"),
        }
    }
}

/// Outcome of one test case run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseResult {
    #[serde(rename = "status")]
    pub verdict: Verdict,
    /// formatted by the judging engine ("12ms")
    #[serde(default)]
    pub execution_time: String,
    #[serde(default)]
    pub is_sample: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: i32,
    pub problem_id: i32,
    #[serde(default)]
    pub contest_id: Option<i32>,
    pub user_id: i32,
    pub language: String,
    pub source_code: String,
    #[serde(rename = "status")]
    pub verdict: Verdict,
    #[serde(default)]
    pub execution_time: String,
    pub created_at: DateTime<Utc>,
    /// per-case breakdown; embedded when the record comes straight from a
    /// submit response, absent on history rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cases: Option<Vec<CaseResult>>,
}

impl Submission {
    pub fn is_terminal(&self) -> bool {
        self.verdict.is_terminal()
    }
}
