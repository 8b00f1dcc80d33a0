use crate::controller::judger::RemoteError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Centralized error for lifecycle operations.
///
/// Everything except [`Error::Remote`] is resolved locally, before any
/// request leaves the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unauthenticated")]
    Unauthenticated,
    #[error("Permission deny: `{0}`")]
    PermissionDeny(&'static str),
    #[error("invalid transition: `{0}`")]
    InvalidTransition(&'static str),
    #[error("rejection requires a reason")]
    MissingReason,
    #[error("rate limit reached, retry in {0}s")]
    RateLimit(u64),
    #[error("not found")]
    NotFound,
    #[error("payload.`{0}` is not a vaild argument")]
    BadArgument(&'static str),
    #[error("remote error: `{0}`")]
    Remote(#[from] RemoteError),
    #[error("io error: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("malformed config file: `{0}`")]
    Config(#[from] toml::de::Error),
}

impl Error {
    /// The backend stopped honoring the session token; the caller should
    /// drop the session and send the user back to login.
    pub fn session_expired(&self) -> bool {
        matches!(self, Error::Remote(RemoteError::Unauthenticated))
    }

    /// Validation errors never reach the network.
    pub fn is_local(&self) -> bool {
        !matches!(self, Error::Remote(_))
    }
}
