use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use super::judger::RemoteError;
use crate::{
    error::Result,
    session::{Session, SessionStore},
};

/// Contract of the identity provider: turns an OAuth authorization code
/// into a bearer session. Token issuance itself is not this crate's
/// business.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn exchange(&self, code: &str) -> Result<Session, RemoteError>;
}

/// Drives login/logout against the session store.
pub struct TokenController {
    provider: Arc<dyn IdentityProvider>,
    store: Arc<SessionStore>,
}

impl TokenController {
    pub fn new(provider: Arc<dyn IdentityProvider>, store: Arc<SessionStore>) -> Self {
        Self { provider, store }
    }

    #[instrument(skip_all)]
    pub async fn login(&self, code: &str) -> Result<Session> {
        let session = self.provider.exchange(code).await?;
        tracing::info!(user_id = session.user.id, "login");
        self.store.login(session.clone());
        Ok(session)
    }

    pub fn logout(&self) {
        tracing::info!("logout");
        self.store.logout();
    }
}
