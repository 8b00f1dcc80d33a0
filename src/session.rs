use std::{collections::HashMap, sync::RwLock};

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::{
    entity::user::UserInfo,
    error::{Error, Result},
};

/// Store user information
///
/// update only if user login/logout/refresh token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// opaque bearer credential, attached to every authenticated request
    pub token: String,
    pub user: UserInfo,
}

/// Identity a lifecycle operation runs under.
///
/// Passed explicitly on every call instead of being read from ambient
/// shared state, so tests and views always see the snapshot they were
/// given.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Auth {
    #[default]
    Guest,
    User(Session),
}

impl Auth {
    pub fn is_guest(&self) -> bool {
        matches!(self, Auth::Guest)
    }
    pub fn session(&self) -> Option<&Session> {
        match self {
            Auth::User(session) => Some(session),
            Auth::Guest => None,
        }
    }
    pub fn user_id(&self) -> Option<i32> {
        self.session().map(|s| s.user.id)
    }
    pub fn is_admin(&self) -> bool {
        self.session().map(|s| s.user.role.admin()).unwrap_or(false)
    }
    pub fn assume_login(&self) -> Result<&Session> {
        self.session().ok_or(Error::Unauthenticated)
    }
}

/// Owner of the current session, login to logout.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<Auth>,
}

impl SessionStore {
    pub fn login(&self, session: Session) {
        *self.inner.write().unwrap_or_else(|e| e.into_inner()) = Auth::User(session);
    }
    pub fn logout(&self) {
        *self.inner.write().unwrap_or_else(|e| e.into_inner()) = Auth::Guest;
    }
    /// Snapshot taken once per user action; gating decisions within that
    /// action all see the same identity.
    pub fn snapshot(&self) -> Auth {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
    /// Drop the session when the backend stops honoring its token.
    pub fn invalidate_on(&self, err: &Error) {
        if err.session_expired() {
            tracing::info!("session_expired");
            self.logout();
        }
    }
}

/// Last used source code and language for one problem's editor.
///
/// Prefill only, never authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorDraft {
    pub language: String,
    pub source_code: String,
}

#[derive(Debug, Default)]
pub struct EditorStore {
    drafts: DashMap<i32, EditorDraft>,
}

impl EditorStore {
    pub fn save(&self, problem_id: i32, draft: EditorDraft) {
        self.drafts.insert(problem_id, draft);
    }
    pub fn load(&self, problem_id: i32) -> Option<EditorDraft> {
        self.drafts.get(&problem_id).map(|d| d.clone())
    }
    /// Plain map for the host to persist between visits.
    pub fn export(&self) -> HashMap<i32, EditorDraft> {
        self.drafts
            .iter()
            .map(|e| (*e.key(), e.value().clone()))
            .collect()
    }
    pub fn restore(drafts: HashMap<i32, EditorDraft>) -> Self {
        Self {
            drafts: drafts.into_iter().collect(),
        }
    }
}
