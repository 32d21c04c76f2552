//! Token checks in front of every protected endpoint.

use super::SessionStore;
use crate::error::AuthenticationError;
use crate::models::{Identity, Role};

impl SessionStore {
    /// The presented token must equal the current student's token exactly.
    pub fn require_student(&self, token: Option<&str>) -> Result<Identity, AuthenticationError> {
        self.require(Role::Student, token)
    }

    /// The presented token must equal the current teacher's token exactly.
    pub fn require_teacher(&self, token: Option<&str>) -> Result<Identity, AuthenticationError> {
        self.require(Role::Teacher, token)
    }

    /// No trimming or case folding. A missing token fails the same way as a
    /// wrong one.
    pub fn require(&self, role: Role, token: Option<&str>) -> Result<Identity, AuthenticationError> {
        let sessions = self.sessions.read();
        match (sessions.slot(role), token) {
            (Some(session), Some(presented)) if session.token == presented => {
                Ok(session.identity.clone())
            }
            _ => {
                log::debug!(
                    "[Session] Rejected {} request (token present: {})",
                    role,
                    token.is_some()
                );
                Err(AuthenticationError::TokenMismatch(role))
            }
        }
    }
}
