//! SessionStore — who is logged in right now.
//!
//! Holds at most one student session and one teacher session. A new login
//! for a role replaces the previous one for that role (last login wins).
//! Sessions never expire for the life of the process.

use parking_lot::RwLock;
use std::sync::Arc;

use super::token::derive_token;
use crate::directory::Directory;
use crate::error::AuthenticationError;
use crate::models::{Identity, Role};

/// A completed login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession {
    pub token: String,
    pub identity: Identity,
}

#[derive(Debug, Default)]
pub(super) struct Sessions {
    pub(super) student: Option<ActiveSession>,
    pub(super) teacher: Option<ActiveSession>,
}

impl Sessions {
    pub(super) fn slot(&self, role: Role) -> &Option<ActiveSession> {
        match role {
            Role::Student => &self.student,
            Role::Teacher => &self.teacher,
        }
    }

    fn slot_mut(&mut self, role: Role) -> &mut Option<ActiveSession> {
        match role {
            Role::Student => &mut self.student,
            Role::Teacher => &mut self.teacher,
        }
    }
}

pub struct SessionStore {
    directory: Arc<Directory>,
    pub(super) sessions: RwLock<Sessions>,
}

impl SessionStore {
    pub fn new(directory: Arc<Directory>) -> Self {
        Self {
            directory,
            sessions: RwLock::new(Sessions::default()),
        }
    }

    /// Authenticate against the directory and make the account the current
    /// session for its role. Returns the login token.
    pub fn login(&self, email: &str, password: &str) -> Result<String, AuthenticationError> {
        let identity = match self.directory.find_identity(email, password) {
            Some(identity) => identity,
            None => {
                log::warn!("[Session] Login rejected for '{}'", email);
                return Err(AuthenticationError::UnknownCredentials);
            }
        };

        let token = derive_token(&identity.email);
        let role = identity.role;

        let previous = self.sessions.write().slot_mut(role).replace(ActiveSession {
            token: token.clone(),
            identity,
        });

        match previous {
            Some(prev) if prev.token != token => log::info!(
                "[Session] {} '{}' logged in, replacing '{}'",
                role,
                email,
                prev.identity.email
            ),
            _ => log::info!("[Session] {} '{}' logged in", role, email),
        }

        Ok(token)
    }

    pub fn current_student(&self) -> Option<Identity> {
        self.current(Role::Student).map(|s| s.identity)
    }

    pub fn current_teacher(&self) -> Option<Identity> {
        self.current(Role::Teacher).map(|s| s.identity)
    }

    /// Snapshot of the current session for a role
    pub fn current(&self, role: Role) -> Option<ActiveSession> {
        self.sessions.read().slot(role).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_data_dir;

    fn store() -> SessionStore {
        let directory = Directory::load(&default_data_dir()).expect("Failed to load data");
        SessionStore::new(Arc::new(directory))
    }

    #[test]
    fn test_login_returns_email_digest() {
        let store = store();
        let token = store.login("student+3@gmail.com", "1234").unwrap();
        assert_eq!(token, derive_token("student+3@gmail.com"));

        let student = store.current_student().unwrap();
        assert_eq!(student.id, "3");
        assert!(store.current_teacher().is_none());
    }

    #[test]
    fn test_login_unknown_credentials() {
        let store = store();
        let err = store.login("invalid+3@gmail.com", "1234").unwrap_err();
        assert_eq!(err, AuthenticationError::UnknownCredentials);
        assert!(store.current_student().is_none());
        assert!(store.current_teacher().is_none());
    }

    #[test]
    fn test_failed_login_keeps_existing_session() {
        let store = store();
        store.login("student+3@gmail.com", "1234").unwrap();
        assert!(store.login("student+3@gmail.com", "wrong").is_err());
        assert_eq!(store.current_student().unwrap().email, "student+3@gmail.com");
    }

    #[test]
    fn test_roles_are_independent() {
        let store = store();
        store.login("student+3@gmail.com", "1234").unwrap();
        store.login("teacher+3@gmail.com", "1234").unwrap();

        assert_eq!(store.current_student().unwrap().email, "student+3@gmail.com");
        assert_eq!(store.current_teacher().unwrap().email, "teacher+3@gmail.com");
    }

    #[test]
    fn test_last_login_wins() {
        let store = store();
        store.login("student+1@gmail.com", "1234").unwrap();
        store.login("student+3@gmail.com", "1234").unwrap();

        let current = store.current(Role::Student).unwrap();
        assert_eq!(current.identity.id, "3");
        assert_eq!(current.token, derive_token("student+3@gmail.com"));
    }

    #[test]
    fn test_login_twice_is_idempotent() {
        let store = store();
        let first = store.login("teacher+3@gmail.com", "1234").unwrap();
        let second = store.login("teacher+3@gmail.com", "1234").unwrap();
        assert_eq!(first, second);

        let current = store.current(Role::Teacher).unwrap();
        assert_eq!(current.token, first);
        assert!(store.current_student().is_none());
    }
}
