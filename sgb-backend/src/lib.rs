//! SGB — a small gradebook service.
//!
//! Students and teachers log in with the credentials from the reference data,
//! students submit notes for their courses, and teachers read notes per course.

pub mod config;
pub mod controllers;
pub mod directory;
pub mod error;
pub mod models;
pub mod notes;
pub mod session;

use std::sync::Arc;
use std::time::Instant;

use directory::Directory;
use notes::NoteStore;
use session::SessionStore;

/// Shared state handed to every request handler through `web::Data`.
pub struct AppState {
    pub directory: Arc<Directory>,
    pub sessions: Arc<SessionStore>,
    pub notes: Arc<NoteStore>,
    /// Server start time for uptime calculation
    pub started_at: Instant,
}

impl AppState {
    pub fn new(directory: Directory) -> Self {
        let directory = Arc::new(directory);
        Self {
            sessions: Arc::new(SessionStore::new(Arc::clone(&directory))),
            notes: Arc::new(NoteStore::new()),
            directory,
            started_at: Instant::now(),
        }
    }
}
