//! Shared state of the running service.
//!
//! The page talks to exactly one [`Session`]. It is created in `main.rs`,
//! wrapped in an `Arc<RwLock>` and injected into the Actix application as
//! `web::Data`, so read-only endpoints (status, contacts, export) can run
//! concurrently while edits and sends take the write lock.

use std::sync::Arc;

use common::{DispatchSink, Session};
use tokio::sync::RwLock;

/// Launches the messaging application. Shared by every worker thread.
pub type SharedLauncher = Arc<dyn DispatchSink + Send + Sync>;

#[derive(Clone)]
pub struct SessionState {
    /// The single source of truth for the table, roles and template.
    pub session: Arc<RwLock<Session>>,
    /// Receives one request per send, see `launcher.rs`.
    pub launcher: SharedLauncher,
}

impl SessionState {
    pub fn new(session: Session, launcher: SharedLauncher) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
            launcher,
        }
    }
}
