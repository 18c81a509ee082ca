//! HTTP API of the contact sender. Each sub-module exposes a
//! `configure_routes()` scope that `main.rs` mounts.

pub mod data_sources;
pub mod dataset;
pub mod sender;

use actix_web::HttpResponse;
use log::warn;
use serde::Serialize;

/// Body of every rejected request.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    kind: &'a str,
    message: String,
}

/// `400 Bad Request` carrying the error kind and its message.
pub(crate) fn rejected(kind: &str, message: impl ToString) -> HttpResponse {
    let message = message.to_string();
    warn!("request rejected ({}): {}", kind, message);
    HttpResponse::BadRequest().json(ErrorBody { kind, message })
}

pub(crate) fn rejected_error(err: &common::Error) -> HttpResponse {
    rejected(err.kind(), err)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use common::{MessagingConfig, Session};

    use crate::launcher::testing::RecordingLauncher;
    use crate::session_controller::state::SessionState;

    pub(crate) fn state() -> (SessionState, Arc<RecordingLauncher>) {
        state_with(MessagingConfig::default())
    }

    pub(crate) fn state_with(config: MessagingConfig) -> (SessionState, Arc<RecordingLauncher>) {
        let launcher = Arc::new(RecordingLauncher::default());
        let state = SessionState::new(Session::new(config), launcher.clone());
        (state, launcher)
    }

    /// A session with two imported contacts, the second without a phone.
    pub(crate) async fn imported() -> (SessionState, Arc<RecordingLauncher>) {
        let (state, launcher) = state();
        state
            .session
            .write()
            .await
            .import_csv("name,phone\nSara,0551234567\nOmar,\n")
            .unwrap();
        (state, launcher)
    }
}
