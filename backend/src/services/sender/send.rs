use actix_web::{web, HttpResponse, Responder};
use common::{DispatchRequest, SendStatus};
use serde::Serialize;

use crate::services::rejected_error;
use crate::session_controller::state::SessionState;

#[derive(Debug, Serialize)]
struct SendResponse {
    request: DispatchRequest,
    link: String,
    status: SendStatus,
}

/// Sends row `index` its message. The launcher opens the messaging
/// application; the row is marked as sent as soon as the link is handed off.
pub(crate) async fn process(
    state: web::Data<SessionState>,
    index: web::Path<usize>,
) -> impl Responder {
    let mut session = state.session.write().await;
    match session.send(index.into_inner(), state.launcher.as_ref()) {
        Ok(request) => HttpResponse::Ok().json(SendResponse {
            link: request.deep_link(),
            request,
            status: session.status(),
        }),
        Err(e) => rejected_error(&e),
    }
}

pub(crate) async fn status(state: web::Data<SessionState>) -> impl Responder {
    let session = state.session.read().await;
    HttpResponse::Ok().json(session.status())
}

pub(crate) async fn contacts(state: web::Data<SessionState>) -> impl Responder {
    let session = state.session.read().await;
    HttpResponse::Ok().json(session.contacts())
}
