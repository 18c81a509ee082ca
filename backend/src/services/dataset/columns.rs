use actix_web::{web, HttpResponse, Responder};
use common::requests::{AddColumnRequest, RenameColumnRequest};

use crate::services::rejected_error;
use crate::session_controller::state::SessionState;

pub(crate) async fn add(
    state: web::Data<SessionState>,
    payload: web::Json<AddColumnRequest>,
) -> impl Responder {
    let mut session = state.session.write().await;
    match session.add_column(&payload.name) {
        Ok(()) => HttpResponse::Ok().json(session.view()),
        Err(e) => rejected_error(&e),
    }
}

pub(crate) async fn rename(
    state: web::Data<SessionState>,
    payload: web::Json<RenameColumnRequest>,
) -> impl Responder {
    let mut session = state.session.write().await;
    match session.rename_column(&payload.old_name, &payload.new_name) {
        Ok(()) => HttpResponse::Ok().json(session.view()),
        Err(e) => rejected_error(&e),
    }
}

/// The column name arrives percent-decoded from the path.
pub(crate) async fn delete(
    state: web::Data<SessionState>,
    name: web::Path<String>,
) -> impl Responder {
    let mut session = state.session.write().await;
    match session.delete_column(&name) {
        Ok(()) => HttpResponse::Ok().json(session.view()),
        Err(e) => rejected_error(&e),
    }
}
