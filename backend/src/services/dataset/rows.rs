use actix_web::{web, HttpResponse, Responder};
use common::requests::UpdateCellRequest;
use log::debug;

use crate::services::rejected_error;
use crate::session_controller::state::SessionState;

pub(crate) async fn add(state: web::Data<SessionState>) -> impl Responder {
    let mut session = state.session.write().await;
    match session.add_row() {
        Ok(index) => {
            debug!("added row {}", index);
            HttpResponse::Ok().json(session.view())
        }
        Err(e) => rejected_error(&e),
    }
}

pub(crate) async fn delete(
    state: web::Data<SessionState>,
    index: web::Path<usize>,
) -> impl Responder {
    let mut session = state.session.write().await;
    match session.delete_row(index.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(session.view()),
        Err(e) => rejected_error(&e),
    }
}

pub(crate) async fn update_cell(
    state: web::Data<SessionState>,
    payload: web::Json<UpdateCellRequest>,
) -> impl Responder {
    let mut session = state.session.write().await;
    match session.update_cell(payload.index, &payload.column, &payload.value) {
        Ok(()) => HttpResponse::Ok().json(session.view()),
        Err(e) => rejected_error(&e),
    }
}
