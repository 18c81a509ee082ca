use actix_web::{web, HttpResponse, Responder};
use common::requests::RolesRequest;
use log::info;

use crate::session_controller::state::SessionState;

pub(crate) async fn get(state: web::Data<SessionState>) -> impl Responder {
    let session = state.session.read().await;
    HttpResponse::Ok().json(session.roles())
}

/// Applies a selection from the page. A name that is not a current column
/// unsets the role instead of failing.
pub(crate) async fn select(
    state: web::Data<SessionState>,
    payload: web::Json<RolesRequest>,
) -> impl Responder {
    let mut session = state.session.write().await;
    session.select_name_column(payload.name_column.as_deref());
    session.select_phone_column(payload.phone_column.as_deref());
    info!(
        "roles selected: name {:?}, phone {:?}",
        session.roles().name_column,
        session.roles().phone_column
    );
    HttpResponse::Ok().json(session.view())
}
