use actix_web::{web, HttpResponse, Responder};
use common::requests::ImportQuery;
use log::info;

use crate::services::rejected_error;
use crate::session_controller::state::SessionState;

/// Imports CSV text sent as the raw request body.
pub(crate) async fn process(
    state: web::Data<SessionState>,
    query: web::Query<ImportQuery>,
    body: web::Bytes,
) -> impl Responder {
    let mut session = state.session.write().await;
    match session.import_bytes(&body, query.restore_status) {
        Ok(()) => {
            info!("imported {} bytes of pasted CSV", body.len());
            HttpResponse::Ok().json(session.view())
        }
        Err(e) => rejected_error(&e),
    }
}
