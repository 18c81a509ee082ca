use actix_web::http::header::ContentDisposition;
use actix_web::{web, HttpResponse, Responder};
use common::requests::ExportQuery;
use log::info;

use crate::services::rejected_error;
use crate::session_controller::state::SessionState;

/// Downloads the table, with the send-status column when `?status=true`.
pub(crate) async fn process(
    state: web::Data<SessionState>,
    query: web::Query<ExportQuery>,
) -> impl Responder {
    let session = state.session.read().await;
    match session.export_csv(query.status) {
        Ok(text) => {
            let file_name = session.export_file_name(query.status);
            info!("exported {} rows as {}", session.dataset().len(), file_name);
            HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .insert_header(ContentDisposition::attachment(file_name))
                .body(text)
        }
        Err(e) => rejected_error(&e),
    }
}
