//! Moves the contact table in and out of the service as CSV.
//!
//! The provided routes are:
//! - `POST /api/data_sources/csv/upload`: multipart/form-data upload with a `file` field holding
//!   a `.csv` file. The bytes must be UTF-8 and no larger than the configured upload limit. The
//!   parsed table replaces the current one.
//!
//! - `POST /api/data_sources/csv/import`: the same, with the CSV text as the raw request body
//!   (pasted text or a file the page already read).
//!
//! - `GET /api/data_sources/csv/export`: downloads the table as `text/csv` with a byte-order
//!   mark. `?status=true` appends the send-status column and switches to the status file name.
//!
//! Both import routes accept `?restore_status=true` to read a trailing `sent` column from a
//! status export back into each row's send status.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod export;
mod import;
mod upload;

const API_PATH: &str = "/api/data_sources/csv";

/// Largest accepted upload, in bytes.
#[derive(Debug, Clone, Copy)]
pub struct UploadLimit(pub usize);

/// Configures and returns the Actix scope for CSV data source routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/upload", post().to(upload::process))
        .route("/import", post().to(import::process))
        .route("/export", get().to(export::process))
}
