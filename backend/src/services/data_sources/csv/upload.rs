use actix_multipart::{Multipart, MultipartError};
use actix_web::{web, HttpResponse, Responder};
use common::requests::ImportQuery;
use common::SessionView;
use futures_util::StreamExt;
use log::info;
use thiserror::Error;

use super::UploadLimit;
use crate::services::{rejected, rejected_error};
use crate::session_controller::state::SessionState;

#[derive(Debug, Error)]
pub(crate) enum UploadError {
    #[error("the file must end with .csv")]
    NotCsv,
    #[error("no file field in the upload")]
    MissingFile,
    #[error("the file is larger than {limit} bytes")]
    TooLarge { limit: usize },
    #[error("upload error: {0}")]
    Multipart(#[from] MultipartError),
    #[error(transparent)]
    Session(#[from] common::Error),
}

impl UploadError {
    fn response(&self) -> HttpResponse {
        match self {
            UploadError::Session(e) => rejected_error(e),
            other => rejected("upload", other),
        }
    }
}

/// HTTP handler wrapper that converts the upload result to an `HttpResponse`.
///
/// - On success: returns `200 OK` with the new session view.
/// - On failure: returns `400 Bad Request` with the error kind and message.
pub(crate) async fn process(
    state: web::Data<SessionState>,
    limit: web::Data<UploadLimit>,
    query: web::Query<ImportQuery>,
    payload: Multipart,
) -> impl Responder {
    match import_upload(&state, limit.0, query.restore_status, payload).await {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(e) => e.response(),
    }
}

async fn import_upload(
    state: &SessionState,
    limit: usize,
    restore_status: bool,
    payload: Multipart,
) -> Result<SessionView, UploadError> {
    let (filename, bytes) = read_csv_field(payload, limit).await?;
    let mut session = state.session.write().await;
    session.import_bytes(&bytes, restore_status)?;
    info!("imported {} ({} bytes)", filename, bytes.len());
    Ok(session.view())
}

/// Reads the `file` field, skipping any other field.
async fn read_csv_field(
    mut payload: Multipart,
    limit: usize,
) -> Result<(String, Vec<u8>), UploadError> {
    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        if name.as_deref() != Some("file") {
            while let Some(chunk) = field.next().await {
                chunk?;
            }
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_default();
        if !filename.to_ascii_lowercase().ends_with(".csv") {
            return Err(UploadError::NotCsv);
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            if bytes.len() + chunk.len() > limit {
                return Err(UploadError::TooLarge { limit });
            }
            bytes.extend_from_slice(&chunk);
        }
        return Ok((filename, bytes));
    }
    Err(UploadError::MissingFile)
}
