//! # Sender Service Module
//!
//! Everything between the table and the messaging application: the message
//! template, which columns hold the name and the phone, the per-contact send
//! action and the progress counters.
//!
//! ## Sub-modules:
//! - `template`: reading and editing the template, inserting placeholders.
//! - `roles`: reading and selecting the name and phone columns.
//! - `send`: sending one contact and reporting progress.

mod roles;
mod send;
mod template;

use actix_web::web::{get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/sender";

/// Configures and returns the Actix `Scope` for the sending routes.
///
/// # Registered Routes:
///
/// *   **`GET /template`**, **`PUT /template`**: the template text and the
///     placeholders in it that name no current column.
/// *   **`POST /template/placeholder`**: inserts `{column}` at a UTF-16 cursor
///     and returns the cursor after it.
/// *   **`GET /roles`**, **`PUT /roles`**: the name and phone column bindings.
/// *   **`GET /status`**: sent contacts over total contacts.
/// *   **`GET /contacts`**: one summary per row for the contact list.
/// *   **`POST /send/{index}`**: expands the template for the row, opens the
///     messaging application and marks the row as sent.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/template", get().to(template::get))
        .route("/template", put().to(template::save))
        .route("/template/placeholder", post().to(template::insert_placeholder))
        .route("/roles", get().to(roles::get))
        .route("/roles", put().to(roles::select))
        .route("/status", get().to(send::status))
        .route("/contacts", get().to(send::contacts))
        .route("/send/{index}", post().to(send::process))
}
