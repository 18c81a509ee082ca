//! # Dataset Service Module
//!
//! Editing of the contact table. Every endpoint answers with the full
//! [`common::SessionView`] so the page re-renders from one value.
//!
//! ## Sub-modules:
//! - `snapshot`: the current view, the starter table, clearing and undo/redo.
//! - `columns`: adding, renaming and deleting columns.
//! - `rows`: adding and deleting rows and editing single cells.

mod columns;
mod rows;
mod snapshot;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/dataset";

/// Configures and returns the Actix `Scope` for the table editing routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(snapshot::current))
        .route("/new", post().to(snapshot::new_table))
        .route("/clear", post().to(snapshot::clear))
        .route("/undo", post().to(snapshot::undo))
        .route("/redo", post().to(snapshot::redo))
        .route("/columns", post().to(columns::add))
        .route("/columns", put().to(columns::rename))
        .route("/columns/{name}", delete().to(columns::delete))
        .route("/rows", post().to(rows::add))
        .route("/rows/{index}", delete().to(rows::delete))
        .route("/cells", put().to(rows::update_cell))
}
