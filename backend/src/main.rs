mod config;
mod launcher;
mod services;
mod session_controller;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use actix_files::Files;
use actix_web::{web, App, HttpResponse, HttpServer};
use common::Session;
use env_logger::Env;
use log::{info, warn};

use crate::config::Settings;
use crate::launcher::BrowserLauncher;
use crate::services::data_sources::csv::UploadLimit;
use crate::session_controller::state::SessionState;

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().body("Not Found")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let settings = Settings::load()?;
    let url = settings.url();

    if settings.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url_clone) {
                warn!("could not open {} in a browser: {}", url_clone, e);
            }
        });
    }

    let state = SessionState::new(
        Session::new(settings.messaging.clone()),
        Arc::new(BrowserLauncher),
    );

    let static_dir = settings.static_dir.clone();
    if !static_dir.is_dir() {
        warn!(
            "static directory {} not found, only the API is served",
            static_dir.display()
        );
    }
    let limit = settings.upload_limit_bytes;

    info!("Server running at {}", url);

    HttpServer::new(move || {
        let app = App::new()
            .app_data(web::JsonConfig::default().limit(limit))
            .app_data(web::PayloadConfig::new(limit))
            .app_data(web::Data::new(UploadLimit(limit)))
            .app_data(web::Data::new(state.clone()))
            .service(services::dataset::configure_routes())
            .service(services::data_sources::csv::configure_routes())
            .service(services::sender::configure_routes());

        if static_dir.is_dir() {
            app.service(Files::new("/", static_dir.clone()).index_file("index.html"))
        } else {
            app.default_service(web::route().to(not_found))
        }
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await
}
