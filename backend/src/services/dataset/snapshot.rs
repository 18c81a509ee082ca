use actix_web::{web, HttpResponse, Responder};
use common::SessionView;
use log::{debug, info};
use serde::Serialize;

use crate::services::rejected_error;
use crate::session_controller::state::SessionState;

/// Undo/redo answer; `changed` is false when there was nothing to move to.
#[derive(Debug, Serialize)]
struct HistoryMove {
    changed: bool,
    #[serde(flatten)]
    view: SessionView,
}

pub(crate) async fn current(state: web::Data<SessionState>) -> impl Responder {
    let session = state.session.read().await;
    HttpResponse::Ok().json(session.view())
}

pub(crate) async fn new_table(state: web::Data<SessionState>) -> impl Responder {
    let mut session = state.session.write().await;
    match session.new_table() {
        Ok(()) => {
            info!("created a starter table");
            HttpResponse::Ok().json(session.view())
        }
        Err(e) => rejected_error(&e),
    }
}

pub(crate) async fn clear(state: web::Data<SessionState>) -> impl Responder {
    let mut session = state.session.write().await;
    session.clear();
    HttpResponse::Ok().json(session.view())
}

pub(crate) async fn undo(state: web::Data<SessionState>) -> impl Responder {
    let mut session = state.session.write().await;
    let changed = session.undo();
    debug!("undo (changed: {})", changed);
    HttpResponse::Ok().json(HistoryMove {
        changed,
        view: session.view(),
    })
}

pub(crate) async fn redo(state: web::Data<SessionState>) -> impl Responder {
    let mut session = state.session.write().await;
    let changed = session.redo();
    debug!("redo (changed: {})", changed);
    HttpResponse::Ok().json(HistoryMove {
        changed,
        view: session.view(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;

    use crate::services::dataset::configure_routes;
    use crate::services::testing;

    #[actix_web::test]
    async fn starter_table_then_undo_back_to_empty() {
        let (state, _) = testing::state();
        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(state))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/dataset/new").to_request();
        let view: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(view["dataset"]["columns"], serde_json::json!(["الاسم", "الرقم"]));
        assert_eq!(view["dataset"]["rows"].as_array().unwrap().len(), 1);
        assert_eq!(view["roles"]["phone_column"], "الرقم");
        assert_eq!(view["can_undo"], true);

        let req = test::TestRequest::post().uri("/api/dataset/undo").to_request();
        let moved: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(moved["changed"], true);
        assert_eq!(moved["dataset"]["columns"], serde_json::json!([]));

        let req = test::TestRequest::post().uri("/api/dataset/undo").to_request();
        let moved: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(moved["changed"], false);

        let req = test::TestRequest::post().uri("/api/dataset/redo").to_request();
        let moved: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(moved["changed"], true);
        assert_eq!(moved["can_redo"], false);
    }

    #[actix_web::test]
    async fn clear_empties_the_table() {
        let (state, _) = testing::imported().await;
        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(state))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/dataset/clear").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let view: Value = test::read_body_json(resp).await;
        assert_eq!(view["dataset"]["rows"], serde_json::json!([]));
        assert_eq!(view["roles"]["name_column"], Value::Null);

        let req = test::TestRequest::get().uri("/api/dataset").to_request();
        let view: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(view["status"]["total"], 0);
    }
}
