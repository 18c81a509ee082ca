use actix_web::{web, HttpResponse, Responder};
use common::requests::{InsertPlaceholderRequest, TemplateRequest};
use common::{template, Session};
use serde::Serialize;

use crate::session_controller::state::SessionState;

#[derive(Debug, Serialize)]
struct TemplateResponse {
    text: String,
    /// Placeholders that would be sent literally.
    unknown_placeholders: Vec<String>,
    /// Cursor after an inserted placeholder, in UTF-16 code units.
    #[serde(skip_serializing_if = "Option::is_none")]
    cursor: Option<u32>,
}

impl TemplateResponse {
    fn of(session: &Session, cursor: Option<u32>) -> Self {
        Self {
            text: session.template().to_string(),
            unknown_placeholders: template::unknown_placeholders(
                session.template(),
                session.dataset().columns(),
            ),
            cursor,
        }
    }
}

pub(crate) async fn get(state: web::Data<SessionState>) -> impl Responder {
    let session = state.session.read().await;
    HttpResponse::Ok().json(TemplateResponse::of(&session, None))
}

pub(crate) async fn save(
    state: web::Data<SessionState>,
    payload: web::Json<TemplateRequest>,
) -> impl Responder {
    let mut session = state.session.write().await;
    session.set_template(payload.into_inner().text);
    HttpResponse::Ok().json(TemplateResponse::of(&session, None))
}

pub(crate) async fn insert_placeholder(
    state: web::Data<SessionState>,
    payload: web::Json<InsertPlaceholderRequest>,
) -> impl Responder {
    let mut session = state.session.write().await;
    let cursor = session.insert_placeholder(&payload.column, payload.cursor);
    HttpResponse::Ok().json(TemplateResponse::of(&session, Some(cursor)))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use common::requests::{InsertPlaceholderRequest, TemplateRequest};
    use serde_json::{json, Value};

    use crate::services::sender::configure_routes;
    use crate::services::testing;

    #[actix_web::test]
    async fn default_template_comes_from_the_config() {
        let (state, _) = testing::state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/sender/template").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["text"], "السلام عليكم {name} 🌹");
        assert_eq!(body["unknown_placeholders"], json!(["name"]));
        assert!(body.get("cursor").is_none());
    }

    #[actix_web::test]
    async fn save_and_insert_placeholder() {
        let (state, _) = testing::imported().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/sender/template")
            .set_json(TemplateRequest {
                text: "🌹 Hi  from {city}".to_string(),
            })
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["unknown_placeholders"], json!(["city"]));

        let req = test::TestRequest::post()
            .uri("/api/sender/template/placeholder")
            .set_json(InsertPlaceholderRequest {
                column: "name".to_string(),
                cursor: 6,
            })
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["text"], "🌹 Hi {name} from {city}");
        assert_eq!(body["cursor"], 12);
        assert_eq!(state.session.read().await.template(), "🌹 Hi {name} from {city}");
    }
}
