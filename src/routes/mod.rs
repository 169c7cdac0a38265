use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use serde::Serialize;
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod admin;
pub mod categories;
pub mod topics;

/// Registers the JSON API endpoints for both resources.
///
/// Body extraction failures (malformed JSON, missing required fields) are
/// rewritten into the same structured error shape the services produce; the
/// serde message names the offending field.
pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let body = ErrorBody {
            error: err.to_string(),
        };
        actix_web::error::InternalError::from_response(err, HttpResponse::BadRequest().json(body))
            .into()
    }))
    .service(categories::list_categories)
    .service(categories::get_category)
    .service(categories::create_category)
    .service(categories::update_category)
    .service(categories::patch_category)
    .service(categories::delete_category)
    .service(topics::list_topics)
    .service(topics::get_topic)
    .service(topics::create_topic)
    .service(topics::update_topic)
    .service(topics::patch_topic)
    .service(topics::delete_topic);
}

/// Registers the server-rendered admin pages.
pub fn admin_config(cfg: &mut web::ServiceConfig) {
    cfg.service(admin::admin_categories)
        .service(admin::admin_topics);
}

/// JSON body returned for every failed API request.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    HttpResponse::Ok().body(tera.render(template, context).unwrap_or_else(|e| {
        log::error!("Failed to render template '{template}': {e}");
        String::new()
    }))
}
