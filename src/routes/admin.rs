use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;
use tera::{Context, Tera};

use crate::repository::DieselRepository;
use crate::routes::render_template;
use crate::services::admin::{
    list_category_rows as list_category_rows_service, list_topic_rows as list_topic_rows_service,
};

#[derive(Deserialize, Debug)]
struct AdminQueryParams {
    search: Option<String>,
}

#[get("/admin/categories")]
pub async fn admin_categories(
    params: web::Query<AdminQueryParams>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = params.into_inner();

    let categories = match list_category_rows_service(params.search.clone(), repo.get_ref()) {
        Ok(categories) => categories,
        Err(e) => {
            log::error!("Failed to list categories for admin page: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = Context::new();
    context.insert("current_page", "categories");
    context.insert("search", &params.search.unwrap_or_default());
    context.insert("categories", &categories);

    render_template(&tera, "admin/categories.html", &context)
}

#[get("/admin/topics")]
pub async fn admin_topics(
    params: web::Query<AdminQueryParams>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = params.into_inner();

    let topics = match list_topic_rows_service(params.search.clone(), repo.get_ref()) {
        Ok(topics) => topics,
        Err(e) => {
            log::error!("Failed to list topics for admin page: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = Context::new();
    context.insert("current_page", "topics");
    context.insert("search", &params.search.unwrap_or_default());
    context.insert("topics", &topics);

    render_template(&tera, "admin/topics.html", &context)
}
