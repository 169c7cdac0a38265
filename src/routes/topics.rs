use actix_web::{HttpResponse, delete, get, patch, post, put, web};

use crate::dto::topics::{TopicPatch, TopicPayload};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::topics::{
    create_topic as create_topic_service, delete_topic as delete_topic_service,
    get_topic as get_topic_service, list_topics as list_topics_service,
    patch_topic as patch_topic_service, update_topic as update_topic_service,
};

#[get("/topics")]
pub async fn list_topics(repo: web::Data<DieselRepository>) -> Result<HttpResponse, ServiceError> {
    let topics = list_topics_service(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(topics))
}

#[get("/topics/{topic_id}")]
pub async fn get_topic(
    topic_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let topic = get_topic_service(topic_id.into_inner(), repo.get_ref())?;
    Ok(HttpResponse::Ok().json(topic))
}

#[post("/topics")]
pub async fn create_topic(
    payload: web::Json<TopicPayload>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let created = create_topic_service(payload.into_inner(), repo.get_ref())?;
    Ok(HttpResponse::Created().json(created))
}

#[put("/topics/{topic_id}")]
pub async fn update_topic(
    topic_id: web::Path<i32>,
    payload: web::Json<TopicPayload>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let updated = update_topic_service(topic_id.into_inner(), payload.into_inner(), repo.get_ref())?;
    Ok(HttpResponse::Ok().json(updated))
}

#[patch("/topics/{topic_id}")]
pub async fn patch_topic(
    topic_id: web::Path<i32>,
    patch: web::Json<TopicPatch>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let updated = patch_topic_service(topic_id.into_inner(), patch.into_inner(), repo.get_ref())?;
    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/topics/{topic_id}")]
pub async fn delete_topic(
    topic_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    delete_topic_service(topic_id.into_inner(), repo.get_ref())?;
    Ok(HttpResponse::NoContent().finish())
}
