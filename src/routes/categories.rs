use actix_web::{HttpResponse, delete, get, patch, post, put, web};

use crate::dto::categories::{CategoryPatch, CategoryPayload};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::categories::{
    create_category as create_category_service, delete_category as delete_category_service,
    get_category as get_category_service, list_categories as list_categories_service,
    patch_category as patch_category_service, update_category as update_category_service,
};

#[get("/categories")]
pub async fn list_categories(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let categories = list_categories_service(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(categories))
}

#[get("/categories/{category_id}")]
pub async fn get_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let category = get_category_service(category_id.into_inner(), repo.get_ref())?;
    Ok(HttpResponse::Ok().json(category))
}

#[post("/categories")]
pub async fn create_category(
    payload: web::Json<CategoryPayload>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let created = create_category_service(payload.into_inner(), repo.get_ref())?;
    Ok(HttpResponse::Created().json(created))
}

#[put("/categories/{category_id}")]
pub async fn update_category(
    category_id: web::Path<i32>,
    payload: web::Json<CategoryPayload>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let updated =
        update_category_service(category_id.into_inner(), payload.into_inner(), repo.get_ref())?;
    Ok(HttpResponse::Ok().json(updated))
}

#[patch("/categories/{category_id}")]
pub async fn patch_category(
    category_id: web::Path<i32>,
    patch: web::Json<CategoryPatch>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let updated =
        patch_category_service(category_id.into_inner(), patch.into_inner(), repo.get_ref())?;
    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/categories/{category_id}")]
pub async fn delete_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    delete_category_service(category_id.into_inner(), repo.get_ref())?;
    Ok(HttpResponse::NoContent().finish())
}
