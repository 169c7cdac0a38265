use crate::domain::category::{CategoryUpdate, NewCategory};
use crate::domain::types::CategoryId;
use crate::dto::categories::{CategoryDto, CategoryPatch, CategoryPayload};
use crate::repository::{CategoryListQuery, CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult};

/// Core business logic for `GET /categories`.
pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    let categories = repo.list_categories(CategoryListQuery::default())?;
    Ok(categories.into_iter().map(CategoryDto::from).collect())
}

/// Core business logic for `GET /categories/{id}`.
pub fn get_category<R>(id: i32, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader,
{
    let id = CategoryId::new(id).map_err(|_| ServiceError::NotFound)?;
    match repo.get_category_by_id(id)? {
        Some(category) => Ok(category.into()),
        None => Err(ServiceError::NotFound),
    }
}

/// Core business logic for `POST /categories`.
pub fn create_category<R>(payload: CategoryPayload, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryWriter,
{
    let new_category: NewCategory = payload.try_into()?;
    let created = repo.create_category(&new_category)?;
    Ok(created.into())
}

/// Core business logic for `PUT /categories/{id}`.
pub fn update_category<R>(id: i32, payload: CategoryPayload, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader + CategoryWriter,
{
    let id = CategoryId::new(id).map_err(|_| ServiceError::NotFound)?;
    let update: CategoryUpdate = payload.try_into()?;

    match repo.get_category_by_id(id)? {
        Some(_) => {}
        None => return Err(ServiceError::NotFound),
    }

    let updated = repo.update_category(id, &update)?;
    Ok(updated.into())
}

/// Core business logic for `PATCH /categories/{id}`.
pub fn patch_category<R>(id: i32, patch: CategoryPatch, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader + CategoryWriter,
{
    let id = CategoryId::new(id).map_err(|_| ServiceError::NotFound)?;

    let existing = match repo.get_category_by_id(id)? {
        Some(category) => category,
        None => return Err(ServiceError::NotFound),
    };

    let update = patch.apply(&existing)?;
    let updated = repo.update_category(id, &update)?;
    Ok(updated.into())
}

/// Core business logic for `DELETE /categories/{id}`.
///
/// Topics referencing the category are removed by the store-level cascade.
pub fn delete_category<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: CategoryWriter,
{
    let id = CategoryId::new(id).map_err(|_| ServiceError::NotFound)?;
    match repo.delete_category(id)? {
        0 => Err(ServiceError::NotFound),
        _ => Ok(()),
    }
}
