use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::{Category, CategoryUpdate, NewCategory};
use crate::domain::types::{CategoryName, TypeConstraintError};

/// Wire representation of a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            description: value.description,
        }
    }
}

/// Request body accepted when creating or fully replacing a category.
///
/// Unknown extra fields are ignored by serde; a missing `name` fails at
/// deserialization time with an error naming the field.
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryPayload {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
}

/// Request body accepted when partially updating a category. Absent fields
/// keep their stored values.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Error)]
pub enum CategoryPayloadError {
    #[error("category payload validation failed: {0}")]
    Validation(String),
    #[error("category payload contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CategoryPayloadError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CategoryPayloadError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CategoryPayload> for NewCategory {
    type Error = CategoryPayloadError;

    fn try_from(value: CategoryPayload) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: CategoryName::new(value.name)?,
            description: value.description,
        })
    }
}

impl TryFrom<CategoryPayload> for CategoryUpdate {
    type Error = CategoryPayloadError;

    fn try_from(value: CategoryPayload) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: CategoryName::new(value.name)?,
            description: value.description,
        })
    }
}

impl CategoryPatch {
    /// Merge the patch onto an existing record, producing a full update.
    pub fn apply(self, existing: &Category) -> Result<CategoryUpdate, CategoryPayloadError> {
        let name = match self.name {
            Some(name) => CategoryName::new(name)?,
            None => existing.name.clone(),
        };
        let description = self.description.or_else(|| existing.description.clone());
        Ok(CategoryUpdate { name, description })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::CategoryId;

    #[test]
    fn payload_converts_into_new_category() {
        let payload = CategoryPayload {
            name: " Science ".to_string(),
            description: Some("Scientific topics".to_string()),
        };

        let new_category: NewCategory = payload.try_into().unwrap();
        assert_eq!(new_category.name.as_str(), "Science");
        assert_eq!(
            new_category.description.as_deref(),
            Some("Scientific topics")
        );
    }

    #[test]
    fn payload_rejects_empty_name() {
        let payload = CategoryPayload {
            name: String::new(),
            description: None,
        };

        let result: Result<NewCategory, _> = payload.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn patch_keeps_absent_fields() {
        let existing = Category {
            id: CategoryId::new(1).unwrap(),
            name: CategoryName::new("Science").unwrap(),
            description: Some("Scientific topics".to_string()),
        };
        let patch = CategoryPatch {
            name: Some("Tech".to_string()),
            description: None,
        };

        let update = patch.apply(&existing).unwrap();
        assert_eq!(update.name.as_str(), "Tech");
        assert_eq!(update.description.as_deref(), Some("Scientific topics"));
    }

    #[test]
    fn unknown_fields_are_ignored_on_deserialization() {
        let payload: CategoryPayload =
            serde_json::from_str(r#"{"name":"Science","rank":3}"#).unwrap();
        assert_eq!(payload.name, "Science");
    }

    #[test]
    fn missing_name_fails_deserialization_naming_the_field() {
        let err = serde_json::from_str::<CategoryPayload>(r#"{"description":"x"}"#).unwrap_err();
        assert!(err.to_string().contains("name"));
    }
}
