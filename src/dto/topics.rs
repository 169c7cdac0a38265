use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::topic::{NewTopic, Topic, TopicUpdate};
use crate::domain::types::{CategoryId, TopicTitle, TypeConstraintError};

/// Wire representation of a topic.
///
/// The referenced category appears as its identifier under `category`, not
/// as an embedded object. `created_at` renders as an ISO-8601 string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopicDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: i32,
    pub created_at: NaiveDateTime,
}

impl From<Topic> for TopicDto {
    fn from(value: Topic) -> Self {
        Self {
            id: value.id.get(),
            title: value.title.into_inner(),
            description: value.description,
            category: value.category_id.get(),
            created_at: value.created_at,
        }
    }
}

/// Request body accepted when creating or fully replacing a topic.
#[derive(Debug, Deserialize, Validate)]
pub struct TopicPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 1))]
    pub category: i32,
}

/// Request body accepted when partially updating a topic. Absent fields
/// keep their stored values; `created_at` can never be supplied.
#[derive(Debug, Default, Deserialize)]
pub struct TopicPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<i32>,
}

#[derive(Debug, Error)]
pub enum TopicPayloadError {
    #[error("topic payload validation failed: {0}")]
    Validation(String),
    #[error("topic payload contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for TopicPayloadError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for TopicPayloadError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<TopicPayload> for NewTopic {
    type Error = TopicPayloadError;

    fn try_from(value: TopicPayload) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            title: TopicTitle::new(value.title)?,
            description: value.description,
            category_id: CategoryId::new(value.category)?,
            created_at: Utc::now().naive_utc(),
        })
    }
}

impl TryFrom<TopicPayload> for TopicUpdate {
    type Error = TopicPayloadError;

    fn try_from(value: TopicPayload) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            title: TopicTitle::new(value.title)?,
            description: value.description,
            category_id: CategoryId::new(value.category)?,
        })
    }
}

impl TopicPatch {
    /// Merge the patch onto an existing record, producing a full update.
    pub fn apply(self, existing: &Topic) -> Result<TopicUpdate, TopicPayloadError> {
        let title = match self.title {
            Some(title) => TopicTitle::new(title)?,
            None => existing.title.clone(),
        };
        let description = match self.description {
            Some(description) if !description.is_empty() => description,
            Some(_) => {
                return Err(TopicPayloadError::Validation(
                    "description cannot be empty".to_string(),
                ));
            }
            None => existing.description.clone(),
        };
        let category_id = match self.category {
            Some(category) => CategoryId::new(category)?,
            None => existing.category_id,
        };
        Ok(TopicUpdate {
            title,
            description,
            category_id,
        })
    }
}
