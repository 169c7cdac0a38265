use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, TopicId, TopicTitle};

/// Canonical topic record. Every topic belongs to exactly one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Topic {
    pub id: TopicId,
    pub title: TopicTitle,
    pub description: String,
    pub category_id: CategoryId,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`Topic`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTopic {
    pub title: TopicTitle,
    pub description: String,
    pub category_id: CategoryId,
    pub created_at: NaiveDateTime,
}

/// Replacement values for the mutable fields of a [`Topic`].
///
/// `created_at` is deliberately absent: the creation timestamp is set once
/// at insert time and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicUpdate {
    pub title: TopicTitle,
    pub description: String,
    pub category_id: CategoryId,
}
