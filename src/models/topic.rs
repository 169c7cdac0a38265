use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::topic::{
    NewTopic as DomainNewTopic, Topic as DomainTopic, TopicUpdate as DomainTopicUpdate,
};
use crate::domain::types::{TopicTitle, TypeConstraintError};

/// Diesel model representing the `topics` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::topics)]
pub struct Topic {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category_id: i32,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Topic`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::topics)]
pub struct NewTopic {
    pub title: String,
    pub description: String,
    pub category_id: i32,
    pub created_at: NaiveDateTime,
}

/// Changeset applied when replacing a topic's mutable fields.
///
/// `created_at` is not part of the changeset so updates can never touch it.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::topics)]
pub struct TopicUpdate {
    pub title: String,
    pub description: String,
    pub category_id: i32,
}

impl TryFrom<Topic> for DomainTopic {
    type Error = TypeConstraintError;

    fn try_from(topic: Topic) -> Result<Self, Self::Error> {
        Ok(Self {
            id: topic.id.try_into()?,
            title: TopicTitle::new(topic.title)?,
            description: topic.description,
            category_id: topic.category_id.try_into()?,
            created_at: topic.created_at,
        })
    }
}

impl From<DomainNewTopic> for NewTopic {
    fn from(topic: DomainNewTopic) -> Self {
        Self {
            title: topic.title.into_inner(),
            description: topic.description,
            category_id: topic.category_id.get(),
            created_at: topic.created_at,
        }
    }
}

impl From<DomainTopicUpdate> for TopicUpdate {
    fn from(update: DomainTopicUpdate) -> Self {
        Self {
            title: update.title.into_inner(),
            description: update.description,
            category_id: update.category_id.get(),
        }
    }
}
