use crate::domain::topic::{NewTopic, TopicUpdate};
use crate::domain::types::TopicId;
use crate::dto::topics::{TopicDto, TopicPatch, TopicPayload};
use crate::repository::{CategoryReader, TopicListQuery, TopicReader, TopicWriter};

use super::{ServiceError, ServiceResult};

/// Core business logic for `GET /topics`.
pub fn list_topics<R>(repo: &R) -> ServiceResult<Vec<TopicDto>>
where
    R: TopicReader,
{
    let topics = repo.list_topics(TopicListQuery::default())?;
    Ok(topics.into_iter().map(TopicDto::from).collect())
}

/// Core business logic for `GET /topics/{id}`.
pub fn get_topic<R>(id: i32, repo: &R) -> ServiceResult<TopicDto>
where
    R: TopicReader,
{
    let id = TopicId::new(id).map_err(|_| ServiceError::NotFound)?;
    match repo.get_topic_by_id(id)? {
        Some(topic) => Ok(topic.into()),
        None => Err(ServiceError::NotFound),
    }
}

/// Core business logic for `POST /topics`.
///
/// The referenced category must exist; the creation timestamp is assigned
/// here and never changes afterwards. The store-level foreign key remains
/// as a backstop against races with a concurrent category delete.
pub fn create_topic<R>(payload: TopicPayload, repo: &R) -> ServiceResult<TopicDto>
where
    R: CategoryReader + TopicWriter,
{
    let new_topic: NewTopic = payload.try_into()?;

    match repo.get_category_by_id(new_topic.category_id)? {
        Some(_) => {}
        None => {
            return Err(ServiceError::Validation(format!(
                "category {} does not exist",
                new_topic.category_id
            )));
        }
    }

    let created = repo.create_topic(&new_topic)?;
    Ok(created.into())
}

/// Core business logic for `PUT /topics/{id}`.
pub fn update_topic<R>(id: i32, payload: TopicPayload, repo: &R) -> ServiceResult<TopicDto>
where
    R: CategoryReader + TopicReader + TopicWriter,
{
    let id = TopicId::new(id).map_err(|_| ServiceError::NotFound)?;
    let update: TopicUpdate = payload.try_into()?;

    match repo.get_topic_by_id(id)? {
        Some(_) => {}
        None => return Err(ServiceError::NotFound),
    }

    match repo.get_category_by_id(update.category_id)? {
        Some(_) => {}
        None => {
            return Err(ServiceError::Validation(format!(
                "category {} does not exist",
                update.category_id
            )));
        }
    }

    let updated = repo.update_topic(id, &update)?;
    Ok(updated.into())
}

/// Core business logic for `PATCH /topics/{id}`.
pub fn patch_topic<R>(id: i32, patch: TopicPatch, repo: &R) -> ServiceResult<TopicDto>
where
    R: CategoryReader + TopicReader + TopicWriter,
{
    let id = TopicId::new(id).map_err(|_| ServiceError::NotFound)?;

    let existing = match repo.get_topic_by_id(id)? {
        Some(topic) => topic,
        None => return Err(ServiceError::NotFound),
    };

    let update = patch.apply(&existing)?;

    match repo.get_category_by_id(update.category_id)? {
        Some(_) => {}
        None => {
            return Err(ServiceError::Validation(format!(
                "category {} does not exist",
                update.category_id
            )));
        }
    }

    let updated = repo.update_topic(id, &update)?;
    Ok(updated.into())
}

/// Core business logic for `DELETE /topics/{id}`.
pub fn delete_topic<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: TopicWriter,
{
    let id = TopicId::new(id).map_err(|_| ServiceError::NotFound)?;
    match repo.delete_topic(id)? {
        0 => Err(ServiceError::NotFound),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::topic::Topic;
    use crate::domain::types::{CategoryId, CategoryName, TopicTitle};
    use crate::repository::test::TestRepository;
    use crate::services::categories::delete_category;
    use chrono::DateTime;

    fn sample_category() -> Category {
        Category {
            id: CategoryId::new(1).unwrap(),
            name: CategoryName::new("Science").unwrap(),
            description: None,
        }
    }

    fn sample_topic() -> Topic {
        Topic {
            id: TopicId::new(1).unwrap(),
            title: TopicTitle::new("Rust").unwrap(),
            description: "Systems programming".to_string(),
            category_id: CategoryId::new(1).unwrap(),
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    #[test]
    fn created_topic_references_its_category() {
        let repo = TestRepository::new(vec![sample_category()], vec![]);
        let payload = TopicPayload {
            title: "Rust".to_string(),
            description: "Systems programming".to_string(),
            category: 1,
        };

        let created = create_topic(payload, &repo).unwrap();

        let fetched = get_topic(created.id, &repo).unwrap();
        assert_eq!(fetched.category, 1);
    }

    #[test]
    fn create_with_unknown_category_fails_validation() {
        let repo = TestRepository::new(vec![sample_category()], vec![]);
        let payload = TopicPayload {
            title: "Rust".to_string(),
            description: "Systems programming".to_string(),
            category: 99,
        };

        let err = create_topic(payload, &repo).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn deleting_category_cascades_to_topics() {
        let repo = TestRepository::new(vec![sample_category()], vec![sample_topic()]);

        delete_category(1, &repo).unwrap();

        assert_eq!(get_topic(1, &repo).unwrap_err(), ServiceError::NotFound);
    }

    #[test]
    fn created_at_is_immutable_across_updates() {
        let repo = TestRepository::new(vec![sample_category()], vec![sample_topic()]);
        let before = get_topic(1, &repo).unwrap().created_at;

        let payload = TopicPayload {
            title: "Updated".to_string(),
            description: "Still systems programming".to_string(),
            category: 1,
        };
        let updated = update_topic(1, payload, &repo).unwrap();

        assert_eq!(updated.created_at, before);
        assert_eq!(updated.title, "Updated");
    }

    #[test]
    fn patch_keeps_absent_fields() {
        let repo = TestRepository::new(vec![sample_category()], vec![sample_topic()]);
        let patch = TopicPatch {
            title: Some("Updated".to_string()),
            description: None,
            category: None,
        };

        let updated = patch_topic(1, patch, &repo).unwrap();

        assert_eq!(updated.title, "Updated");
        assert_eq!(updated.description, "Systems programming");
        assert_eq!(updated.category, 1);
    }

    #[test]
    fn update_unknown_topic_is_not_found() {
        let repo = TestRepository::new(vec![sample_category()], vec![]);
        let payload = TopicPayload {
            title: "Rust".to_string(),
            description: "Systems programming".to_string(),
            category: 1,
        };

        assert_eq!(
            update_topic(5, payload, &repo).unwrap_err(),
            ServiceError::NotFound
        );
    }
}
