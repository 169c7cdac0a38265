use chrono::NaiveDateTime;
use serde::Serialize;

use crate::dto::categories::CategoryDto;
use crate::repository::{CategoryListQuery, CategoryReader, TopicListQuery, TopicReader};

use super::ServiceResult;

/// Row rendered on the admin topics page. Carries the category name so the
/// template does not have to resolve identifiers.
#[derive(Debug, Clone, Serialize)]
pub struct TopicRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub created_at: NaiveDateTime,
}

/// Core business logic for the admin categories page. The optional search
/// string matches against category names.
pub fn list_category_rows<R>(search: Option<String>, repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    let mut query = CategoryListQuery::default();
    if let Some(search) = search.filter(|s| !s.is_empty()) {
        query = query.search(search);
    }

    let categories = repo.list_categories(query)?;
    Ok(categories.into_iter().map(CategoryDto::from).collect())
}

/// Core business logic for the admin topics page. The optional search
/// string matches against topic titles and category names.
pub fn list_topic_rows<R>(search: Option<String>, repo: &R) -> ServiceResult<Vec<TopicRow>>
where
    R: TopicReader + CategoryReader,
{
    let mut query = TopicListQuery::default();
    if let Some(search) = search.filter(|s| !s.is_empty()) {
        query = query.search(search);
    }

    let topics = repo.list_topics(query)?;
    let categories = repo.list_categories(CategoryListQuery::default())?;

    let rows = topics
        .into_iter()
        .map(|topic| {
            let category = categories
                .iter()
                .find(|c| c.id == topic.category_id)
                .map(|c| c.name.as_str().to_string())
                .unwrap_or_default();
            TopicRow {
                id: topic.id.get(),
                title: topic.title.into_inner(),
                description: topic.description,
                category,
                created_at: topic.created_at,
            }
        })
        .collect();

    Ok(rows)
}
