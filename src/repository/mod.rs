use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, CategoryUpdate, NewCategory};
use crate::domain::topic::{NewTopic, Topic, TopicUpdate};
use crate::domain::types::{CategoryId, TopicId};
use crate::repository::errors::RepositoryResult;

pub mod category;
pub mod errors;
pub mod topic;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryListQuery {
    /// Case-insensitive substring match on the category name.
    pub search: Option<String>,
}

impl CategoryListQuery {
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Query parameters used when listing topics.
#[derive(Debug, Clone, Default)]
pub struct TopicListQuery {
    /// Case-insensitive substring match on the topic title or the name of
    /// the referenced category.
    pub search: Option<String>,
}

impl TopicListQuery {
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List categories matching the supplied query parameters.
    fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category, returning the stored record.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Replace the mutable fields of a category, returning the stored record.
    fn update_category(&self, id: CategoryId, update: &CategoryUpdate)
    -> RepositoryResult<Category>;
    /// Delete a category by id, cascading to its topics. Returns the number
    /// of deleted category rows.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
}

/// Read-only operations for topic entities.
pub trait TopicReader {
    /// List topics matching the supplied query parameters.
    fn list_topics(&self, query: TopicListQuery) -> RepositoryResult<Vec<Topic>>;
    /// Retrieve a topic by its identifier.
    fn get_topic_by_id(&self, id: TopicId) -> RepositoryResult<Option<Topic>>;
}

/// Write operations for topic entities.
pub trait TopicWriter {
    /// Persist a new topic, returning the stored record.
    fn create_topic(&self, topic: &NewTopic) -> RepositoryResult<Topic>;
    /// Replace the mutable fields of a topic, returning the stored record.
    /// The creation timestamp is never modified.
    fn update_topic(&self, id: TopicId, update: &TopicUpdate) -> RepositoryResult<Topic>;
    /// Delete a topic by id. Returns the number of deleted rows.
    fn delete_topic(&self, id: TopicId) -> RepositoryResult<usize>;
}
