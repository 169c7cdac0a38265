use diesel::prelude::*;

use crate::domain::topic::{NewTopic, Topic, TopicUpdate};
use crate::domain::types::TopicId;
use crate::models::topic::{
    NewTopic as DbNewTopic, Topic as DbTopic, TopicUpdate as DbTopicUpdate,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, TopicListQuery, TopicReader, TopicWriter};

impl TopicReader for DieselRepository {
    fn list_topics(&self, query: TopicListQuery) -> RepositoryResult<Vec<Topic>> {
        use crate::schema::{categories, topics};

        let mut conn = self.conn()?;

        let items = match &query.search {
            Some(search) => {
                let pattern = format!("%{search}%");
                topics::table
                    .inner_join(categories::table)
                    .filter(
                        topics::title
                            .like(pattern.clone())
                            .or(categories::name.like(pattern)),
                    )
                    .select(topics::all_columns)
                    .order(topics::id.asc())
                    .load::<DbTopic>(&mut conn)?
            }
            None => topics::table
                .order(topics::id.asc())
                .load::<DbTopic>(&mut conn)?,
        };

        let items = items
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Topic>, _>>()?;

        Ok(items)
    }

    fn get_topic_by_id(&self, id: TopicId) -> RepositoryResult<Option<Topic>> {
        use crate::schema::topics;

        let mut conn = self.conn()?;

        let topic = topics::table
            .filter(topics::id.eq(id.get()))
            .first::<DbTopic>(&mut conn)
            .optional()?;

        let topic = topic.map(TryInto::try_into).transpose()?;
        Ok(topic)
    }
}

impl TopicWriter for DieselRepository {
    fn create_topic(&self, topic: &NewTopic) -> RepositoryResult<Topic> {
        use crate::schema::topics;

        let mut conn = self.conn()?;
        let db_topic: DbNewTopic = topic.clone().into();

        let created = diesel::insert_into(topics::table)
            .values(db_topic)
            .get_result::<DbTopic>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_topic(&self, id: TopicId, update: &TopicUpdate) -> RepositoryResult<Topic> {
        use crate::schema::topics;

        let mut conn = self.conn()?;
        let changeset: DbTopicUpdate = update.clone().into();

        let updated = diesel::update(topics::table.filter(topics::id.eq(id.get())))
            .set(changeset)
            .get_result::<DbTopic>(&mut conn)?;

        Ok(updated.try_into()?)
    }

    fn delete_topic(&self, id: TopicId) -> RepositoryResult<usize> {
        use crate::schema::topics;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(topics::table.filter(topics::id.eq(id.get()))).execute(&mut conn)?;

        Ok(affected)
    }
}
