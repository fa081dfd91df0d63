use juniper::{FieldResult, graphql_object};
use uuid::Uuid;

use super::user::User;
use crate::{state::AppData, store};

pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
}

impl From<entities::posts::Model> for Post {
    fn from(p: entities::posts::Model) -> Self {
        Self {
            id: p.id,
            title: p.title,
            content: p.content,
            author_id: p.author_id,
        }
    }
}

#[graphql_object(context = AppData)]
impl Post {
    fn id(&self) -> Uuid {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn author_id(&self) -> Uuid {
        self.author_id
    }

    async fn author(&self, ctx: &AppData) -> FieldResult<Option<User>> {
        let author = store::find_user(&ctx.db, self.author_id).await?;
        Ok(author.map(User::from))
    }
}
