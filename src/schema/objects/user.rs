use juniper::{FieldResult, graphql_object};
use uuid::Uuid;

use super::{post::Post, profile::Profile};
use crate::{state::AppData, store};

pub struct User {
    pub id: Uuid,
    pub name: String,
    pub balance: f64,
}

impl From<entities::users::Model> for User {
    fn from(u: entities::users::Model) -> Self {
        Self {
            id: u.id,
            name: u.name,
            balance: u.balance,
        }
    }
}

#[graphql_object(context = AppData)]
impl User {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn balance(&self) -> f64 {
        self.balance
    }

    async fn profile(&self, ctx: &AppData) -> FieldResult<Option<Profile>> {
        let profile = store::find_profile_by_user(&ctx.db, self.id).await?;
        Ok(profile.map(Profile::from))
    }

    async fn posts(&self, ctx: &AppData) -> FieldResult<Option<Vec<Post>>> {
        let posts = store::find_posts_by_author(&ctx.db, self.id)
            .await?
            .into_iter()
            .map(Post::from)
            .collect();
        Ok(Some(posts))
    }

    /// Authors this user is subscribed to.
    async fn user_subscribed_to(&self, ctx: &AppData) -> FieldResult<Option<Vec<User>>> {
        let users = store::find_users_subscribed_by(&ctx.db, self.id)
            .await?
            .into_iter()
            .map(User::from)
            .collect();
        Ok(Some(users))
    }

    /// Users subscribed to this user.
    async fn subscribed_to_user(&self, ctx: &AppData) -> FieldResult<Option<Vec<User>>> {
        let users = store::find_subscribers_of(&ctx.db, self.id)
            .await?
            .into_iter()
            .map(User::from)
            .collect();
        Ok(Some(users))
    }
}
