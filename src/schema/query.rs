use entities::sea_orm_active_enums::MemberTypeId;
use juniper::FieldResult;
use uuid::Uuid;

use super::objects::{member_type::MemberType, post::Post, profile::Profile, user::User};
use crate::{state::AppData, store};

#[derive(Clone, Copy, Debug)]
pub struct Query;

#[juniper::graphql_object(context = crate::state::AppData)]
impl Query {
    async fn user(ctx: &AppData, id: Uuid) -> FieldResult<Option<User>> {
        let user = store::find_user(&ctx.db, id).await?;
        Ok(user.map(User::from))
    }

    async fn users(ctx: &AppData) -> FieldResult<Option<Vec<User>>> {
        let users = store::find_users(&ctx.db)
            .await?
            .into_iter()
            .map(User::from)
            .collect();
        Ok(Some(users))
    }

    async fn post(ctx: &AppData, id: Uuid) -> FieldResult<Option<Post>> {
        let post = store::find_post(&ctx.db, id).await?;
        Ok(post.map(Post::from))
    }

    async fn posts(ctx: &AppData) -> FieldResult<Option<Vec<Post>>> {
        let posts = store::find_posts(&ctx.db)
            .await?
            .into_iter()
            .map(Post::from)
            .collect();
        Ok(Some(posts))
    }

    async fn profile(ctx: &AppData, id: Uuid) -> FieldResult<Option<Profile>> {
        let profile = store::find_profile(&ctx.db, id).await?;
        Ok(profile.map(Profile::from))
    }

    async fn profiles(ctx: &AppData) -> FieldResult<Option<Vec<Profile>>> {
        let profiles = store::find_profiles(&ctx.db)
            .await?
            .into_iter()
            .map(Profile::from)
            .collect();
        Ok(Some(profiles))
    }

    async fn member_type(ctx: &AppData, id: MemberTypeId) -> FieldResult<Option<MemberType>> {
        let member_type = store::find_member_type(&ctx.db, id).await?;
        Ok(member_type.map(MemberType::from))
    }

    async fn member_types(ctx: &AppData) -> FieldResult<Option<Vec<MemberType>>> {
        let member_types = store::find_member_types(&ctx.db)
            .await?
            .into_iter()
            .map(MemberType::from)
            .collect();
        Ok(Some(member_types))
    }
}
