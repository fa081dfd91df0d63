//! Lookups the resolvers are allowed to make.
//!
//! Every function issues exactly one query. Singular lookups return
//! `Ok(None)` when the row is absent; listing lookups return an empty vector.
//! Nothing here batches, so a relation resolved for each row of a list costs
//! one query per row.

use entities::{
    member_types, posts, profiles, sea_orm_active_enums::MemberTypeId, subscribers_on_authors,
    users,
};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Select,
    sea_query::{Expr, Query},
};
use uuid::Uuid;

pub async fn find_user<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id).one(db).await
}

pub async fn find_users<C: ConnectionTrait>(db: &C) -> Result<Vec<users::Model>, DbErr> {
    users::Entity::find().all(db).await
}

/// Authors that `subscriber_id` is subscribed to.
pub async fn find_users_subscribed_by<C: ConnectionTrait>(
    db: &C,
    subscriber_id: Uuid,
) -> Result<Vec<users::Model>, DbErr> {
    users_subscribed_by(subscriber_id).all(db).await
}

/// Users subscribed to `author_id`.
pub async fn find_subscribers_of<C: ConnectionTrait>(
    db: &C,
    author_id: Uuid,
) -> Result<Vec<users::Model>, DbErr> {
    subscribers_of(author_id).all(db).await
}

fn users_subscribed_by(subscriber_id: Uuid) -> Select<users::Entity> {
    users::Entity::find().filter(Expr::exists(
        Query::select()
            .column(subscribers_on_authors::Column::AuthorId)
            .from(subscribers_on_authors::Entity)
            .and_where(
                Expr::col((
                    subscribers_on_authors::Entity,
                    subscribers_on_authors::Column::AuthorId,
                ))
                .equals((users::Entity, users::Column::Id)),
            )
            .and_where(subscribers_on_authors::Column::SubscriberId.eq(subscriber_id))
            .to_owned(),
    ))
}

fn subscribers_of(author_id: Uuid) -> Select<users::Entity> {
    users::Entity::find().filter(Expr::exists(
        Query::select()
            .column(subscribers_on_authors::Column::SubscriberId)
            .from(subscribers_on_authors::Entity)
            .and_where(
                Expr::col((
                    subscribers_on_authors::Entity,
                    subscribers_on_authors::Column::SubscriberId,
                ))
                .equals((users::Entity, users::Column::Id)),
            )
            .and_where(subscribers_on_authors::Column::AuthorId.eq(author_id))
            .to_owned(),
    ))
}

pub async fn find_post<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> Result<Option<posts::Model>, DbErr> {
    posts::Entity::find_by_id(id).one(db).await
}

pub async fn find_posts<C: ConnectionTrait>(db: &C) -> Result<Vec<posts::Model>, DbErr> {
    posts::Entity::find().all(db).await
}

pub async fn find_posts_by_author<C: ConnectionTrait>(
    db: &C,
    author_id: Uuid,
) -> Result<Vec<posts::Model>, DbErr> {
    posts::Entity::find()
        .filter(posts::Column::AuthorId.eq(author_id))
        .all(db)
        .await
}

pub async fn find_profile<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> Result<Option<profiles::Model>, DbErr> {
    profiles::Entity::find_by_id(id).one(db).await
}

pub async fn find_profiles<C: ConnectionTrait>(db: &C) -> Result<Vec<profiles::Model>, DbErr> {
    profiles::Entity::find().all(db).await
}

pub async fn find_profile_by_user<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
) -> Result<Option<profiles::Model>, DbErr> {
    profiles::Entity::find()
        .filter(profiles::Column::UserId.eq(user_id))
        .one(db)
        .await
}

pub async fn find_profiles_by_member_type<C: ConnectionTrait>(
    db: &C,
    member_type_id: MemberTypeId,
) -> Result<Vec<profiles::Model>, DbErr> {
    profiles::Entity::find()
        .filter(profiles::Column::MemberTypeId.eq(member_type_id))
        .all(db)
        .await
}

pub async fn find_member_type<C: ConnectionTrait>(
    db: &C,
    id: MemberTypeId,
) -> Result<Option<member_types::Model>, DbErr> {
    member_types::Entity::find_by_id(id).one(db).await
}

pub async fn find_member_types<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<member_types::Model>, DbErr> {
    member_types::Entity::find().all(db).await
}
