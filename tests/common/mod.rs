//! Shared test harness for integration tests.
//!
//! [`TestHarness`] owns an in-memory SQLite database created from the
//! entity definitions. [`TestHarness::with_server`] serves the real router on
//! a random port so tests talk to it over HTTP.

#![allow(dead_code)]

use std::net::SocketAddr;

use entities::{
    member_types, posts, profiles, sea_orm_active_enums::MemberTypeId, subscribers_on_authors,
    users,
};
use members_query::{app, schema, state::AppShared};
use sea_orm::{
    ActiveValue::Set, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    Schema,
};
use serde_json::{Value, json};
use uuid::Uuid;

pub struct TestHarness {
    pub db: DatabaseConnection,
}

impl TestHarness {
    /// Fresh database with every table created and no rows.
    pub async fn new() -> Self {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);
        let db = Database::connect(options)
            .await
            .expect("failed to open in-memory database");

        // Lets tests insert rows that point at missing parents.
        db.execute_unprepared("PRAGMA foreign_keys = OFF")
            .await
            .expect("failed to disable foreign keys");

        let backend = db.get_database_backend();
        let schema = Schema::new(backend);
        let statements = [
            schema.create_table_from_entity(users::Entity),
            schema.create_table_from_entity(member_types::Entity),
            schema.create_table_from_entity(profiles::Entity),
            schema.create_table_from_entity(posts::Entity),
            schema.create_table_from_entity(subscribers_on_authors::Entity),
        ];
        for statement in statements {
            db.execute(backend.build(&statement))
                .await
                .expect("failed to create table");
        }

        Self { db }
    }

    /// Start the router on a random port and return the harness together
    /// with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        let harness = Self::new().await;
        let addr = harness.serve().await;
        (harness, addr)
    }

    pub async fn serve(&self) -> SocketAddr {
        let state = AppShared::new(self.db.clone(), schema::schema());
        let router = app::router(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind");
        let addr = listener.local_addr().expect("no local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("server failed");
        });
        addr
    }

    pub async fn insert_user(&self, name: &str, balance: f64) -> Uuid {
        let id = Uuid::new_v4();
        users::Entity::insert(users::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            balance: Set(balance),
        })
        .exec_without_returning(&self.db)
        .await
        .expect("failed to insert user");
        id
    }

    pub async fn insert_post(&self, author_id: Uuid, title: &str, content: &str) -> Uuid {
        let id = Uuid::new_v4();
        posts::Entity::insert(posts::ActiveModel {
            id: Set(id),
            title: Set(title.to_string()),
            content: Set(content.to_string()),
            author_id: Set(author_id),
        })
        .exec_without_returning(&self.db)
        .await
        .expect("failed to insert post");
        id
    }

    pub async fn insert_member_type(&self, id: MemberTypeId, discount: f64, posts_limit: i32) {
        member_types::Entity::insert(member_types::ActiveModel {
            id: Set(id),
            discount: Set(discount),
            posts_limit_per_month: Set(posts_limit),
        })
        .exec_without_returning(&self.db)
        .await
        .expect("failed to insert member type");
    }

    pub async fn insert_profile(
        &self,
        user_id: Uuid,
        member_type_id: MemberTypeId,
        is_male: bool,
        year_of_birth: i32,
    ) -> Uuid {
        let id = Uuid::new_v4();
        profiles::Entity::insert(profiles::ActiveModel {
            id: Set(id),
            is_male: Set(is_male),
            year_of_birth: Set(year_of_birth),
            user_id: Set(user_id),
            member_type_id: Set(member_type_id),
        })
        .exec_without_returning(&self.db)
        .await
        .expect("failed to insert profile");
        id
    }

    pub async fn subscribe(&self, subscriber_id: Uuid, author_id: Uuid) {
        subscribers_on_authors::Entity::insert(subscribers_on_authors::ActiveModel {
            subscriber_id: Set(subscriber_id),
            author_id: Set(author_id),
        })
        .exec_without_returning(&self.db)
        .await
        .expect("failed to insert subscription");
    }
}

/// POST a raw JSON body to the GraphQL endpoint.
pub async fn post_body(addr: SocketAddr, body: Value) -> (u16, Value) {
    let resp = reqwest::Client::new()
        .post(format!("http://{addr}/"))
        .json(&body)
        .send()
        .await
        .expect("request failed");
    let status = resp.status().as_u16();
    let json = resp.json().await.expect("response is not JSON");
    (status, json)
}

pub async fn gql(addr: SocketAddr, query: &str) -> Value {
    expect_ok(post_body(addr, json!({ "query": query })).await)
}

pub async fn gql_with_variables(addr: SocketAddr, query: &str, variables: Value) -> Value {
    expect_ok(post_body(addr, json!({ "query": query, "variables": variables })).await)
}

fn expect_ok((status, json): (u16, Value)) -> Value {
    assert_eq!(status, 200, "unexpected status, body: {json}");
    json
}
