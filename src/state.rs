use std::sync::Arc;

use juniper::Context as JuniperContext;
use sea_orm::DatabaseConnection;

use crate::schema::Schema;

pub type AppState = Arc<AppShared>;

/// Process-wide state: the connection pool and the schema built at startup.
pub struct AppShared {
    pub db: DatabaseConnection,
    pub schema: Schema<'static>,
}

impl AppShared {
    pub fn new(db: DatabaseConnection, schema: Schema<'static>) -> AppState {
        Arc::new(Self { db, schema })
    }
}

/// Per-request context handed to every resolver.
#[derive(Clone)]
pub struct AppData {
    pub db: DatabaseConnection,
}

impl JuniperContext for AppData {}

impl AppData {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
