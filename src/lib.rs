pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod schema;
pub mod setup;
pub mod state;
pub mod store;
