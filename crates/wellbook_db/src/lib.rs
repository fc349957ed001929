//! Database integration for Wellbook
//!
//! This crate provides a database client that is designed to be database agnostic,
//! using SQLx as the underlying database library. It supports SQLite, PostgreSQL,
//! and MySQL databases through feature flags.
//!
//! # Features
//!
//! - Database agnostic design
//! - Connection pooling
//! - Integration with the Wellbook configuration system
//! - Support for SQLite, PostgreSQL, and MySQL
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wellbook_config::load_config;
//! use wellbook_db::DbClient;
//!
//! async fn setup_db() -> Result<DbClient, Box<dyn std::error::Error>> {
//!     let config = Arc::new(load_config()?);
//!     let db_client = DbClient::new(&config).await?;
//!     Ok(db_client)
//! }
//! ```

pub mod client;
pub mod error;
pub mod repositories;

// Re-export the client and repository types for ease of use
pub use client::DbClient;
pub use error::DbError;
pub use repositories::{BookedSlotRepository, SqlBookedSlotRepository};
