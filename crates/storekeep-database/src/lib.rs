//! # storekeep-database
//!
//! PostgreSQL pool setup, embedded schema migrations, and concrete
//! repository implementations for all Storekeep entities, including the
//! category product-count maintenance that runs on the same transaction
//! as every product mutation.

pub mod connection;
pub mod repositories;

pub use connection::DatabasePool;
