//! # clubforge-database
//!
//! PostgreSQL access layer: connection pool management, migration runner,
//! and one repository per table.

pub mod connection;
pub mod migration;
pub mod repositories;
