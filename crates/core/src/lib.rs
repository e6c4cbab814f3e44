//! Domain types and services for Plotline projects.
//!
//! The HTTP layer resolves the acting user and hands it to the services in
//! [`projects`] explicitly; persistence goes through the [`store::EntityStore`]
//! trait so services run unchanged against Postgres or the in-process store.

pub mod error;
pub mod messages;
pub mod model;
pub mod projects;
pub mod seed;
pub mod store;
pub mod types;
