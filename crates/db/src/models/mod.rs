//! Row structs for each table.
//!
//! Each submodule contains a `FromRow` struct matching the table's columns
//! and a conversion into the matching `plotline_core::model` record.

pub mod character;
pub mod plot;
pub mod project;
pub mod user;
