//! # crudgen-mysql
//!
//! MySQL-specific schema introspection for `crudgen-core`.
//!
//! The core crate is driver-agnostic and never touches a connection;
//! this crate reads ordered column metadata from
//! `INFORMATION_SCHEMA.COLUMNS` over a sqlx pool, converts the raw rows
//! into the core schema model, and exposes the table listing the bulk
//! generation path iterates over.
//!
//! Connection and query failures surface verbatim as [`sqlx::Error`];
//! nothing here interprets them. The one failure this crate adds is
//! [`crudgen_core::CodegenError::TableNotFound`], raised when a table
//! yields zero columns, which is how an absent table shows up through
//! a generic column query.

mod introspect;

pub use introspect::{fetch_columns, list_tables, load_table, ColumnRow, LoadError};
