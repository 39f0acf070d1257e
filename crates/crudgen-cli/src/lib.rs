//! # crudgen-cli
//!
//! Generation orchestration for the `crudgen` binary: single-table
//! generation and the best-effort bulk path over every table in a
//! schema.

pub mod batch;
pub mod error;

pub use batch::{generate_database, generate_table, BatchReport, GenOptions};
pub use error::{CliError, Result};
