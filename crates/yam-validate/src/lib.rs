//! Schema validation for canonical YamTrack rows.
//!
//! The validator gates every candidate row an adapter builds. Checks run in
//! a fixed short-circuit order; the first failing rule wins and names the
//! offending field so the adapter can log a useful warning.

pub mod checks;
mod validator;

pub use validator::{RowValidity, validate_row};
