//! CLI library components for the YamTrack importer.
//!
//! The binary lives in `main.rs`; the logging setup is exposed here so the
//! subscriber can be configured from integration tests as well.

pub mod logging;
