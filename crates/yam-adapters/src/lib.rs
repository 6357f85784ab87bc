//! Per-source column mapping adapters.
//!
//! Each adapter owns the column mapping and vocabulary translation tables
//! for one originating service, plus the strategies (mapping variants) that
//! service's differently-shaped exports require. Adapters build a candidate
//! [`yam_model::TrackRow`], run it through the schema validator, and apply
//! the skip-invalid policy.

mod adapter;
pub mod hardcover;
pub mod igdb;
mod normalize;
pub mod openlibrary;

pub use adapter::{AdapterRegistry, SourceAdapter, default_registry};
