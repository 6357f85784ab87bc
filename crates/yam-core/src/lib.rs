//! Batch-processing pipeline: drives an adapter over a batch of raw rows
//! and owns the filename-based strategy inference used by the dispatch
//! shell.

mod processor;
pub mod strategy;

pub use processor::process_rows;
pub use strategy::select_strategy;
