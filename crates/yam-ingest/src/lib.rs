//! File ingestion and output.
//!
//! Thin I/O collaborators around the mapping core: CSV exports become raw
//! rows, canonical rows become the output CSV, and XML inputs get a
//! diagnostic element dump.

mod csv_io;
mod error;
mod xml_io;

pub use csv_io::{read_csv, write_csv};
pub use error::IngestError;
pub use xml_io::read_xml;
