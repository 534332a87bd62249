//! Loading NWSS submissions from delimited text.

#![deny(unsafe_code)]

mod csv_records;
mod discovery;

pub use csv_records::{read_records, read_records_from_reader};
pub use discovery::{collect_inputs, list_csv_files};
