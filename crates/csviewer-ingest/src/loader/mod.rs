//! CSV reading utilities.

mod header;
mod reader;

pub use header::{HEADER_SAMPLE_ROWS, sniff_header};
pub use reader::{CsvLoader, TableLoader, read_csv_table};
