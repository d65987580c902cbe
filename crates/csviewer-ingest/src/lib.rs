//! CSViewer data ingestion.
//!
//! This crate turns a user's file selection into the in-memory data pool the
//! plotting side works against.
//!
//! # Features
//!
//! - **Source Catalog**: Number the selected files 1..N, replacing any earlier selection
//! - **CSV Loading**: Parse a file into a [`Table`](csviewer_model::Table), sniffing whether
//!   the first row is a header
//! - **Data Pool**: Load every catalogued source all-or-nothing, keyed by source identifier
//!
//! # Example
//!
//! ```ignore
//! use csviewer_ingest::{CsvLoader, DataPool, SourceCatalog};
//!
//! let mut catalog = SourceCatalog::new();
//! catalog.set_sources(["runs/a.csv", "runs/b.csv"]);
//!
//! let mut pool = DataPool::new();
//! pool.rebuild(catalog.records(), &CsvLoader)?;
//! for (id, table) in pool.iter() {
//!     println!("{id}: {} columns", table.width());
//! }
//! ```

mod catalog;
mod loader;
mod error;
mod pool;

// === Error Types ===
pub use error::{IngestError, Result, SourceFailure};

// === Source Catalog ===
pub use catalog::{SourceCatalog, SourceRecord};

// === CSV Reading ===
pub use loader::{CsvLoader, HEADER_SAMPLE_ROWS, TableLoader, read_csv_table, sniff_header};

// === Data Pool ===
pub use pool::DataPool;
