//! # qettableslib
//!
//! Terminal block tables from QElectroTech project databases.
//!
//! ## Overview
//!
//! QElectroTech stores its element nomenclature in SQLite. Terminals are
//! elements of type `terminal` labelled `"<block>:<number>"`, e.g. `X1:12`.
//! This library reads those labels and writes, for every terminal block, an
//! HTML table listing each terminal number of the block together with how
//! often it is mentioned and on which folio positions.
//!
//! The pipeline has four stages:
//!
//! - **Query**: two SQL queries decompose the labels, one summarising each
//!   block and one listing each distinct terminal
//! - **Dense rows**: terminal numbers nobody mentions get placeholder rows, so
//!   a block with maximum terminal `n` always yields rows `1..=n`
//! - **Table writer**: rows are streamed into an HTML table whose closing tag
//!   is written on every exit path
//! - **Document**: a style block, optionally a complete HTML document, frames
//!   each table
//!
//! ## Example
//!
//! ```rust,no_run
//! use qettableslib::{extract_tables, Database, Document, ExtractOptions};
//!
//! let db = Database::open("qet.sqlite")?;
//! let options = ExtractOptions::new()
//!     .output_dir("out")
//!     .document(Document::new(true, "td.tnum { width: 3em; }"));
//! for report in extract_tables(&db, &options)? {
//!     println!("{report}");
//! }
//! db.close()?;
//! # Ok::<(), qettableslib::QetError>(())
//! ```

pub mod database;
pub mod dense;
pub mod document;
pub mod error;
pub mod extract;
pub mod model;
pub mod query;
pub mod table;

#[cfg(test)]
pub(crate) mod test_support;

pub use database::Database;
pub use dense::DenseRows;
pub use document::{load_stylesheet, Document, MANDATORY_CSS};
pub use error::QetError;
pub use extract::{extract_tables, file_name_for, write_block, BlockReport, ExtractOptions};
pub use model::{BlockSummary, TerminalDetail, TerminalRow};
pub use query::{block_summary_query, terminal_detail_query, Query};
pub use table::{CellKind, TableWriter};

/// Result type for qettableslib operations
pub type Result<T> = std::result::Result<T, QetError>;
