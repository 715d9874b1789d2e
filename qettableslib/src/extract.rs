//! Extraction pipeline: one HTML table file per terminal block.
//!
//! For every block returned by the summary query, in block order:
//!
//! 1. create `terminals_<block>.html` in the output directory
//! 2. write the document header
//! 3. open a table and write a `Block <id>` header row
//! 4. stream the block's terminal details through [`DenseRows`] and write
//!    one row per terminal number `1..=max`
//! 5. close the table, write the footer, flush and close the file
//!
//! The first error aborts the run. The file being written at that point is
//! left as is.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::dense::DenseRows;
use crate::document::Document;
use crate::error::QetError;
use crate::model::{BlockSummary, TerminalDetail, ROW_CLASSES};
use crate::table::TableWriter;
use crate::Result;

/// Attributes of every generated `<table>` tag.
pub const TABLE_ATTRIBUTES: &str = r#"border="0" cellspacing="0" cellpadding="0""#;

/// Attributes of the block header cell, spanning the three columns.
const HEADER_CELL_ATTRIBUTES: &str = r#"colspan="3""#;

/// Output file name for a block.
pub fn file_name_for(block: &str) -> String {
    format!("terminals_{block}.html")
}

/// Options for an extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Directory receiving the output files (empty: current directory)
    pub output_dir: PathBuf,
    /// Framing written around each table
    pub document: Document,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::new(),
            document: Document::new(false, ""),
        }
    }
}

impl ExtractOptions {
    /// Create new default options: current directory, bare style block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write output files into `dir`.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the document framing.
    pub fn document(mut self, document: Document) -> Self {
        self.document = document;
        self
    }
}

/// What was written for one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockReport {
    pub block: String,
    pub file: PathBuf,
    /// Terminal elements labelled with this block
    pub mentions: i64,
    pub max_terminal_number: i64,
    /// Data rows written (excluding the header row)
    pub rows: usize,
}

impl std::fmt::Display for BlockReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: mentions={} maxtnum={} rows={}",
            self.file.display(),
            self.mentions,
            self.max_terminal_number,
            self.rows
        )
    }
}

/// Write the complete output of one block to `out` and return the number of
/// data rows.
///
/// `details` must yield the block's terminal details ordered by terminal
/// number. The table is closed even when reading a detail or writing a row
/// fails.
pub fn write_block<W, I>(
    out: &mut W,
    summary: &BlockSummary,
    details: I,
    document: &Document,
) -> Result<usize>
where
    W: Write,
    I: Iterator<Item = Result<TerminalDetail>>,
{
    out.write_all(document.header.as_bytes())?;

    let mut table = TableWriter::begin(out, TABLE_ATTRIBUTES, document.indent)?;
    table.write_header_row(&[summary.display_label()], HEADER_CELL_ATTRIBUTES)?;

    let mut rows = 0;
    for row in DenseRows::new(details, summary.max_terminal_number) {
        table.write_row(&row?.cells(), "", "", &ROW_CLASSES)?;
        rows += 1;
    }
    table.finish()?;

    out.write_all(document.footer.as_bytes())?;
    Ok(rows)
}

/// Generate one table file per block found in `db`.
pub fn extract_tables(db: &Database, options: &ExtractOptions) -> Result<Vec<BlockReport>> {
    let summaries = db.block_summaries()?;
    log::debug!("{} terminal blocks", summaries.len());

    let mut reports = Vec::with_capacity(summaries.len());
    for summary in summaries {
        let path = options.output_dir.join(file_name_for(&summary.block));
        let rows = db.with_terminal_details(&summary.block, |details| {
            write_block_file(&path, &summary, details, &options.document)
        })?;

        let report = BlockReport {
            block: summary.block,
            file: path,
            mentions: summary.mentions,
            max_terminal_number: summary.max_terminal_number,
            rows,
        };
        log::info!("{report}");
        reports.push(report);
    }

    Ok(reports)
}

fn write_block_file(
    path: &Path,
    summary: &BlockSummary,
    details: &mut dyn Iterator<Item = Result<TerminalDetail>>,
    document: &Document,
) -> Result<usize> {
    let write_error = |source: std::io::Error| QetError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut out = BufWriter::new(file);
    let rows = write_block(&mut out, summary, details, document).map_err(|err| match err {
        QetError::Io(source) => write_error(source),
        other => other,
    })?;
    out.flush().map_err(write_error)?;
    Ok(rows)
}
