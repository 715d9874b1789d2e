//! Read-only access to a QElectroTech project database.

use std::path::Path;

use rusqlite::{params_from_iter, Connection, OpenFlags};

use crate::error::QetError;
use crate::model::{BlockSummary, TerminalDetail};
use crate::query::{block_summary_query, terminal_detail_query};
use crate::Result;

/// Connection handle held for one extraction run.
///
/// Open it once, pass it to [`crate::extract_tables`], then [`close`] it.
///
/// [`close`]: Database::close
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open an existing database file read-only.
    ///
    /// Fails with [`QetError::DatabaseNotFound`] instead of creating an empty
    /// database when `path` does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(QetError::DatabaseNotFound(path.to_path_buf()));
        }
        log::debug!("opening {}", path.display());
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Wrap an already open connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// All blocks, ordered by block id.
    pub fn block_summaries(&self) -> Result<Vec<BlockSummary>> {
        let query = block_summary_query();
        let mut stmt = self.conn.prepare(&query.sql)?;
        let summaries = stmt
            .query_map(params_from_iter(query.params.iter()), BlockSummary::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(summaries)
    }

    /// Stream the terminal details of `block`, ordered by terminal number,
    /// into `f`.
    ///
    /// Rows are fetched lazily from the cursor while `f` consumes them.
    pub fn with_terminal_details<T, F>(&self, block: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut dyn Iterator<Item = Result<TerminalDetail>>) -> Result<T>,
    {
        let query = terminal_detail_query(Some(block));
        let mut stmt = self.conn.prepare(&query.sql)?;
        let mut rows = stmt
            .query_map(params_from_iter(query.params.iter()), TerminalDetail::from_row)?
            .map(|row| row.map_err(QetError::from));
        f(&mut rows)
    }

    /// Release the connection.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| QetError::Sql(err))
    }
}
