//! Row types read from the database and written to the tables.

use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// Aggregate over every terminal of one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSummary {
    /// Block id (label text before the colon)
    pub block: String,
    /// Highest terminal number seen in the block (0 if none is numeric)
    pub max_terminal_number: i64,
    /// Number of terminal elements labelled with this block
    pub mentions: i64,
    /// `"<folio>-<position>"` of all mentions, comma separated
    pub positions: Option<String>,
}

impl BlockSummary {
    /// Map a row of the block summary query.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            block: row.get(0)?,
            max_terminal_number: row.get(1)?,
            mentions: row.get(2)?,
            positions: row.get(3)?,
        })
    }

    /// Label shown in the table header row.
    pub fn display_label(&self) -> String {
        format!("Block {}", self.block)
    }
}

/// One distinct terminal label with its mentions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalDetail {
    pub block: String,
    pub number: i64,
    /// Occurrences of the exact label across the whole project
    pub mentions: i64,
    pub positions: Option<String>,
}

impl TerminalDetail {
    /// Map a row of the terminal detail query.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            block: row.get(0)?,
            number: row.get(1)?,
            mentions: row.get(2)?,
            positions: row.get(3)?,
        })
    }
}

/// A row of the dense terminal sequence.
///
/// Either backed by a [`TerminalDetail`] or a placeholder for a terminal
/// number nobody mentions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalRow {
    pub number: i64,
    pub mentions: i64,
    pub positions: Option<String>,
}

/// CSS classes of the three terminal columns.
pub const ROW_CLASSES: [&str; 3] = ["tnum", "mentions", "positions"];

impl TerminalRow {
    /// Row for a terminal number without any mention.
    pub fn placeholder(number: i64) -> Self {
        Self {
            number,
            mentions: 0,
            positions: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.mentions == 0
    }

    /// Mention count as shown in the table, e.g. `(2)`.
    pub fn mention_cell(&self) -> String {
        format!("({})", self.mentions)
    }

    /// Position list as shown in the table. Placeholders get a blank.
    pub fn position_cell(&self) -> String {
        match &self.positions {
            Some(positions) => positions.clone(),
            None if self.is_placeholder() => " ".to_string(),
            None => String::new(),
        }
    }

    /// Cell contents in column order.
    pub fn cells(&self) -> [String; 3] {
        [
            self.number.to_string(),
            self.mention_cell(),
            self.position_cell(),
        ]
    }
}

impl From<TerminalDetail> for TerminalRow {
    fn from(detail: TerminalDetail) -> Self {
        Self {
            number: detail.number,
            mentions: detail.mentions,
            positions: detail.positions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_cells() {
        let row = TerminalRow::placeholder(7);
        assert!(row.is_placeholder());
        assert_eq!(row.cells(), ["7".to_string(), "(0)".to_string(), " ".to_string()]);
    }

    #[test]
    fn test_detail_cells() {
        let row = TerminalRow::from(TerminalDetail {
            block: "X1".to_string(),
            number: 3,
            mentions: 2,
            positions: Some("1-A2, 4-C7".to_string()),
        });
        assert!(!row.is_placeholder());
        assert_eq!(row.mention_cell(), "(2)");
        assert_eq!(row.position_cell(), "1-A2, 4-C7");
    }

    #[test]
    fn test_detail_without_positions() {
        let row = TerminalRow {
            number: 1,
            mentions: 1,
            positions: None,
        };
        assert_eq!(row.position_cell(), "");
    }

    #[test]
    fn test_display_label() {
        let summary = BlockSummary {
            block: "X2".to_string(),
            max_terminal_number: 4,
            mentions: 5,
            positions: None,
        };
        assert_eq!(summary.display_label(), "Block X2");
    }
}
