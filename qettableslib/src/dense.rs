//! Gap filling for terminal sequences.
//!
//! The detail query only returns terminals that are mentioned at least once.
//! [`DenseRows`] turns that sparse, number-ordered stream back into the full
//! `1..=max` sequence, inserting placeholder rows for the missing numbers.

use crate::model::{TerminalDetail, TerminalRow};
use crate::Result;

/// Iterator yielding exactly one row per terminal number `1..=max`.
///
/// Input must be ordered by terminal number. Details whose number is not
/// above the last emitted one (coerced `0` numbers, or `A:01` next to `A:1`)
/// are skipped with a warning. Errors from the input are passed through.
pub struct DenseRows<I> {
    details: I,
    max: i64,
    /// Last terminal number emitted
    rows: i64,
    pending: Option<TerminalDetail>,
}

impl<I> DenseRows<I>
where
    I: Iterator<Item = Result<TerminalDetail>>,
{
    pub fn new(details: I, max: i64) -> Self {
        Self {
            details,
            max,
            rows: 0,
            pending: None,
        }
    }

    /// Number of rows emitted so far.
    pub fn rows(&self) -> i64 {
        self.rows
    }
}

impl<I> Iterator for DenseRows<I>
where
    I: Iterator<Item = Result<TerminalDetail>>,
{
    type Item = Result<TerminalRow>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(detail) = self.pending.take() {
                self.rows += 1;
                if self.rows < detail.number {
                    let placeholder = TerminalRow::placeholder(self.rows);
                    self.pending = Some(detail);
                    return Some(Ok(placeholder));
                }
                return Some(Ok(TerminalRow::from(detail)));
            }

            match self.details.next() {
                Some(Ok(detail)) => {
                    if detail.number <= self.rows {
                        log::warn!(
                            "skipping terminal {}:{} (number already listed)",
                            detail.block,
                            detail.number
                        );
                        continue;
                    }
                    self.pending = Some(detail);
                }
                Some(Err(err)) => return Some(Err(err)),
                None if self.rows < self.max => {
                    self.rows += 1;
                    return Some(Ok(TerminalRow::placeholder(self.rows)));
                }
                None => return None,
            }
        }
    }
}
