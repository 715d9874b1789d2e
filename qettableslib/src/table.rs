//! Streaming HTML table writer.
//!
//! [`TableWriter`] writes the opening `<table>` tag when created and the
//! closing tag when finished. If it is dropped before [`TableWriter::finish`]
//! (an early `?` return, a panic) the closing tag is still written, so every
//! table that was opened is closed.
//!
//! Rows are written one at a time, nested two spaces per level below the
//! table tag:
//!
//! ```text
//! <table border="0">
//!   <tr>
//!     <td class="tnum">1</td>
//!   </tr>
//! </table>
//! ```
//!
//! Cell contents are written verbatim. No HTML escaping is performed.

use std::io::{self, Write};

/// Which tag a row's cells use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// `<td>`
    Data,
    /// `<th>`
    Header,
}

impl CellKind {
    fn tag(self) -> &'static str {
        match self {
            CellKind::Data => "td",
            CellKind::Header => "th",
        }
    }
}

/// Open HTML table on an output sink.
pub struct TableWriter<'a, W: Write> {
    out: &'a mut W,
    indent: String,
    closed: bool,
}

impl<'a, W: Write> TableWriter<'a, W> {
    /// Write the opening tag and return the writer.
    ///
    /// `indent` is the number of spaces before the table tag.
    pub fn begin(out: &'a mut W, attributes: &str, indent: usize) -> io::Result<Self> {
        let indent = " ".repeat(indent);
        writeln!(out, "{indent}<table{}>", with_space(attributes))?;
        Ok(Self {
            out,
            indent,
            closed: false,
        })
    }

    /// Write one row of `<th>` cells.
    pub fn write_header_row<S: AsRef<str>>(
        &mut self,
        cells: &[S],
        cell_attr: &str,
    ) -> io::Result<()> {
        self.write_cells(CellKind::Header, cells, "", cell_attr, &[])
    }

    /// Write one row of `<td>` cells.
    ///
    /// `classes[i]` becomes the CSS class of `cells[i]`. Cells past the end of
    /// `classes` get no class.
    pub fn write_row<S: AsRef<str>>(
        &mut self,
        cells: &[S],
        row_attr: &str,
        cell_attr: &str,
        classes: &[&str],
    ) -> io::Result<()> {
        self.write_cells(CellKind::Data, cells, row_attr, cell_attr, classes)
    }

    /// Write one row whose cells use the tag selected by `kind`.
    pub fn write_cells<S: AsRef<str>>(
        &mut self,
        kind: CellKind,
        cells: &[S],
        row_attr: &str,
        cell_attr: &str,
        classes: &[&str],
    ) -> io::Result<()> {
        let tag = kind.tag();
        let indent = &self.indent;
        let lines: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, content)| {
                let attributes = cell_attributes(classes.get(i).copied(), cell_attr);
                format!(
                    "{indent}    <{tag}{}>{}</{tag}>",
                    with_space(&attributes),
                    content.as_ref()
                )
            })
            .collect();

        writeln!(
            self.out,
            "{indent}  <tr{}>\n{}\n{indent}  </tr>",
            with_space(row_attr),
            lines.join("\n")
        )
    }

    /// Write the closing tag.
    pub fn finish(mut self) -> io::Result<()> {
        self.closed = true;
        self.write_end()
    }

    fn write_end(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}</table>", self.indent)
    }
}

impl<W: Write> Drop for TableWriter<'_, W> {
    fn drop(&mut self) {
        if !self.closed {
            // Nowhere to report a failure from here
            let _ = self.write_end();
        }
    }
}

/// Attribute string of a cell: class first, then the shared attributes.
fn cell_attributes(class: Option<&str>, cell_attr: &str) -> String {
    match class {
        Some(class) => format!("class=\"{class}\" {cell_attr}").trim().to_string(),
        None => cell_attr.to_string(),
    }
}

fn with_space(attributes: &str) -> String {
    if attributes.is_empty() {
        String::new()
    } else {
        format!(" {attributes}")
    }
}
