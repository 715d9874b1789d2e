//! Framing around the tables: stylesheet and optional HTML document.

use std::fs;
use std::path::Path;

use crate::error::QetError;
use crate::Result;

/// Rules every output needs so cell heights line up across tables.
pub const MANDATORY_CSS: &str = "\
td { line-height: 20px; }
th { line-height: 12px; }
";

const DOCTYPE: &str =
    r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.0//EN" "http://www.w3.org/TR/REC-html40/strict.dtd">"#;

/// Text written before and after each table, and the table's indentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub header: String,
    pub footer: String,
    /// Spaces before the `<table>` tag
    pub indent: usize,
}

impl Document {
    /// Build the framing for one output file.
    ///
    /// Without `wrap` the output is a bare `<style>` block followed by the
    /// table. With `wrap` it is a complete HTML document and the table is
    /// nested inside `<body>`; the style block is only included when `css` is
    /// non-empty.
    pub fn new(wrap: bool, css: &str) -> Self {
        let rules = format!("{MANDATORY_CSS}{css}");

        if !wrap {
            return Self {
                header: format!("<style type=\"text/css\">\n{rules}</style>\n"),
                footer: String::new(),
                indent: 0,
            };
        }

        let mut header = format!("{DOCTYPE}\n<html>\n  <head>\n");
        if !css.is_empty() {
            header.push_str(&format!(
                "    <style type=\"text/css\">\n{rules}\n    </style>\n"
            ));
        }
        header.push_str("  </head>\n  <body>\n");

        Self {
            header,
            footer: "  </body>\n</html>\n".to_string(),
            indent: 4,
        }
    }
}

/// Read a stylesheet to include in every output file.
pub fn load_stylesheet(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| QetError::StylesheetRead {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_bare_style_block() {
        let doc = Document::new(false, "body{color:red}");
        assert_eq!(
            doc.header,
            "<style type=\"text/css\">\ntd { line-height: 20px; }\nth { line-height: 12px; }\nbody{color:red}</style>\n"
        );
        assert!(doc.footer.is_empty());
        assert_eq!(doc.indent, 0);
        assert!(!doc.header.contains("<html>"));
    }

    #[test]
    fn test_bare_keeps_mandatory_rules_without_css() {
        let doc = Document::new(false, "");
        assert!(doc.header.starts_with("<style type=\"text/css\">\n"));
        assert!(doc.header.contains(MANDATORY_CSS));
    }

    #[test]
    fn test_wrapped_without_css() {
        let doc = Document::new(true, "");
        assert!(doc.header.starts_with("<!DOCTYPE HTML PUBLIC"));
        assert!(doc.header.contains("<html>\n  <head>\n  </head>\n  <body>\n"));
        assert!(!doc.header.contains("<style"));
        assert_eq!(doc.footer, "  </body>\n</html>\n");
        assert_eq!(doc.indent, 4);
    }

    #[test]
    fn test_wrapped_with_css() {
        let doc = Document::new(true, "td.tnum { width: 3em; }\n");
        assert!(doc.header.contains(
            "    <style type=\"text/css\">\ntd { line-height: 20px; }\nth { line-height: 12px; }\ntd.tnum { width: 3em; }\n\n    </style>\n"
        ));
        assert!(doc.header.ends_with("  </head>\n  <body>\n"));
    }

    #[test]
    fn test_load_stylesheet() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("styles.css");
        fs::write(&path, "body{color:red}").unwrap();
        assert_eq!(load_stylesheet(&path).unwrap(), "body{color:red}");
    }

    #[test]
    fn test_missing_stylesheet() {
        let dir = tempdir().unwrap();
        let err = load_stylesheet(dir.path().join("missing.css")).unwrap_err();
        assert!(matches!(err, QetError::StylesheetRead { .. }));
        assert!(err.to_string().contains("missing.css"));
    }
}
