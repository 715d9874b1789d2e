//! SQL for the two terminal queries.
//!
//! Terminals are stored as elements labelled `"<block>:<number>"`. Both
//! queries share the same base filter and label decomposition; they differ in
//! grouping. The block summary groups by block prefix, the terminal detail
//! groups by the full label.
//!
//! Builders here are pure: they return a [`Query`] value and never touch a
//! connection.

/// View exposing element labels with their folio and position.
pub const ELEMENT_VIEW: &str = "element_nomenclature_view";

/// Block prefix of the label (text before the first colon).
const BLOCK_EXPR: &str = r#"substr("label", 1, instr("label", ':') - 1)"#;

/// Terminal number of the label. Non-numeric suffixes coerce to 0.
const NUMBER_EXPR: &str = r#"CAST(substr("label", instr("label", ':') + 1) AS INTEGER)"#;

/// `"<folio>-<position>"` of each mention, joined per group.
const POSITIONS_EXPR: &str = r#"group_concat("folio" || '-' || "position", ', ')"#;

/// Restricts rows to terminal elements carrying a block label.
const BASE_FILTER: &str = r#""element_type" = 'terminal' AND "label" LIKE '%:%'"#;

/// A SQL statement together with its positional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Statement text, parameters numbered `?1`, `?2`, ...
    pub sql: String,
    /// Values bound to the numbered parameters, in order
    pub params: Vec<String>,
}

/// Query yielding one row per block:
/// `(tblock, maxtnum, mentions, fpositions)`, ordered by block.
pub fn block_summary_query() -> Query {
    let sql = format!(
        r#"SELECT
    {BLOCK_EXPR} AS "tblock",
    MAX({NUMBER_EXPR}) AS "maxtnum",
    COUNT(*) AS "mentions",
    {POSITIONS_EXPR} AS "fpositions"
FROM "{ELEMENT_VIEW}" AS "t"
WHERE {BASE_FILTER}
GROUP BY "tblock"
ORDER BY "tblock" ASC"#
    );

    Query {
        sql,
        params: Vec::new(),
    }
}

/// Query yielding one row per distinct terminal label:
/// `(tblock, tnum, mentions, fpositions)`, ordered by block then number.
///
/// `mentions` is a correlated count over every row of the view sharing the
/// exact label. It ignores both the terminal filter and `block`, so it
/// reports the label's total across the whole project.
///
/// When `block` is given the rows are narrowed to that block, with the block
/// id bound as a parameter.
pub fn terminal_detail_query(block: Option<&str>) -> Query {
    let mut params = Vec::new();
    let mut filter = BASE_FILTER.to_string();
    if let Some(block) = block {
        params.push(block.to_string());
        filter.push_str(&format!(" AND {BLOCK_EXPR} = ?{}", params.len()));
    }

    let sql = format!(
        r#"SELECT
    {BLOCK_EXPR} AS "tblock",
    {NUMBER_EXPR} AS "tnum",
    ( SELECT COUNT(*) FROM "{ELEMENT_VIEW}" AS "ct"
      WHERE "ct"."label" = "t"."label" ) AS "mentions",
    {POSITIONS_EXPR} AS "fpositions"
FROM "{ELEMENT_VIEW}" AS "t"
WHERE {filter}
GROUP BY "label"
ORDER BY "tblock" ASC, "tnum" ASC"#
    );

    Query { sql, params }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_summary_has_no_params() {
        let query = block_summary_query();
        assert!(query.params.is_empty());
        assert!(query.sql.contains(r#"GROUP BY "tblock""#));
        assert!(query.sql.contains(r#"ORDER BY "tblock" ASC"#));
    }

    #[test]
    fn test_detail_without_block_filter() {
        let query = terminal_detail_query(None);
        assert!(query.params.is_empty());
        assert!(!query.sql.contains("?1"));
        assert!(query.sql.contains(r#"GROUP BY "label""#));
    }

    #[test]
    fn test_detail_binds_block() {
        let query = terminal_detail_query(Some("X1"));
        assert_eq!(query.params, vec!["X1".to_string()]);
        assert!(query.sql.contains("= ?1"));
        // The block id is bound, never spliced into the text
        assert!(!query.sql.contains("X1"));
    }

    #[test]
    fn test_correlated_count_is_unfiltered() {
        let query = terminal_detail_query(Some("X1"));
        let start = query.sql.find("( SELECT COUNT(*)").unwrap();
        let end = query.sql[start..].find(") AS \"mentions\"").unwrap() + start;
        let subquery = &query.sql[start..end];
        assert!(!subquery.contains("?1"));
        assert!(!subquery.contains("element_type"));
    }

    #[test]
    fn test_builders_are_pure() {
        assert_eq!(block_summary_query(), block_summary_query());
        assert_eq!(terminal_detail_query(Some("A")), terminal_detail_query(Some("A")));
    }
}
