//! Scope Table Extractor: turns the pipe-delimited block of a raw model
//! response into an ordered list of estimating line items.
//!
//! The table format is requested by the prompt but not machine-enforced, so
//! the extractor is maximally permissive on malformed input and maximally
//! precise in rejecting non-data rows. A false-positive row corrupts a cost
//! estimate a human will act on; a dropped noisy row costs nothing.

use crate::markers::{
    is_header_or_separator, section_between, split_fields, strip_border_pipes, SCOPE_END,
    SCOPE_START,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// A single estimating line item.
///
/// All three fields are free text: `quantity` keeps units and values exactly
/// as authored (e.g. `"500 SF"`), since downstream editors and the renderer
/// treat it as an opaque expression.
///
/// The serialized names (`code`/`desc`/`qty`) are the record shape the
/// editable scope table exchanges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeItem {
    /// Estimating-system selector code, e.g. `WTR EXT`.
    pub code: String,
    /// Free-text description of the work.
    #[serde(rename = "desc")]
    pub description: String,
    /// Free-text quantity expression, units included.
    #[serde(rename = "qty")]
    pub quantity: String,
}

/// Extracts scope line items from a raw model response, in order of
/// appearance.
///
/// Returns an empty list when the scope block is absent or unterminated; a
/// malformed block is a recoverable condition, never an error. Rows are
/// dropped when they carry no pipe, fewer than three fields, a header echo,
/// or a markdown separator; fields beyond the third are ignored.
pub fn extract_scope_items(raw: &str) -> Vec<ScopeItem> {
    let Some(block) = section_between(raw, SCOPE_START, SCOPE_END) else {
        debug!("scope markers absent or unterminated, returning empty scope");
        return Vec::new();
    };

    let items: Vec<ScopeItem> = block.lines().filter_map(parse_row).collect();
    debug!("extracted {} scope line items", items.len());
    items
}

/// Parses one line of the scope block, or `None` when the line is not a data
/// row.
fn parse_row(line: &str) -> Option<ScopeItem> {
    let row = strip_border_pipes(line.trim());
    if !row.contains('|') {
        return None;
    }

    let fields = split_fields(row);
    if fields.len() < 3 {
        return None;
    }
    if is_header_or_separator(fields[0]) {
        return None;
    }

    Some(ScopeItem {
        code: fields[0].to_string(),
        description: fields[1].to_string(),
        quantity: fields[2].to_string(),
    })
}

/// Renders a scope table as `CODE - description` lines, one per item.
///
/// This is the compact form handed back to the model when auditing an
/// operator-edited scope for missing items.
pub fn scope_summary(items: &[ScopeItem]) -> String {
    items
        .iter()
        .map(|item| format!("{} - {}", item.code, item.description))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(code: &str, description: &str, quantity: &str) -> ScopeItem {
        ScopeItem {
            code: code.to_string(),
            description: description.to_string(),
            quantity: quantity.to_string(),
        }
    }

    #[test]
    fn test_well_formed_block() {
        let raw = "---SCOPE START---\nWTR|Extract water|500 SF\n---SCOPE END---";
        assert_eq!(
            extract_scope_items(raw),
            vec![item("WTR", "Extract water", "500 SF")]
        );
    }

    #[test]
    fn test_missing_start_marker_yields_empty() {
        let raw = "Narrative only, no table here.\n---SCOPE END---";
        assert!(extract_scope_items(raw).is_empty());
    }

    #[test]
    fn test_missing_end_marker_yields_empty() {
        let raw = "---SCOPE START---\nWTR|Extract water|500 SF\nno terminator follows";
        assert!(extract_scope_items(raw).is_empty());
    }

    #[test]
    fn test_header_and_separator_rows_are_dropped() {
        let raw = "---SCOPE START---\n\
                   Selector | Description | Qty\n\
                   --- | --- | ---\n\
                   DRY 1/2 | Hang drywall | 120 SF\n\
                   ---SCOPE END---";
        assert_eq!(
            extract_scope_items(raw),
            vec![item("DRY 1/2", "Hang drywall", "120 SF")]
        );
    }

    #[test]
    fn test_border_pipes_are_cosmetic() {
        let bare = "---SCOPE START---\nWTR|Extract water|500 SF\n---SCOPE END---";
        let bordered = "---SCOPE START---\n|WTR|Extract water|500 SF|\n---SCOPE END---";
        assert_eq!(extract_scope_items(bare), extract_scope_items(bordered));
    }

    #[test]
    fn test_short_rows_are_dropped() {
        let raw = "---SCOPE START---\nWTR|Extract water\nDRY|Hang drywall|120 SF\n---SCOPE END---";
        assert_eq!(
            extract_scope_items(raw),
            vec![item("DRY", "Hang drywall", "120 SF")]
        );
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let raw = "---SCOPE START---\nWTR|Extract water|500 SF|note|more\n---SCOPE END---";
        assert_eq!(
            extract_scope_items(raw),
            vec![item("WTR", "Extract water", "500 SF")]
        );
    }

    #[test]
    fn test_order_is_preserved() {
        let raw = "---SCOPE START---\n\
                   WTR|Extract water|500 SF\n\
                   DRY|Hang drywall|120 SF\n\
                   PNT|Seal and paint|120 SF\n\
                   ---SCOPE END---";
        let codes: Vec<String> = extract_scope_items(raw)
            .into_iter()
            .map(|i| i.code)
            .collect();
        assert_eq!(codes, vec!["WTR", "DRY", "PNT"]);
    }

    #[test]
    fn test_blank_lines_and_prose_are_dropped() {
        let raw = "---SCOPE START---\n\
                   \n\
                   Here is the preliminary scope:\n\
                   WTR | Extract water | 500 SF\n\
                   \n\
                   ---SCOPE END---";
        assert_eq!(
            extract_scope_items(raw),
            vec![item("WTR", "Extract water", "500 SF")]
        );
    }

    #[test]
    fn test_whitespace_is_trimmed_per_field() {
        let raw = "---SCOPE START---\n  WTR  |  Extract water  |  500 SF  \n---SCOPE END---";
        assert_eq!(
            extract_scope_items(raw),
            vec![item("WTR", "Extract water", "500 SF")]
        );
    }

    #[test]
    fn test_empty_block() {
        let raw = "---SCOPE START---\n---SCOPE END---";
        assert!(extract_scope_items(raw).is_empty());
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_string(&item("WTR", "Extract water", "500 SF")).unwrap();
        assert_eq!(
            json,
            r#"{"code":"WTR","desc":"Extract water","qty":"500 SF"}"#
        );
    }

    #[test]
    fn test_scope_summary_format() {
        let items = vec![
            item("WTR", "Extract water", "500 SF"),
            item("DRY", "Hang drywall", "120 SF"),
        ];
        assert_eq!(
            scope_summary(&items),
            "WTR - Extract water\nDRY - Hang drywall"
        );
    }
}
