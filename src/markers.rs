//! Sentinel markers and low-level tokenization shared by the narrative and
//! scope extractors.
//!
//! The generation prompt asks the model to fence its two output sections with
//! these literal markers. They are a convention, not a guarantee: responses
//! drift, so every helper here returns an `Option` instead of indexing.

/// Opens the adjuster-facing report body.
pub const NARRATIVE_START: &str = "---NARRATIVE START---";
/// Closes the adjuster-facing report body.
pub const NARRATIVE_END: &str = "---NARRATIVE END---";
/// Opens the pipe-delimited line-item table.
pub const SCOPE_START: &str = "---SCOPE START---";
/// Closes the pipe-delimited line-item table.
pub const SCOPE_END: &str = "---SCOPE END---";

/// Header token the model sometimes echoes back as a table row.
pub(crate) const SCOPE_HEADER_TOKEN: &str = "selector";

/// Returns the region strictly between `start` and `end`.
///
/// The end marker is searched for only *after* the start marker, so a
/// reordered pair (`end` before `start`) reads the same as a missing one.
pub(crate) fn section_between<'a>(raw: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let after_start = raw.find(start)? + start.len();
    let body = &raw[after_start..];
    let before_end = body.find(end)?;
    Some(&body[..before_end])
}

/// Strips one cosmetic border pipe from each side of a table row.
///
/// Model output oscillates between `A | B | C` and `| A | B | C |`; the
/// border pipes carry no cell content and must not produce empty fields.
pub(crate) fn strip_border_pipes(row: &str) -> &str {
    let row = row.strip_prefix('|').unwrap_or(row);
    row.strip_suffix('|').unwrap_or(row)
}

/// Splits a row into trimmed fields on `|`.
pub(crate) fn split_fields(row: &str) -> Vec<&str> {
    row.split('|').map(str::trim).collect()
}

/// True when the first field of a row is a header echo ("Selector") or a
/// markdown separator (a run of dashes), neither of which is data.
pub(crate) fn is_header_or_separator(first_field: &str) -> bool {
    let lowered = first_field.to_ascii_lowercase();
    if lowered.contains(SCOPE_HEADER_TOKEN) {
        return true;
    }
    if first_field.contains("---") {
        return true;
    }
    !first_field.is_empty() && first_field.chars().all(|c| c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_between_well_formed() {
        let raw = "prefix ---A--- middle ---B--- suffix";
        assert_eq!(section_between(raw, "---A---", "---B---"), Some(" middle "));
    }

    #[test]
    fn test_section_between_missing_markers() {
        assert_eq!(section_between("no markers here", "---A---", "---B---"), None);
        assert_eq!(section_between("---A--- only start", "---A---", "---B---"), None);
        assert_eq!(section_between("only end ---B---", "---A---", "---B---"), None);
    }

    #[test]
    fn test_section_between_reordered_markers() {
        let raw = "---B--- backwards ---A---";
        assert_eq!(section_between(raw, "---A---", "---B---"), None);
    }

    #[test]
    fn test_strip_border_pipes() {
        assert_eq!(strip_border_pipes("|a|b|c|"), "a|b|c");
        assert_eq!(strip_border_pipes("a|b|c"), "a|b|c");
        assert_eq!(strip_border_pipes("|a|b|c"), "a|b|c");
        assert_eq!(strip_border_pipes("||"), "");
    }

    #[test]
    fn test_header_and_separator_detection() {
        assert!(is_header_or_separator("Selector"));
        assert!(is_header_or_separator("selector"));
        assert!(is_header_or_separator("---"));
        assert!(is_header_or_separator("-----"));
        assert!(is_header_or_separator("--"));
        assert!(!is_header_or_separator("WTR"));
        assert!(!is_header_or_separator("DRY-1/2"));
        assert!(!is_header_or_separator(""));
    }
}
