//! Renderers — pure functions from corpora to formatted documents.
//!
//! Every renderer is deterministic for identical input ordering and never
//! mutates its input. Sections are always emitted: empty input produces the
//! shared empty-state line rather than a missing section, because the index
//! document hard-links section anchors.

pub mod analysis;
pub mod api;
pub mod dom;
pub mod guide;
pub mod index;
pub mod styles;

/// Shared empty-state line for sections with nothing to list.
pub const NO_RESULTS: &str = "_No results._";

/// Append a bullet list, or the empty-state line when there is nothing to
/// list. Items arrive pre-formatted.
pub(crate) fn bullet_list(out: &mut String, items: &[String]) {
    if items.is_empty() {
        out.push_str(NO_RESULTS);
        out.push('\n');
    } else {
        for item in items {
            out.push_str("- ");
            out.push_str(item);
            out.push('\n');
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_list_renders_items() {
        let mut out = String::new();
        bullet_list(&mut out, &["`a`".to_string(), "`b`".to_string()]);
        assert_eq!(out, "- `a`\n- `b`\n\n");
    }

    #[test]
    fn bullet_list_empty_state() {
        let mut out = String::new();
        bullet_list(&mut out, &[]);
        assert_eq!(out, "_No results._\n\n");
    }
}
