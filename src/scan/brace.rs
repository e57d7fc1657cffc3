//! Balanced-brace matching.

/// Find the closing brace that balances the `{` at byte index `open`.
///
/// Scans forward keeping a depth counter and returns the index where the
/// depth returns to zero, or `None` when the text ends first (truncated or
/// malformed declaration — callers skip it). Character-level scan only:
/// braces inside string or comment literals are counted like any other.
pub fn match_brace(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth: i32 = 0;
    for (i, &b) in bytes.iter().enumerate().skip(open) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_body() {
        let text = "{ a: string; }";
        assert_eq!(match_brace(text, 0), Some(13));
    }

    #[test]
    fn nested_bodies() {
        let text = "{ a: { b: { c: 1 } } } trailing";
        assert_eq!(match_brace(text, 0), Some(21));
    }

    #[test]
    fn offset_open() {
        let text = "interface Foo { bar(): void }";
        assert_eq!(match_brace(text, 14), Some(28));
    }

    #[test]
    fn unterminated_returns_none() {
        assert_eq!(match_brace("{ a: { b: 1 }", 0), None);
        assert_eq!(match_brace("{", 0), None);
    }
}
