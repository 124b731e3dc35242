/// Grammars write "only where the previous match ended" as an alternation between the
/// start of line and `\G`. The native search can't express it when we search from an
/// arbitrary offset, so the scanner retries those patterns on the text sliced at the
/// start position.
///
/// Only these two exact spellings are recognised: `((^)|\G)` or `(?:^|\G)` are not.
const CONTIGUOUS_ANCHOR_PREFIXES: [&str; 2] = ["(^|\\G)", "(\\G|^)"];

pub(crate) fn is_contiguous_anchor(pattern: &str) -> bool {
    CONTIGUOUS_ANCHOR_PREFIXES
        .iter()
        .any(|prefix| pattern.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_both_spellings() {
        assert!(is_contiguous_anchor("(^|\\G)b"));
        assert!(is_contiguous_anchor("(\\G|^)\\s*(\\*)"));
    }

    #[test]
    fn ignores_other_forms() {
        assert!(!is_contiguous_anchor("b(^|\\G)"));
        assert!(!is_contiguous_anchor("(?:^|\\G)b"));
        assert!(!is_contiguous_anchor("\\Gb"));
        assert!(!is_contiguous_anchor("^b"));
        assert!(!is_contiguous_anchor(""));
    }
}
