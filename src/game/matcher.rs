//! Answer checking

/// Whether a submitted answer recovers the target word
///
/// Comparison ignores case and surrounding whitespace. A blank submission never matches.
///
/// # Examples
/// ```
/// use word_scramble::game::matches;
///
/// assert!(matches("Cat", "cat"));
/// assert!(matches("  CAT\n", "cat"));
/// assert!(!matches("", "cat"));
/// assert!(!matches("act", "cat"));
/// ```
#[must_use]
pub fn matches(submitted: &str, target: &str) -> bool {
    let submitted = submitted.trim();
    !submitted.is_empty() && submitted.to_lowercase() == target.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match() {
        assert!(matches("glacier", "glacier"));
    }

    #[test]
    fn any_case_variant_matches() {
        for variant in ["cat", "CAT", "Cat", "cAt", "caT"] {
            assert!(matches(variant, "cat"), "{variant} should match");
        }
        assert!(matches("cat", "CAT"));
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert!(matches(" cat ", "cat"));
        assert!(matches("\tcat\n", "cat"));
    }

    #[test]
    fn blank_never_matches() {
        assert!(!matches("", "cat"));
        assert!(!matches("   ", "cat"));
        assert!(!matches("", ""));
    }

    #[test]
    fn anagram_is_not_a_match() {
        assert!(!matches("act", "cat"));
        assert!(!matches("tac", "cat"));
    }

    #[test]
    fn inner_whitespace_is_significant() {
        assert!(!matches("c at", "cat"));
    }

    #[test]
    fn non_ascii_case_folding() {
        assert!(matches("ÉTÉ", "été"));
    }
}
