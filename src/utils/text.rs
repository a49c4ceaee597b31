//! Small string helpers shared by the CPU and GPU parsers.

/// Effective length cap for brand, series and suffix fields.
pub const FIELD_CAP: usize = 9;

/// ASCII case-insensitive equality. Differing lengths never match.
pub fn case_equal(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.eq_ignore_ascii_case(b)
}

/// Lowercases ASCII letters; every other character passes through.
pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Keeps at most `max` characters.
pub fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Truncate to [`FIELD_CAP`] and lowercase.
pub fn bounded_lower(s: &str) -> String {
    to_lower(truncate(s, FIELD_CAP))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_equal() {
        assert!(case_equal("Intel", "intel"));
        assert!(case_equal("AMD", "amd"));
        assert!(!case_equal("intelx", "intel"));
        assert!(!case_equal("int", "intel"));
        assert!(case_equal("", ""));
    }

    #[test]
    fn test_to_lower_leaves_non_alpha() {
        assert_eq!(to_lower("RTX 4070-Ti!"), "rtx 4070-ti!");
        assert_eq!(to_lower("Ü"), "Ü");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("superduperlong", 9), "superdupe");
        assert_eq!(truncate("xt", 9), "xt");
        assert_eq!(truncate("ääääääääää", 9).chars().count(), 9);
        assert_eq!(bounded_lower("SUPERDUPERLONG"), "superdupe");
    }
}
