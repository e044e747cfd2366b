use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

/// NFKC-normalize and lowercase, so "Ｒｅａｃｔ" and "react" compare equal.
fn fold(value: &str) -> String {
    value.nfkc().collect::<String>().to_lowercase()
}

/// Canonical form for a skill or keyword tag: NFKC, lowercased, trimmed.
pub fn normalize_tag(tag: &str) -> String {
    fold(tag).trim().to_string()
}

/// Normalized tag set for membership checks. Blank tags are dropped.
pub fn normalize_tag_set(tags: &[String]) -> HashSet<String> {
    tags.iter()
        .map(|tag| normalize_tag(tag))
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Case-insensitive substring check. An empty needle matches everything,
/// which is what lets an empty search term act as "no constraint".
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle = fold(needle.trim());
    if needle.is_empty() {
        return true;
    }
    fold(haystack).contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_tag_folds_case_and_whitespace() {
        assert_eq!(normalize_tag("  React "), "react");
        assert_eq!(normalize_tag("TypeScript"), "typescript");
        assert_eq!(normalize_tag("Ｒｅａｃｔ"), "react");
    }

    #[test]
    fn tag_set_drops_blank_entries() {
        let set = normalize_tag_set(&["Go".into(), "  ".into(), "go".into()]);
        assert_eq!(set.len(), 1);
        assert!(set.contains("go"));
    }

    #[test]
    fn contains_ci_is_case_insensitive() {
        assert!(contains_ci("Senior Frontend Developer", "frontend"));
        assert!(contains_ci("Austin, TX (Hybrid)", "austin, tx"));
        assert!(!contains_ci("Chicago, IL", "remote"));
    }

    #[test]
    fn empty_needle_matches_everything() {
        assert!(contains_ci("anything", ""));
        assert!(contains_ci("", "   "));
    }
}
