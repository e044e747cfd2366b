use crate::normalize::normalize_tag_set;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatchResult {
    pub satisfied: bool,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub reason: String,
}

/// Conjunctive required-skill check: the entity must possess every requested
/// tag (case-insensitive exact match after normalization). An empty
/// requirement set imposes no constraint.
pub fn check_required_skills(required: &[String], possessed: &[String]) -> SkillMatchResult {
    let required_set = normalize_tag_set(required);
    if required_set.is_empty() {
        return SkillMatchResult {
            satisfied: true,
            matched: vec![],
            missing: vec![],
            reason: "no skill requirement".into(),
        };
    }

    let possessed_set = normalize_tag_set(possessed);

    let mut matched: Vec<_> = required_set
        .intersection(&possessed_set)
        .cloned()
        .collect();
    matched.sort();

    let mut missing: Vec<_> = required_set
        .difference(&possessed_set)
        .cloned()
        .collect();
    missing.sort();

    let satisfied = missing.is_empty();
    let reason = if satisfied {
        format!(
            "all {} required skill(s) present: {}",
            matched.len(),
            matched.join(", ")
        )
    } else {
        format!("missing required skill(s): {}", missing.join(", "))
    };

    SkillMatchResult {
        satisfied,
        matched,
        missing,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn empty_requirements_impose_no_constraint() {
        let result = check_required_skills(&[], &tags(&["Go"]));
        assert!(result.satisfied);
        assert!(result.matched.is_empty());
    }

    #[test]
    fn every_required_tag_must_be_present() {
        let result = check_required_skills(
            &tags(&["React", "TypeScript"]),
            &tags(&["react", "Next.js"]),
        );
        assert!(!result.satisfied);
        assert_eq!(result.matched, vec!["react"]);
        assert_eq!(result.missing, vec!["typescript"]);
        assert!(result.reason.contains("typescript"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = check_required_skills(&tags(&["PostgreSQL"]), &tags(&["postgresql"]));
        assert!(result.satisfied);
        assert_eq!(result.matched, vec!["postgresql"]);
    }

    #[test]
    fn blank_required_tags_are_ignored() {
        let result = check_required_skills(&tags(&["  ", "Go"]), &tags(&["Go"]));
        assert!(result.satisfied);
        assert_eq!(result.matched, vec!["go"]);
    }

    #[test]
    fn empty_possessed_set_fails_nonempty_requirements() {
        let result = check_required_skills(&tags(&["Rust"]), &[]);
        assert!(!result.satisfied);
        assert_eq!(result.missing, vec!["rust"]);
    }
}
