//! Role prediction from a skill set

use crate::processing::catalog::RoleProfiles;
use crate::processing::skills::SkillSet;
use std::collections::HashSet;

pub const GENERAL_PROFESSIONAL: &str = "General Professional";

/// The role whose indicative skills overlap most with `skills`.
///
/// Skills compare case-insensitively. Equal overlaps go to the role declared
/// first; no overlap at all yields [`GENERAL_PROFESSIONAL`].
pub fn predict_role(skills: &SkillSet, roles: &RoleProfiles) -> String {
    let owned: HashSet<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    let mut best: Option<(&str, usize)> = None;
    for role in roles.iter() {
        let overlap = role
            .skills
            .iter()
            .map(|s| s.to_lowercase())
            .collect::<HashSet<_>>()
            .intersection(&owned)
            .count();

        // strictly greater, so earlier declarations win ties
        if overlap > best.map_or(0, |(_, n)| n) {
            best = Some((role.name.as_str(), overlap));
        }
    }

    best.map_or_else(|| GENERAL_PROFESSIONAL.to_string(), |(name, _)| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::catalog::RoleProfile;

    fn skills(names: &[&str]) -> SkillSet {
        names.iter().copied().collect()
    }

    fn roles(entries: &[(&str, &[&str])]) -> RoleProfiles {
        RoleProfiles::new(
            entries
                .iter()
                .map(|(name, skills)| RoleProfile {
                    name: name.to_string(),
                    skills: skills.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_largest_overlap_wins() {
        let fixture = roles(&[
            ("Frontend Developer", &["JavaScript", "React", "CSS"]),
            ("Data Scientist", &["Python", "SQL", "Pandas", "NumPy"]),
            ("Backend Developer", &["Python", "Django"]),
        ]);

        assert_eq!(
            predict_role(&skills(&["Python", "SQL", "Pandas"]), &fixture),
            "Data Scientist"
        );
    }

    #[test]
    fn test_ties_go_to_first_declared() {
        let fixture = roles(&[
            ("Backend Developer", &["Python", "Django"]),
            ("Data Scientist", &["Python", "Pandas"]),
        ]);
        assert_eq!(predict_role(&skills(&["Python"]), &fixture), "Backend Developer");
    }

    #[test]
    fn test_no_overlap_is_general_professional() {
        let fixture = roles(&[("Data Scientist", &["Python"])]);
        assert_eq!(predict_role(&skills(&["Excel"]), &fixture), GENERAL_PROFESSIONAL);
        assert_eq!(predict_role(&SkillSet::new(), &fixture), GENERAL_PROFESSIONAL);
        assert_eq!(
            predict_role(&skills(&["Python"]), &RoleProfiles::new(Vec::new())),
            GENERAL_PROFESSIONAL
        );
    }

    #[test]
    fn test_default_profiles() {
        let defaults = RoleProfiles::default();
        assert_eq!(
            predict_role(&skills(&["Python", "SQL", "Pandas"]), &defaults),
            "Data Scientist"
        );
        assert_eq!(
            predict_role(&skills(&["pandas", "python", "sql"]), &defaults),
            "Data Scientist"
        );
        assert_eq!(
            predict_role(&skills(&["Docker", "Kubernetes", "AWS"]), &defaults),
            "DevOps Engineer"
        );
    }
}
