//! Reference data: the skill catalog, role profiles and stop words
//!
//! Built once at startup (from the defaults below or a TOML file) and only
//! read afterwards. The engine owns one [`ReferenceData`] and hands out
//! borrows to the individual pipeline steps.

use crate::error::{Result, ResumeMatcherError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

/// Category label → ordered canonical skill names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCatalog {
    categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub name: String,
    pub skills: Vec<String>,
}

/// Candidate roles in declaration order; the order breaks prediction ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleProfiles {
    roles: Vec<RoleProfile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StopWords {
    words: HashSet<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    pub catalog: SkillCatalog,
    pub roles: RoleProfiles,
    pub stop_words: StopWords,
}

/// On-disk layout; every section is optional and falls back to the defaults
#[derive(Debug, Deserialize)]
struct ReferenceFile {
    stop_words: Option<Vec<String>>,
    categories: Option<Vec<SkillCategory>>,
    roles: Option<Vec<RoleProfile>>,
}

impl SkillCatalog {
    pub fn new(categories: Vec<SkillCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    /// Every canonical skill once, in catalog order
    pub fn skills(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.categories
            .iter()
            .flat_map(|c| c.skills.iter())
            .map(String::as_str)
            .filter(|s| seen.insert(*s))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.skills().len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|c| c.skills.is_empty())
    }

    pub fn category_of(&self, skill: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.skills.iter().any(|s| s.eq_ignore_ascii_case(skill)))
            .map(|c| c.name.as_str())
    }

    /// A single-category catalog, handy for ad-hoc matching
    pub fn from_skills<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(vec![SkillCategory {
            name: "Custom".to_string(),
            skills: skills.into_iter().map(Into::into).collect(),
        }])
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        let category = |name: &str, skills: &[&str]| SkillCategory {
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        };

        Self::new(vec![
            category(
                "Engineering",
                &["Python", "Java", "C++", "C#", "JavaScript", "TypeScript", "Rust", "SQL"],
            ),
            category(
                "Web Development",
                &[
                    "HTML", "CSS", "React", "Angular", "Vue", "Node.js", "Django", "Flask",
                    "FastAPI", "REST",
                ],
            ),
            category(
                "Databases",
                &["PostgreSQL", "MySQL", "MongoDB", "NoSQL", "Redis"],
            ),
            category(
                "Cloud/DevOps",
                &[
                    "Docker", "Kubernetes", "AWS", "Azure", "GCP", "CI/CD", "Git", "GitHub",
                    "Terraform", "Linux",
                ],
            ),
            category(
                "Data Science & AI",
                &[
                    "Machine Learning", "Deep Learning", "Data Science", "NLP",
                    "Computer Vision", "scikit-learn", "Pandas", "NumPy", "Matplotlib",
                    "Seaborn", "TensorFlow", "PyTorch",
                ],
            ),
            category("Business Intelligence", &["Excel", "Power BI", "Tableau"]),
            category(
                "Soft Skills",
                &["Communication", "Teamwork", "Leadership", "Agile", "Scrum"],
            ),
        ])
    }
}

impl RoleProfiles {
    pub fn new(roles: Vec<RoleProfile>) -> Self {
        Self { roles }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleProfile> {
        self.roles.iter()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl Default for RoleProfiles {
    fn default() -> Self {
        let role = |name: &str, skills: &[&str]| RoleProfile {
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        };

        Self::new(vec![
            role(
                "Data Scientist",
                &[
                    "Python", "SQL", "Pandas", "NumPy", "scikit-learn", "Machine Learning",
                    "Deep Learning", "Data Science", "TensorFlow", "PyTorch", "Matplotlib",
                    "Seaborn", "NLP", "Computer Vision",
                ],
            ),
            role(
                "Backend Developer",
                &[
                    "Python", "Java", "C++", "C#", "Rust", "Node.js", "Django", "Flask",
                    "FastAPI", "REST", "SQL", "PostgreSQL", "MySQL", "MongoDB", "Redis",
                ],
            ),
            role(
                "Frontend Developer",
                &["JavaScript", "TypeScript", "HTML", "CSS", "React", "Angular", "Vue"],
            ),
            role(
                "DevOps Engineer",
                &[
                    "Docker", "Kubernetes", "AWS", "Azure", "GCP", "CI/CD", "Terraform",
                    "Linux", "Git", "GitHub",
                ],
            ),
            role(
                "Data Analyst",
                &["SQL", "Excel", "Power BI", "Tableau", "Pandas", "Python"],
            ),
            role(
                "Project Manager",
                &["Agile", "Scrum", "Leadership", "Communication", "Teamwork"],
            ),
        ])
    }
}

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Expects an already lower-cased word
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new([
            "a", "about", "above", "after", "again", "against", "all", "also", "am", "an",
            "and", "any", "are", "as", "at", "be", "because", "been", "before", "being",
            "below", "between", "both", "but", "by", "can", "could", "did", "do", "does",
            "doing", "down", "during", "each", "etc", "few", "for", "from", "further", "had",
            "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how", "i",
            "if", "in", "including", "into", "is", "it", "its", "itself", "just", "looking",
            "may", "me", "more", "most", "must", "my", "no", "nor", "not", "now", "of",
            "off", "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own",
            "same", "she", "should", "so", "some", "such", "than", "that", "the", "their",
            "theirs", "them", "then", "there", "these", "they", "this", "those", "through",
            "to", "too", "under", "until", "up", "using", "very", "was", "we", "well",
            "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will",
            "with", "within", "would", "you", "your", "yours",
        ])
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            catalog: SkillCatalog::default(),
            roles: RoleProfiles::default(),
            stop_words: StopWords::default(),
        }
    }
}

impl ReferenceData {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| match e {
            ResumeMatcherError::Configuration(msg) => ResumeMatcherError::Configuration(format!(
                "{}: {}",
                path.display(),
                msg
            )),
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let file: ReferenceFile = toml::from_str(content).map_err(|e| {
            ResumeMatcherError::Configuration(format!("Failed to parse reference data: {}", e))
        })?;

        let defaults = Self::default();
        let data = Self {
            catalog: file.categories.map(SkillCatalog::new).unwrap_or(defaults.catalog),
            roles: file.roles.map(RoleProfiles::new).unwrap_or(defaults.roles),
            stop_words: file.stop_words.map(StopWords::new).unwrap_or(defaults.stop_words),
        };

        if data.catalog.is_empty() {
            return Err(ResumeMatcherError::Configuration(
                "skill catalog has no skills".to_string(),
            ));
        }

        Ok(data)
    }
}
