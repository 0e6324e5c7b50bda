//! Derived heuristics: years of experience, ATS formatting checks and keyword frequency
//!
//! Every function here is total: a missing pattern yields 0, false or an
//! empty list, never an error.

use crate::processing::catalog::StopWords;
use crate::processing::scoring::round2;
use crate::processing::skills::SkillSet;
use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

static YEARS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\+?\s*years?").expect("Invalid years regex"));

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("Invalid email regex")
});

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-. ]?)?\(?\d{3}\)?[-. ]?\d{3}[-. ]?\d{4}\b")
        .expect("Invalid phone regex")
});

static YEAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("Invalid year regex"));

static EDUCATION_KEYWORDS: Lazy<AhoCorasick> = Lazy::new(|| {
    keyword_matcher(&[
        "education", "university", "college", "degree", "bachelor", "bachelors", "master",
        "masters", "phd", "diploma", "b.sc", "m.sc", "b.tech", "m.tech", "mba",
    ])
});

static EXPERIENCE_KEYWORDS: Lazy<AhoCorasick> = Lazy::new(|| {
    keyword_matcher(&[
        "experience", "employment", "work history", "internship", "worked", "career",
    ])
});

static SKILLS_KEYWORDS: Lazy<AhoCorasick> = Lazy::new(|| {
    keyword_matcher(&["skills", "technical skills", "competencies", "technologies", "expertise"])
});

fn keyword_matcher(keywords: &[&str]) -> AhoCorasick {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostLongest)
        .build(keywords)
        .expect("Invalid keyword patterns")
}

/// True when any keyword occurs as a whole word
fn contains_keyword(matcher: &AhoCorasick, text: &str) -> bool {
    matcher.find_iter(text).any(|mat| {
        let before = text[..mat.start()].chars().next_back();
        let after = text[mat.end()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Years from the first "<n> years" / "<n>+ year" phrase, 0 when there is none
pub fn extract_years_experience(text: &str) -> u32 {
    YEARS_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|digits| digits.as_str().parse::<u32>().unwrap_or(u32::MAX))
        .unwrap_or(0)
}

pub fn experience_gap(job_years: u32, resume_years: u32) -> u32 {
    job_years.saturating_sub(resume_years)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsCheck {
    pub name: String,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsChecklist {
    pub checks: Vec<AtsCheck>,
    pub percentage: f64,
}

impl AtsChecklist {
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.checks.iter().find(|c| c.name == name).map(|c| c.passed)
    }
}

pub const CHECK_CONTACT: &str = "Contact Info";
pub const CHECK_EDUCATION: &str = "Education Section";
pub const CHECK_EXPERIENCE: &str = "Experience Section";
pub const CHECK_SKILLS: &str = "Skills Section";

/// Formatting checks an applicant tracking system typically relies on
pub fn ats_checklist(text: &str, skills: &SkillSet) -> AtsChecklist {
    let checks = vec![
        (
            CHECK_CONTACT,
            EMAIL_REGEX.is_match(text) || PHONE_REGEX.is_match(text),
        ),
        (CHECK_EDUCATION, contains_keyword(&EDUCATION_KEYWORDS, text)),
        (
            CHECK_EXPERIENCE,
            contains_keyword(&EXPERIENCE_KEYWORDS, text) || YEAR_REGEX.is_match(text),
        ),
        (
            CHECK_SKILLS,
            contains_keyword(&SKILLS_KEYWORDS, text) || !skills.is_empty(),
        ),
    ];

    let checks: Vec<AtsCheck> = checks
        .into_iter()
        .map(|(name, passed)| AtsCheck {
            name: name.to_string(),
            passed,
        })
        .collect();

    let passed = checks.iter().filter(|c| c.passed).count();
    let percentage = round2(passed as f64 / checks.len() as f64 * 100.0);

    AtsChecklist { checks, percentage }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

/// Most frequent words of at least `min_length` characters that are not
/// stop words. Ties keep the order in which words first appear.
pub fn keyword_frequency(
    text: &str,
    stop_words: &StopWords,
    min_length: usize,
    top_n: usize,
) -> Vec<KeywordCount> {
    let mut counts: Vec<KeywordCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for word in text.unicode_words() {
        let word = word.to_lowercase();
        if word.chars().count() < min_length || stop_words.contains(&word) {
            continue;
        }

        match index.get(&word) {
            Some(&idx) => counts[idx].count += 1,
            None => {
                index.insert(word.clone(), counts.len());
                counts.push(KeywordCount { word, count: 1 });
            }
        }
    }

    // stable sort keeps first-occurrence order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(top_n);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_of_experience() {
        assert_eq!(extract_years_experience("I have 3+ years of experience"), 3);
        assert_eq!(extract_years_experience("no years mentioned"), 0);
        assert_eq!(extract_years_experience("5 YEARS Rust, 10 years C"), 5);
        assert_eq!(extract_years_experience("1 year at Acme"), 1);
        assert_eq!(extract_years_experience("12years"), 12);
        assert_eq!(extract_years_experience("99999999999 years"), u32::MAX);
    }

    #[test]
    fn test_experience_gap_is_never_negative() {
        assert_eq!(experience_gap(5, 3), 2);
        assert_eq!(experience_gap(2, 5), 0);
        assert_eq!(experience_gap(0, 0), 0);
    }

    #[test]
    fn test_ats_half_of_checks() {
        let text = "jane@example.com\nExperience\nAcme Corp 2021 - present";
        let checklist = ats_checklist(text, &SkillSet::new());

        assert_eq!(checklist.passed(), 2);
        assert_eq!(checklist.percentage, 50.0);
        assert_eq!(checklist.get(CHECK_CONTACT), Some(true));
        assert_eq!(checklist.get(CHECK_EXPERIENCE), Some(true));
        assert_eq!(checklist.get(CHECK_EDUCATION), Some(false));
        assert_eq!(checklist.get(CHECK_SKILLS), Some(false));
    }

    #[test]
    fn test_ats_full_and_empty() {
        let text = "Call (555) 123-4567. Education: BSc. Work history at Acme. Skills: Rust";
        assert_eq!(ats_checklist(text, &SkillSet::new()).percentage, 100.0);

        let empty = ats_checklist("", &SkillSet::new());
        assert_eq!(empty.passed(), 0);
        assert_eq!(empty.percentage, 0.0);
        assert_eq!(empty.checks.len(), 4);
    }

    #[test]
    fn test_ats_skill_set_satisfies_skills_check() {
        let skills: SkillSet = ["Python"].into_iter().collect();
        let checklist = ats_checklist("Python", &skills);
        assert_eq!(checklist.get(CHECK_SKILLS), Some(true));
    }

    #[test]
    fn test_keywords_need_whole_words() {
        // "mastered" is not "master", "experienced" is not "experience"
        let checklist = ats_checklist("Mastered Rust, experienced engineer", &SkillSet::new());
        assert_eq!(checklist.get(CHECK_EDUCATION), Some(false));
        assert_eq!(checklist.get(CHECK_EXPERIENCE), Some(false));
    }

    #[test]
    fn test_keyword_frequency_ranking() {
        let stop_words = StopWords::default();
        let text = "Rust services. Python tooling, Rust APIs and Python scripts with Rust";
        let keywords = keyword_frequency(text, &stop_words, 4, 3);

        assert_eq!(
            keywords,
            vec![
                KeywordCount { word: "rust".to_string(), count: 3 },
                KeywordCount { word: "python".to_string(), count: 2 },
                KeywordCount { word: "services".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_keyword_frequency_filters() {
        let stop_words = StopWords::new(["with"]);
        let keywords = keyword_frequency("with with with SQL 2021 2021 data", &stop_words, 3, 10);

        let words: Vec<&str> = keywords.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["2021", "sql", "data"]);
        assert!(keyword_frequency("", &stop_words, 3, 10).is_empty());
        assert!(keyword_frequency("rust rust", &stop_words, 3, 0).is_empty());
    }

    #[test]
    fn test_keyword_frequency_counts_numbers() {
        let stop_words = StopWords::new(Vec::<&str>::new());
        let keywords = keyword_frequency("2021 2021 2021 rust", &stop_words, 4, 10);

        assert_eq!(
            keywords,
            vec![
                KeywordCount { word: "2021".to_string(), count: 3 },
                KeywordCount { word: "rust".to_string(), count: 1 },
            ]
        );
    }
}
