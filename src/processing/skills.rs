//! Skill extraction against the catalog

use crate::error::{Result, ResumeMatcherError};
use crate::processing::catalog::SkillCatalog;
use crate::processing::document::normalize;
use regex::RegexSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strsim::jaro_winkler;

/// Canonical skill names found in one document, iterated in sorted order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, skill: impl Into<String>) -> bool {
        self.0.insert(skill.into())
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn intersection(&self, other: &SkillSet) -> SkillSet {
        SkillSet(self.0.intersection(&other.0).cloned().collect())
    }

    /// Skills in `self` that `other` lacks
    pub fn difference(&self, other: &SkillSet) -> SkillSet {
        SkillSet(self.0.difference(&other.0).cloned().collect())
    }

    pub fn union(&self, other: &SkillSet) -> SkillSet {
        SkillSet(self.0.union(&other.0).cloned().collect())
    }
}

impl<S: Into<String>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        SkillSet(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The catalog compiled into one case-insensitive pattern set.
///
/// Each skill is escaped and wrapped so the characters on either side of a
/// match must be non-word characters or the edge of the text: "Java" does
/// not fire inside "JavaScript", and "C++" needs both plus signs.
pub struct SkillMatcher {
    patterns: RegexSet,
    skills: Vec<String>,
}

impl SkillMatcher {
    pub fn new(catalog: &SkillCatalog) -> Result<Self> {
        let skills: Vec<String> = catalog.skills().into_iter().map(str::to_string).collect();
        let patterns = skills.iter().map(|skill| skill_pattern(skill));

        let patterns = RegexSet::new(patterns).map_err(|e| {
            ResumeMatcherError::Processing(format!("Failed to build skill matcher: {}", e))
        })?;

        Ok(Self { patterns, skills })
    }

    pub fn extract(&self, text: &str) -> SkillSet {
        let normalized = normalize(text);
        self.patterns
            .matches(&normalized)
            .into_iter()
            .map(|idx| self.skills[idx].clone())
            .collect()
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }
}

fn skill_pattern(skill: &str) -> String {
    format!(r"(?i)(?:^|\W){}(?:\W|$)", regex::escape(skill))
}

/// One-shot extraction; build a [`SkillMatcher`] when matching repeatedly
pub fn extract_skills(text: &str, catalog: &SkillCatalog) -> Result<SkillSet> {
    Ok(SkillMatcher::new(catalog)?.extract(text))
}

/// A resume phrase that looks like a variant or misspelling of a missing skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearMiss {
    pub skill: String,
    pub found: String,
    pub similarity: f64,
}

/// Candidates whose length is further than this from the skill's are ignored
const MAX_LENGTH_DELTA: usize = 3;

/// For each missing skill, the closest resume phrase when its Jaro-Winkler
/// similarity reaches `threshold`.
///
/// Phrases have the skill's word count. A multi-word skill is also compared,
/// with its spaces removed, against single words, so "PowerBI" is offered
/// for "Power BI".
pub fn suggest_near_misses(missing: &SkillSet, resume_text: &str, threshold: f64) -> Vec<NearMiss> {
    let words: Vec<String> = resume_text
        .split_whitespace()
        .map(clean_token)
        .filter(|w| !w.is_empty())
        .collect();

    let mut suggestions = Vec::new();
    for skill in missing {
        let skill_lower = skill.to_lowercase();
        let width = skill_lower.split_whitespace().count().max(1);

        let phrases = words
            .windows(width)
            .map(|window| (window.join(" "), skill_lower.clone()));
        let compact = (width > 1)
            .then(|| skill_lower.split_whitespace().collect::<String>())
            .into_iter()
            .flat_map(|target| words.iter().map(move |word| (word.clone(), target.clone())));

        let best = phrases
            .chain(compact)
            .filter(|(phrase, target)| {
                phrase.chars().count() >= 3
                    && *phrase != skill_lower
                    && length_delta(phrase, target) <= MAX_LENGTH_DELTA
            })
            .map(|(phrase, target)| {
                let similarity = jaro_winkler(&phrase, &target);
                (phrase, similarity)
            })
            .fold(None::<(String, f64)>, |best, candidate| match best {
                Some(ref b) if b.1 >= candidate.1 => best,
                _ => Some(candidate),
            });

        if let Some((found, similarity)) = best {
            if similarity >= threshold {
                suggestions.push(NearMiss {
                    skill: skill.clone(),
                    found,
                    similarity,
                });
            }
        }
    }

    suggestions
}

fn length_delta(a: &str, b: &str) -> usize {
    a.chars().count().abs_diff(b.chars().count())
}

fn clean_token(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric() && c != '+' && c != '#')
        .to_lowercase()
}
