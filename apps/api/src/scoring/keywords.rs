//! Keyword extraction from a job description and per-category match ratios.

use serde::{Deserialize, Serialize};

use crate::scoring::vocabulary::{EDUCATION_TERMS, EXPERIENCE_TERMS, SKILL_TERMS};

/// The three fixed keyword categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Skills,
    Experience,
    Education,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Skills, Category::Experience, Category::Education];

    pub fn vocabulary(self) -> &'static [&'static str] {
        match self {
            Category::Skills => SKILL_TERMS,
            Category::Experience => EXPERIENCE_TERMS,
            Category::Education => EDUCATION_TERMS,
        }
    }
}

/// Returns the vocabulary terms that occur anywhere in `text`, in vocabulary order.
///
/// `text` must already be lowercased. Matching is plain substring containment,
/// so "java" is found inside "javascript".
pub fn extract_keywords(text: &str, vocabulary: &'static [&'static str]) -> Vec<&'static str> {
    vocabulary
        .iter()
        .copied()
        .filter(|term| text.contains(term))
        .collect()
}

/// Keywords from `keywords` that occur in `resume`. `resume` must be lowercased.
pub fn matched_keywords<'a>(resume: &str, keywords: &[&'a str]) -> Vec<&'a str> {
    keywords
        .iter()
        .copied()
        .filter(|kw| resume.contains(kw))
        .collect()
}

/// Fraction of `keywords` found in `resume`, or 0.0 for an empty keyword set.
pub fn match_ratio(resume: &str, keywords: &[&str]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    let matched = keywords.iter().filter(|kw| resume.contains(*kw)).count();
    matched as f64 / keywords.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_preserves_vocabulary_order() {
        let jd = "sql and docker required, python a plus";
        let found = extract_keywords(jd, SKILL_TERMS);
        assert_eq!(found, vec!["python", "sql", "docker"]);
    }

    #[test]
    fn test_extract_does_not_duplicate_repeated_terms() {
        let jd = "python python python";
        assert_eq!(extract_keywords(jd, SKILL_TERMS), vec!["python"]);
    }

    #[test]
    fn test_extract_blank_text_is_empty() {
        for category in Category::ALL {
            assert!(extract_keywords("", category.vocabulary()).is_empty());
            assert!(extract_keywords("   \n\t", category.vocabulary()).is_empty());
        }
    }

    #[test]
    fn test_extract_substring_matches_inside_words() {
        // "javascript" also yields "java"
        let found = extract_keywords("senior javascript engineer", SKILL_TERMS);
        assert_eq!(found, vec!["java", "javascript"]);
    }

    #[test]
    fn test_extract_multi_word_terms() {
        let found = extract_keywords("graduated magna cum laude", EDUCATION_TERMS);
        assert_eq!(found, vec!["graduated", "cum laude", "magna cum laude"]);
    }

    #[test]
    fn test_match_ratio_empty_keywords_is_zero() {
        assert_eq!(match_ratio("python sql docker", &[]), 0.0);
    }

    #[test]
    fn test_match_ratio_partial() {
        let ratio = match_ratio("i know python", &["python", "sql", "docker", "git"]);
        assert!((ratio - 0.25).abs() < f64::EPSILON, "Ratio was {ratio}");
    }

    #[test]
    fn test_match_ratio_full() {
        assert_eq!(match_ratio("python and sql", &["python", "sql"]), 1.0);
    }

    #[test]
    fn test_matched_keywords_subset_in_order() {
        let matched = matched_keywords("docker then python", &["python", "sql", "docker"]);
        assert_eq!(matched, vec!["python", "docker"]);
    }
}
