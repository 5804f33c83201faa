//! Bonus signals for quantified, achievement-oriented resumes.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::scoring::vocabulary::ACHIEVEMENT_WORDS;

pub const MAX_BONUS: f64 = 0.30;

const LENGTH_BONUS: f64 = 0.10;
const MEDIUM_LENGTH_CHARS: usize = 500;
const LONG_LENGTH_CHARS: usize = 1000;
const ACHIEVEMENT_WORD_BONUS: f64 = 0.05;
const PERCENT_BONUS: f64 = 0.10;
const DOLLAR_BONUS: f64 = 0.10;

static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+%").expect("percent pattern is valid"));
static DOLLAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\d+").expect("dollar pattern is valid"));

/// Which bonus signals fired for a resume, and what they add up to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BonusBreakdown {
    pub length_bonus: f64,
    pub achievement_words: Vec<&'static str>,
    pub has_percentage: bool,
    pub has_dollar_amount: bool,
    /// Sum of all signals before the cap.
    pub raw: f64,
    /// `raw` capped at [`MAX_BONUS`].
    pub total: f64,
}

/// Computes the bonus for a lowercased resume.
///
/// The job description is accepted but no current rule reads it.
pub fn compute_bonus(resume: &str, _job_description: &str) -> BonusBreakdown {
    let length = resume.chars().count();
    let mut length_bonus = 0.0;
    if length > MEDIUM_LENGTH_CHARS {
        length_bonus += LENGTH_BONUS;
    }
    if length > LONG_LENGTH_CHARS {
        length_bonus += LENGTH_BONUS;
    }

    let achievement_words: Vec<&'static str> = ACHIEVEMENT_WORDS
        .iter()
        .copied()
        .filter(|word| resume.contains(word))
        .collect();

    let has_percentage = PERCENT_RE.is_match(resume);
    let has_dollar_amount = DOLLAR_RE.is_match(resume);

    let mut raw = length_bonus + achievement_words.len() as f64 * ACHIEVEMENT_WORD_BONUS;
    if has_percentage {
        raw += PERCENT_BONUS;
    }
    if has_dollar_amount {
        raw += DOLLAR_BONUS;
    }

    BonusBreakdown {
        length_bonus,
        achievement_words,
        has_percentage,
        has_dollar_amount,
        raw,
        total: raw.min(MAX_BONUS),
    }
}
