//! Heuristic resume/job-description compatibility score.
//!
//! Algorithm:
//! 1. Blank resume or job description → 0.0.
//! 2. Extract the skill, experience and education terms present in the JD.
//! 3. Per category, ratio = JD terms also found in the resume / JD terms (0.0 if none).
//! 4. base = 0.5*skills + 0.3*experience + 0.2*education
//! 5. bonus = length, achievement words, % and $ figures, capped at 0.30
//! 6. score = clamp((base + bonus) * 100, 0, 100), rounded to one decimal.

use serde::Serialize;

use crate::scoring::bonus::{compute_bonus, BonusBreakdown};
use crate::scoring::keywords::{extract_keywords, match_ratio, matched_keywords, Category};

#[derive(Debug, Clone, Serialize)]
pub struct CategoryWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            skills: 0.5,
            experience: 0.3,
            education: 0.2,
        }
    }
}

impl CategoryWeights {
    pub fn weight(&self, category: Category) -> f64 {
        match category {
            Category::Skills => self.skills,
            Category::Experience => self.experience,
            Category::Education => self.education,
        }
    }
}

/// Match result for one keyword category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryMatch {
    pub category: Category,
    /// Vocabulary terms found in the job description.
    pub active: Vec<&'static str>,
    /// Subset of `active` also found in the resume.
    pub matched: Vec<&'static str>,
    pub ratio: f64,
}

/// Full trace of one heuristic scoring call.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub categories: Vec<CategoryMatch>,
    pub base: f64,
    pub bonus: Option<BonusBreakdown>,
    pub score: f64,
}

impl ScoreBreakdown {
    fn blank() -> Self {
        Self {
            categories: vec![],
            base: 0.0,
            bonus: None,
            score: 0.0,
        }
    }

    #[cfg(test)]
    pub fn category(&self, category: Category) -> Option<&CategoryMatch> {
        self.categories.iter().find(|c| c.category == category)
    }
}

/// Scores `resume_text` against `job_description`. Always in [0.0, 100.0].
pub fn score(resume_text: &str, job_description: &str) -> f64 {
    evaluate(resume_text, job_description).score
}

/// Like [`score`], but returns every intermediate value.
pub fn evaluate(resume_text: &str, job_description: &str) -> ScoreBreakdown {
    evaluate_with_weights(resume_text, job_description, &CategoryWeights::default())
}

pub fn evaluate_with_weights(
    resume_text: &str,
    job_description: &str,
    weights: &CategoryWeights,
) -> ScoreBreakdown {
    if resume_text.trim().is_empty() || job_description.trim().is_empty() {
        return ScoreBreakdown::blank();
    }

    let resume = resume_text.to_lowercase();
    let jd = job_description.to_lowercase();

    let categories: Vec<CategoryMatch> = Category::ALL
        .into_iter()
        .map(|category| {
            let active = extract_keywords(&jd, category.vocabulary());
            let matched = matched_keywords(&resume, &active);
            let ratio = match_ratio(&resume, &active);
            CategoryMatch {
                category,
                active,
                matched,
                ratio,
            }
        })
        .collect();

    let base: f64 = categories
        .iter()
        .map(|c| weights.weight(c.category) * c.ratio)
        .sum();

    let bonus = compute_bonus(&resume, &jd);
    let total = ((base + bonus.total) * 100.0).clamp(0.0, 100.0);

    ScoreBreakdown {
        categories,
        base,
        bonus: Some(bonus),
        score: round_to_tenth(total),
    }
}

/// Rounds half away from zero to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
