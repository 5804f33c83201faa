//! Learned-model scorer loaded from a JSON artifact.
//!
//! The artifact is a linear term model over the combined resume and job
//! description text:
//!
//! ```json
//! { "version": "2024-06-01", "intercept": 12.5, "weights": { "python": 8.0, "kubernetes": 4.5 } }
//! ```
//!
//! Prediction = intercept + Σ weight for every term present, clamped to [0, 100].

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    pub version: String,
    pub intercept: f64,
    pub weights: BTreeMap<String, f64>,
}

pub struct ModelScorer {
    version: String,
    intercept: f64,
    terms: Vec<(String, f64)>,
}

impl ModelScorer {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read model artifact {}", path.display()))?;
        let artifact: ModelArtifact = serde_json::from_str(&raw)
            .with_context(|| format!("Model artifact {} is not valid JSON", path.display()))?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        if artifact.weights.is_empty() {
            bail!("Model artifact '{}' has no term weights", artifact.version);
        }
        if !artifact.intercept.is_finite() || artifact.weights.values().any(|w| !w.is_finite()) {
            bail!("Model artifact '{}' contains non-finite weights", artifact.version);
        }

        let mut terms: Vec<(String, f64)> = Vec::with_capacity(artifact.weights.len());
        for (term, weight) in artifact.weights {
            let term = term.trim().to_lowercase();
            if term.is_empty() {
                continue;
            }
            match terms.iter_mut().find(|(t, _)| *t == term) {
                Some((_, w)) => *w += weight,
                None => terms.push((term, weight)),
            }
        }

        Ok(Self {
            version: artifact.version,
            intercept: artifact.intercept,
            terms,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn predict(&self, resume_text: &str, job_description: &str) -> f64 {
        let combined = format!("{resume_text} {job_description}").to_lowercase();
        let raw = self.intercept
            + self
                .terms
                .iter()
                .filter(|(term, _)| combined.contains(term.as_str()))
                .map(|(_, weight)| weight)
                .sum::<f64>();
        raw.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn artifact(intercept: f64, weights: &[(&str, f64)]) -> ModelArtifact {
        ModelArtifact {
            version: "test".to_string(),
            intercept,
            weights: weights
                .iter()
                .map(|(t, w)| (t.to_string(), *w))
                .collect(),
        }
    }

    #[test]
    fn test_predict_sums_present_terms() {
        let model =
            ModelScorer::from_artifact(artifact(10.0, &[("python", 20.0), ("rust", 30.0)])).unwrap();
        assert_eq!(model.predict("Python developer", "we need python"), 30.0);
        assert_eq!(model.predict("rust and python", "systems"), 60.0);
    }

    #[test]
    fn test_predict_is_clamped() {
        let model = ModelScorer::from_artifact(artifact(90.0, &[("python", 50.0), ("cobol", -200.0)]))
            .unwrap();
        assert_eq!(model.predict("python", ""), 100.0);
        assert_eq!(model.predict("cobol", ""), 0.0);
    }

    #[test]
    fn test_terms_are_lowercased_and_merged() {
        let model =
            ModelScorer::from_artifact(artifact(0.0, &[("Python", 5.0), ("python", 5.0)])).unwrap();
        assert_eq!(model.predict("PYTHON", ""), 10.0);
    }

    #[test]
    fn test_empty_weights_rejected() {
        assert!(ModelScorer::from_artifact(artifact(0.0, &[])).is_err());
    }

    #[test]
    fn test_non_finite_weights_rejected() {
        assert!(ModelScorer::from_artifact(artifact(f64::NAN, &[("python", 1.0)])).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"version": "v7", "intercept": 5.0, "weights": {{"sql": 15.0}}}}"#
        )
        .unwrap();
        let model = ModelScorer::load(file.path()).unwrap();
        assert_eq!(model.version(), "v7");
        assert_eq!(model.predict("sql", "sql"), 20.0);
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(ModelScorer::load(file.path()).is_err());
    }
}
