//! Resume scoring — pluggable scorer selected once at startup.
//!
//! Default: `HeuristicScorer` (keyword overlap + bonus, pure and deterministic).
//! Alternative: `ModelScorer`, used when a model artifact is present on disk.
//!
//! `AppState` holds an `Arc<dyn Scorer>`.

pub mod bonus;
pub mod heuristic;
pub mod keywords;
pub mod model;
pub mod vocabulary;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

pub use model::ModelScorer;

/// A scoring backend. Implementations must be pure: same inputs, same score.
pub trait Scorer: Send + Sync {
    /// Returns a score in [0.0, 100.0].
    fn score(&self, resume_text: &str, job_description: &str) -> f64;

    /// Short label for logs and diagnostics.
    fn backend(&self) -> &'static str;
}

pub struct HeuristicScorer;

impl Scorer for HeuristicScorer {
    fn score(&self, resume_text: &str, job_description: &str) -> f64 {
        heuristic::score(resume_text, job_description)
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

impl Scorer for ModelScorer {
    fn score(&self, resume_text: &str, job_description: &str) -> f64 {
        self.predict(resume_text, job_description)
    }

    fn backend(&self) -> &'static str {
        "model"
    }
}

/// Uses the model artifact at `model_path` if it exists, otherwise the heuristic.
///
/// A present but unloadable artifact is an error rather than a silent fallback.
pub fn select_scorer(model_path: &Path) -> Result<Arc<dyn Scorer>> {
    if model_path.is_file() {
        let model = ModelScorer::load(model_path)?;
        info!(
            "Using model scorer (artifact {}, version {})",
            model_path.display(),
            model.version()
        );
        Ok(Arc::new(model))
    } else {
        info!(
            "No model artifact at {}; using heuristic scorer",
            model_path.display()
        );
        Ok(Arc::new(HeuristicScorer))
    }
}
