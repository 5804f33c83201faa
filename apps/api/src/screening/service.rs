use std::sync::Arc;

use tracing::info;

use crate::errors::AppError;
use crate::models::scoring_run::{NewScoringRun, ScoreResult, ScoringInput, ScoringRun};
use crate::scoring::heuristic::round_to_tenth;
use crate::scoring::Scorer;
use crate::screening::store::ScoreStore;

/// Number of runs returned by the history endpoint.
pub const HISTORY_LIMIT: i64 = 50;

/// Scores a resume with the configured backend and records the run.
#[derive(Clone)]
pub struct ScreeningService {
    scorer: Arc<dyn Scorer>,
    store: Arc<dyn ScoreStore>,
}

impl ScreeningService {
    pub fn new(scorer: Arc<dyn Scorer>, store: Arc<dyn ScoreStore>) -> Self {
        Self { scorer, store }
    }

    pub fn backend(&self) -> &'static str {
        self.scorer.backend()
    }

    pub async fn score(&self, input: ScoringInput) -> Result<ScoreResult, AppError> {
        let score = round_to_tenth(
            self.scorer
                .score(&input.resume_text, &input.job_description)
                .clamp(0.0, 100.0),
        );

        let run = self
            .store
            .append(NewScoringRun {
                resume_text: input.resume_text,
                job_description: input.job_description,
                score,
            })
            .await?;

        info!(
            "Scored run {} with {} backend: {score}",
            run.id,
            self.scorer.backend()
        );
        Ok(ScoreResult { score })
    }

    pub async fn history(&self) -> Result<Vec<ScoringRun>, AppError> {
        Ok(self.store.recent(HISTORY_LIMIT).await?)
    }
}
