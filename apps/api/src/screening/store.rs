//! Persistence of scoring runs.
//!
//! Append-only: runs are inserted and never updated.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::models::scoring_run::{NewScoringRun, ScoringRun};

#[async_trait]
pub trait ScoreStore: Send + Sync {
    async fn append(&self, run: NewScoringRun) -> Result<ScoringRun, sqlx::Error>;

    /// Most recent runs first, at most `limit`.
    async fn recent(&self, limit: i64) -> Result<Vec<ScoringRun>, sqlx::Error>;
}

pub struct PgScoreStore {
    pool: PgPool,
}

impl PgScoreStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScoreStore for PgScoreStore {
    async fn append(&self, run: NewScoringRun) -> Result<ScoringRun, sqlx::Error> {
        let row = sqlx::query_as::<_, ScoringRun>(
            r#"
            INSERT INTO scoring_runs (resume_text, job_description, score)
            VALUES ($1, $2, $3)
            RETURNING id, resume_text, job_description, score, created_at
            "#,
        )
        .bind(&run.resume_text)
        .bind(&run.job_description)
        .bind(run.score)
        .fetch_one(&self.pool)
        .await?;

        debug!("Recorded scoring run {} (score {})", row.id, row.score);
        Ok(row)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<ScoringRun>, sqlx::Error> {
        Ok(sqlx::query_as::<_, ScoringRun>(
            r#"
            SELECT id, resume_text, job_description, score, created_at
            FROM scoring_runs
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }
}

#[cfg(test)]
pub mod memory {
    //! In-memory store for handler and service tests.

    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;
    use tokio::sync::RwLock;

    use super::ScoreStore;
    use crate::models::scoring_run::{NewScoringRun, ScoringRun};

    #[derive(Default)]
    pub struct MemoryScoreStore {
        runs: RwLock<Vec<ScoringRun>>,
        fail_writes: AtomicBool,
    }

    impl MemoryScoreStore {
        pub fn failing() -> Self {
            let store = Self::default();
            store.fail_writes.store(true, Ordering::SeqCst);
            store
        }

        pub async fn len(&self) -> usize {
            self.runs.read().await.len()
        }
    }

    #[async_trait]
    impl ScoreStore for MemoryScoreStore {
        async fn append(&self, run: NewScoringRun) -> Result<ScoringRun, sqlx::Error> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(sqlx::Error::PoolClosed);
            }
            let mut runs = self.runs.write().await;
            let row = ScoringRun {
                id: runs.len() as i64 + 1,
                resume_text: run.resume_text,
                job_description: run.job_description,
                score: run.score,
                created_at: Utc::now(),
            };
            runs.push(row.clone());
            Ok(row)
        }

        async fn recent(&self, limit: i64) -> Result<Vec<ScoringRun>, sqlx::Error> {
            let runs = self.runs.read().await;
            let mut sorted: Vec<ScoringRun> = runs.clone();
            sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            sorted.truncate(limit.max(0) as usize);
            Ok(sorted)
        }
    }
}
