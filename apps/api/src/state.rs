use crate::screening::service::ScreeningService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Scorer selected at startup plus the run store.
    pub screening: ScreeningService,
}
