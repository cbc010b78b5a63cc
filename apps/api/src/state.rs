use std::sync::Arc;

use crate::analysis::report::NarrativeReporter;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The narrative collaborator sits behind a trait object so tests can swap in
/// a mock without touching handler code.
#[derive(Clone)]
pub struct AppState {
    pub reporter: Arc<dyn NarrativeReporter>,
}
