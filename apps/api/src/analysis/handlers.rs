//! Axum route handlers for the analysis API.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::analysis::criteria::Role;
use crate::analysis::extract::extract_text_from_pdf;
use crate::analysis::report::{analyze_cv, AnalysisReport};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeParams {
    /// Newline-separated job requirements.
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "consultant".to_string()
}

/// POST /analyze
///
/// Multipart upload: field `file` carries the CV document. Requirements and
/// role selection come in as query parameters; the role defaults to
/// consultant.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let file = read_file_field(&mut multipart).await?;
    let cv_text = extract_text_from_pdf(&file)?;

    let requirements = parse_requirements(params.requirements.as_deref());
    let role = Role::parse(&params.role);

    info!(
        "analyzing CV: {} bytes, {} requirements, role {}",
        file.len(),
        requirements.len(),
        role.as_str()
    );

    let report = analyze_cv(state.reporter.as_ref(), &cv_text, &requirements, role).await;
    Ok(Json(report))
}

/// Reads the uploaded document from the `file` multipart field.
async fn read_file_field(multipart: &mut Multipart) -> Result<Vec<u8>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            return Ok(bytes.to_vec());
        }
    }

    Err(AppError::Validation(
        "Missing 'file' field in multipart body".to_string(),
    ))
}

/// Splits the newline-separated requirements string, dropping blank lines.
fn parse_requirements(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
