//! Axum route handlers for the Screening API.

use axum::{
    extract::{Multipart, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::screening::pipeline::{screen, ResumeUpload};
use crate::screening::ranking::render_markdown_table;
use crate::screening::skills::{MatchStrategy, SkillSet};
use crate::state::AppState;

const JOB_DESCRIPTION_FIELD: &str = "job_description";
const RESUMES_FIELD: &str = "resumes";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct VocabularyResponse {
    pub skills: Vec<String>,
    pub matching: MatchStrategy,
}

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: SkillSet,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Markdown,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScreeningQuery {
    #[serde(default)]
    pub format: OutputFormat,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/skills
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<VocabularyResponse> {
    Json(VocabularyResponse {
        skills: state.extractor.vocabulary().skills().to_vec(),
        matching: state.extractor.strategy(),
    })
}

/// POST /api/v1/skills/extract
///
/// Previews which vocabulary skills the extractor finds in a piece of text.
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(request): Json<ExtractSkillsRequest>,
) -> Json<ExtractSkillsResponse> {
    Json(ExtractSkillsResponse {
        skills: state.extractor.extract(&request.text),
    })
}

/// POST /api/v1/screenings
///
/// Multipart form: a `job_description` text field and one or more `resumes` file parts.
/// Returns the ranked candidates as JSON, or as a Markdown table with `?format=markdown`.
pub async fn handle_screen(
    State(state): State<AppState>,
    Query(query): Query<ScreeningQuery>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let limit = state.config.max_upload_bytes;
    let read_error = |e| AppError::from_multipart(e, limit);
    let mut job_description = String::new();
    let mut uploads = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(read_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(JOB_DESCRIPTION_FIELD) => {
                job_description = field.text().await.map_err(read_error)?;
            }
            Some(RESUMES_FIELD) => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content = field.bytes().await.map_err(read_error)?;
                debug!(file_name = %file_name, bytes = content.len(), "Received resume");
                uploads.push(ResumeUpload::new(file_name, content));
            }
            _ => {
                warn!(field = ?name, "Ignoring unknown multipart field");
            }
        }
    }

    let extractor = state.extractor.clone();
    let policy = state.config.failure_policy;
    let report = tokio::task::spawn_blocking(move || {
        screen(&job_description, &uploads, &extractor, policy)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Screening task failed: {e}")))??;

    Ok(match query.format {
        OutputFormat::Json => Json(report).into_response(),
        OutputFormat::Markdown => (
            [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
            render_markdown_table(&report),
        )
            .into_response(),
    })
}
