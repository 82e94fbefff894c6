//! Screening pipeline: one job description against a batch of uploaded resumes.
//!
//! Flow per run:
//! 1. Extract job skills once.
//! 2. For each upload, in order: pick the extractor by extension, extract text,
//!    extract skills, derive the name, score against the job skills.
//! 3. Rank the results (score desc, upload order asc).
//!
//! Unsupported files are always skipped with a warning. Extraction failures
//! follow `FailurePolicy` for PDF and TXT alike.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::models::candidate::CandidateResult;
use crate::screening::extraction::{DocumentKind, ExtractionError};
use crate::screening::name::candidate_name;
use crate::screening::ranking::{rank, RankedCandidate};
use crate::screening::scoring::{match_score, matching_skills};
use crate::screening::skills::{SkillExtractor, SkillSet};

/// A resume file as received from the upload form.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content: Bytes,
}

impl ResumeUpload {
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// What to do when a supported file cannot be turned into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Record a warning and continue with the rest of the batch.
    #[default]
    Skip,
    /// Fail the whole run.
    Abort,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Skip => f.write_str("skip"),
            FailurePolicy::Abort => f.write_str("abort"),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(FailurePolicy::Skip),
            "abort" => Ok(FailurePolicy::Abort),
            other => Err(format!("expected 'skip' or 'abort', got '{other}'")),
        }
    }
}

#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("Please provide a job description and upload at least one resume.")]
    MissingInput,

    #[error("Failed to extract text from {file_name}: {source}")]
    Extraction {
        file_name: String,
        #[source]
        source: ExtractionError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    UnsupportedFileType,
    ExtractionFailed,
}

/// A user-visible, non-fatal problem with one upload.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningWarning {
    pub kind: WarningKind,
    pub file_name: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    pub screening_id: Uuid,
    pub screened_at: DateTime<Utc>,
    pub job_skills: SkillSet,
    pub candidates: Vec<RankedCandidate>,
    pub warnings: Vec<ScreeningWarning>,
}

/// Screens every upload against the job description and returns the ranked results.
pub fn screen(
    job_description: &str,
    uploads: &[ResumeUpload],
    extractor: &SkillExtractor,
    policy: FailurePolicy,
) -> Result<ScreeningReport, ScreeningError> {
    if job_description.trim().is_empty() || uploads.is_empty() {
        return Err(ScreeningError::MissingInput);
    }

    let screening_id = Uuid::new_v4();
    let span = info_span!("screening", %screening_id);
    let _guard = span.enter();

    let job_skills = extractor.extract(job_description);
    info!(
        uploads = uploads.len(),
        job_skills = job_skills.len(),
        %policy,
        "Screening started"
    );

    let mut results = Vec::with_capacity(uploads.len());
    let mut warnings = Vec::new();

    for (upload_index, upload) in uploads.iter().enumerate() {
        let Some(kind) = DocumentKind::from_file_name(&upload.file_name) else {
            warn!(file_name = %upload.file_name, "Skipping unsupported file type");
            warnings.push(ScreeningWarning {
                kind: WarningKind::UnsupportedFileType,
                file_name: upload.file_name.clone(),
                message: format!("Skipping unsupported file type: {}", upload.file_name),
            });
            continue;
        };

        let text = match kind.extractor().extract(&upload.content) {
            Ok(text) => text,
            Err(source) => match policy {
                FailurePolicy::Abort => {
                    warn!(file_name = %upload.file_name, error = %source, "Extraction failed, aborting");
                    return Err(ScreeningError::Extraction {
                        file_name: upload.file_name.clone(),
                        source,
                    });
                }
                FailurePolicy::Skip => {
                    warn!(file_name = %upload.file_name, error = %source, "Extraction failed, skipping");
                    warnings.push(ScreeningWarning {
                        kind: WarningKind::ExtractionFailed,
                        file_name: upload.file_name.clone(),
                        message: format!("Skipping {}: {source}", upload.file_name),
                    });
                    continue;
                }
            },
        };

        let result = evaluate_resume(upload_index, &upload.file_name, &text, &job_skills, extractor);
        info!(
            file_name = %result.file_name,
            score = result.match_score,
            matched = result.matching_skills.len(),
            "Candidate screened"
        );
        results.push(result);
    }

    let candidates = rank(results, job_skills.len());
    info!(
        screened = candidates.len(),
        skipped = warnings.len(),
        "Screening complete"
    );

    Ok(ScreeningReport {
        screening_id,
        screened_at: Utc::now(),
        job_skills,
        candidates,
        warnings,
    })
}

fn evaluate_resume(
    upload_index: usize,
    file_name: &str,
    text: &str,
    job_skills: &SkillSet,
    extractor: &SkillExtractor,
) -> CandidateResult {
    let resume_skills = extractor.extract(text);
    CandidateResult {
        candidate_name: candidate_name(text),
        file_name: file_name.to_string(),
        match_score: match_score(&resume_skills, job_skills),
        matching_skills: matching_skills(&resume_skills, job_skills),
        upload_index,
    }
}
