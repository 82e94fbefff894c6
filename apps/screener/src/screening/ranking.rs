//! Ranking & presentation of screened candidates.

use std::fmt::Write;

use serde::Serialize;

use crate::models::candidate::{join_skills, CandidateResult};
use crate::screening::pipeline::ScreeningReport;

/// One row of the rankings table plus the per-candidate analysis line.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    /// 1-based position after sorting.
    pub rank: usize,
    #[serde(flatten)]
    pub candidate: CandidateResult,
    pub analysis: String,
}

/// Sorts by match score descending, then upload order ascending.
pub fn rank(mut results: Vec<CandidateResult>, job_skill_count: usize) -> Vec<RankedCandidate> {
    results.sort_by(|a, b| {
        b.match_score
            .total_cmp(&a.match_score)
            .then_with(|| a.upload_index.cmp(&b.upload_index))
    });

    results
        .into_iter()
        .enumerate()
        .map(|(i, candidate)| RankedCandidate {
            rank: i + 1,
            analysis: analysis_line(&candidate, job_skill_count),
            candidate,
        })
        .collect()
}

fn analysis_line(candidate: &CandidateResult, job_skill_count: usize) -> String {
    if candidate.matching_skills.is_empty() {
        "No matching skills found.".to_string()
    } else {
        format!(
            "Matched {} of {} required skills.",
            candidate.matching_skills.len(),
            job_skill_count
        )
    }
}

/// Renders the report as a Markdown rankings table followed by any warnings.
pub fn render_markdown_table(report: &ScreeningReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "## Candidate Rankings\n");
    let _ = writeln!(out, "Job skills: {}\n", display_or_dash(&join_skills(&report.job_skills)));
    let _ = writeln!(
        out,
        "| Rank | Candidate Name | Match Score | File name | Matching Skills |"
    );
    let _ = writeln!(out, "|---:|---|---:|---|---|");

    for row in &report.candidates {
        let c = &row.candidate;
        let _ = writeln!(
            out,
            "| {} | {} | {:.2}% | {} | {} |",
            row.rank,
            escape_cell(&c.candidate_name),
            c.match_score,
            escape_cell(&c.file_name),
            escape_cell(display_or_dash(&c.matching_skills_display())),
        );
    }

    if !report.warnings.is_empty() {
        let _ = writeln!(out, "\n### Warnings\n");
        for warning in &report.warnings {
            let _ = writeln!(out, "- {}", warning.message);
        }
    }

    out
}

fn display_or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace(['\r', '\n'], " ")
}
