use axum::extract::{Multipart, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::extract_text;
use crate::ranking::ranker::Ranker;
use crate::ranking::results::{
    filter_by_threshold, pair_with_names, sort_descending, to_csv, ScoredResume,
};
use crate::state::AppState;

/// One resume in a JSON ranking request. Requests carry resumes as an array
/// (not a map) so the caller's ordering survives JSON transport.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeDocument {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub job_description: String,
    #[serde(default)]
    pub resumes: Vec<ResumeDocument>,
    /// Inclusive minimum score; candidates below it are dropped. Default 0.0
    /// (keep everyone).
    pub threshold: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub rankings: Vec<ScoredResume>,
}

#[derive(Debug, Deserialize)]
pub struct UploadParams {
    pub threshold: Option<f64>,
}

/// Extracted text echoed back from the upload endpoint, so callers can audit
/// what the ranker actually saw for each PDF.
#[derive(Debug, Serialize)]
pub struct ExtractedResume {
    pub resume: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct UploadRankResponse {
    pub rankings: Vec<ScoredResume>,
    pub extracted_texts: Vec<ExtractedResume>,
}

/// POST /api/v1/rankings
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(req): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    let rankings = rank_and_present(
        state.ranker.as_ref(),
        &req.job_description,
        &req.resumes,
        req.threshold,
    )?;
    Ok(Json(RankResponse { rankings }))
}

/// POST /api/v1/rankings/csv
pub async fn handle_rank_csv(
    State(state): State<AppState>,
    Json(req): Json<RankRequest>,
) -> Result<Response, AppError> {
    let rankings = rank_and_present(
        state.ranker.as_ref(),
        &req.job_description,
        &req.resumes,
        req.threshold,
    )?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"resume_rankings.csv\"",
            ),
        ],
        to_csv(&rankings),
    )
        .into_response())
}

/// POST /api/v1/rankings/upload
///
/// Multipart form: exactly one `job_description` text field, plus any number
/// of PDF file fields. File order in the form is the ranking input order.
pub async fn handle_upload(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    mut multipart: Multipart,
) -> Result<Json<UploadRankResponse>, AppError> {
    let mut job_description: Option<String> = None;
    let mut resumes: Vec<ResumeDocument> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        let field_name = field.name().map(str::to_string);
        if field_name.as_deref() == Some("job_description") {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::Validation(format!("Unreadable job description: {e}")))?;
            job_description = Some(text);
            continue;
        }

        let name = field
            .file_name()
            .map(str::to_string)
            .or(field_name)
            .ok_or_else(|| AppError::Validation("Unnamed upload field".to_string()))?;
        let data: Bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Unreadable upload '{name}': {e}")))?;

        let text = extract_text(&name, &data);
        resumes.push(ResumeDocument { name, text });
    }

    let job_description = job_description
        .ok_or_else(|| AppError::Validation("Missing 'job_description' field".to_string()))?;

    let rankings = rank_and_present(
        state.ranker.as_ref(),
        &job_description,
        &resumes,
        params.threshold,
    )?;
    let extracted_texts = resumes
        .into_iter()
        .map(|r| ExtractedResume {
            resume: r.name,
            text: r.text,
        })
        .collect();

    Ok(Json(UploadRankResponse {
        rankings,
        extracted_texts,
    }))
}

/// Shared pipeline behind every ranking endpoint: score, sort descending
/// (stable), apply the inclusive threshold.
fn rank_and_present(
    ranker: &dyn Ranker,
    job_description: &str,
    resumes: &[ResumeDocument],
    threshold: Option<f64>,
) -> Result<Vec<ScoredResume>, AppError> {
    let threshold = threshold.unwrap_or(0.0);
    if !(0.0..=1.0).contains(&threshold) {
        return Err(AppError::Validation(format!(
            "threshold must be within [0.0, 1.0], got {threshold}"
        )));
    }

    let names: Vec<String> = resumes.iter().map(|r| r.name.clone()).collect();
    let texts: Vec<String> = resumes.iter().map(|r| r.text.clone()).collect();

    let scores = ranker.rank(job_description, &texts);

    let mut rankings = pair_with_names(&names, &scores);
    sort_descending(&mut rankings);
    Ok(filter_by_threshold(rankings, threshold))
}
