//! Axum route handlers for the Matching API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::compare::{analyze, MatchReport};
use crate::similarity::strategy::{StrategyInfo, StrategyKind};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub resume_text: String,
    pub jd_text: String,
    /// Strategy name; the configured default when absent.
    #[serde(default)]
    pub strategy: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    pub comparison_id: Uuid,
    #[serde(flatten)]
    pub report: MatchReport,
    pub compared_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct StrategiesResponse {
    pub default: StrategyKind,
    pub strategies: Vec<StrategyInfo>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/compare
///
/// Scores pasted resume text against a job description.
/// Empty or token-less input is not an error: it scores 0.
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<ComparisonResponse>, AppError> {
    let response = run_comparison(
        &state,
        &request.resume_text,
        &request.jd_text,
        request.strategy.as_deref(),
    )?;
    Ok(Json(response))
}

/// POST /api/v1/compare/upload
///
/// Multipart form: `resume` (PDF file), `jd_text`, optional `strategy`.
/// The resume is extracted to text first; an unreadable PDF fails the request.
pub async fn handle_compare_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ComparisonResponse>, AppError> {
    let mut resume: Option<Bytes> = None;
    let mut jd_text: Option<String> = None;
    let mut strategy: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, "Malformed multipart body"))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("resume") => {
                resume = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| multipart_error(e, "Could not read resume upload"))?,
                );
            }
            Some("jd_text") => {
                jd_text = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| multipart_error(e, "Could not read jd_text"))?,
                );
            }
            Some("strategy") => {
                strategy = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| multipart_error(e, "Could not read strategy"))?,
                );
            }
            _ => {}
        }
    }

    let resume =
        resume.ok_or_else(|| AppError::Validation("Missing 'resume' file field".to_string()))?;
    let jd_text =
        jd_text.ok_or_else(|| AppError::Validation("Missing 'jd_text' field".to_string()))?;

    let resume_text = state.extractor.extract(resume).await?;

    let response = run_comparison(&state, &resume_text, &jd_text, strategy.as_deref())?;
    Ok(Json(response))
}

/// GET /api/v1/strategies
pub async fn handle_list_strategies(State(state): State<AppState>) -> Json<StrategiesResponse> {
    Json(StrategiesResponse {
        default: state.strategies.default_kind(),
        strategies: state.strategies.describe(),
    })
}

/// Body-limit overruns surface as 413; every other multipart failure is a 400.
fn multipart_error(err: MultipartError, context: &str) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("{context}: upload exceeds the size limit"))
    } else {
        AppError::Validation(format!("{context}: {err}"))
    }
}

fn run_comparison(
    state: &AppState,
    resume_text: &str,
    jd_text: &str,
    strategy: Option<&str>,
) -> Result<ComparisonResponse, AppError> {
    let strategy = state.strategies.resolve(strategy)?;
    let report = analyze(
        resume_text,
        jd_text,
        strategy.as_ref(),
        &state.config.tier_thresholds,
        state.config.keyword_limit,
    );

    let comparison_id = Uuid::new_v4();
    info!(
        %comparison_id,
        strategy = %report.comparison.strategy,
        resume_tokens = report.resume_tokens,
        jd_tokens = report.jd_tokens,
        score = report.comparison.score_percent,
        tier = ?report.comparison.tier,
        "Comparison scored"
    );

    Ok(ComparisonResponse {
        comparison_id,
        report,
        compared_at: Utc::now(),
    })
}
