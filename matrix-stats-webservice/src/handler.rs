use crate::{
    error::AppError,
    extract::LenientJson,
    model::{AnalysisRequest, AnalysisResponse, ErrorResponse as ModelErrorResponse},
};

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use matrix_stats_core::{compute_stats, DenseMatrix, Matrix};

/// Per-router settings shared with every request.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Reject empty or ragged Q/R matrices with a 400 instead of analysing them.
    pub strict_shape: bool,
}

#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalysisRequest,
    responses(
        (status = 200, description = "Statistics for Q and R, echoed alongside the input matrices.", body = AnalysisResponse),
        (status = 400, description = "Q and/or R missing, body is not a JSON matrix payload, or (strict mode) a matrix is empty or ragged.", body = ModelErrorResponse)
    ),
    tag = "Matrix Analysis"
)]
pub async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<LenientJson<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let LenientJson(payload) = payload.map_err(|rejection| {
        tracing::warn!(target: "matrix_stats_webservice::handler", "Rejected request body: {}", rejection.body_text());
        AppError::from(rejection)
    })?;

    let request = payload.into_validated().map_err(|errors| {
        tracing::warn!(target: "matrix_stats_webservice::handler", "Request is missing Q and/or R: {}", errors);
        AppError::from(errors)
    })?;
    tracing::info!(
        target: "matrix_stats_webservice::handler",
        "Received analysis request: Q has {} rows, R has {} rows, rotated present: {}",
        request.q.row_count(),
        request.r.row_count(),
        request.rotated.is_some()
    );

    if state.strict_shape {
        check_shape("Q", &request.q)?;
        check_shape("R", &request.r)?;
    }

    let q_stats = compute_stats(&request.q);
    let r_stats = compute_stats(&request.r);
    tracing::debug!(target: "matrix_stats_webservice::handler", "Q stats: {:?}, R stats: {:?}", q_stats, r_stats);

    Ok(Json(AnalysisResponse {
        rotated_matrix: request.rotated,
        q_stats: q_stats.into(),
        r_stats: r_stats.into(),
        q_matrix: request.q,
        r_matrix: request.r,
    }))
}

fn check_shape(name: &'static str, matrix: &DenseMatrix) -> Result<(), AppError> {
    matrix.check_shape().map(|_| ()).map_err(|source| {
        tracing::warn!(target: "matrix_stats_webservice::handler", "Matrix {} rejected in strict mode: {}", name, source);
        AppError::InvalidShape {
            matrix: name,
            source,
        }
    })
}
