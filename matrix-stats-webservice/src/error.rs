use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use matrix_stats_core::MatrixStatsError;
use thiserror::Error;
use validator::ValidationErrors;

use crate::model::{ErrorResponse, MISSING_MATRICES_MESSAGE};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Q and/or R matrix missing from request body")]
    MissingMatrices(#[from] ValidationErrors),

    #[error("Request body rejected: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Matrix {matrix} has an invalid shape: {source}")]
    InvalidShape {
        matrix: &'static str,
        #[source]
        source: MatrixStatsError,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MissingMatrices(_) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(MISSING_MATRICES_MESSAGE),
            ),
            AppError::InvalidBody(rejection) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_details(
                    "El cuerpo de la solicitud no es un JSON de matrices válido",
                    vec![rejection.body_text()],
                ),
            ),
            AppError::InvalidShape { matrix, source } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_details(
                    format!("La matriz {} no es válida", matrix),
                    vec![source.to_string()],
                ),
            ),
        };

        (status, Json(body)).into_response()
    }
}
