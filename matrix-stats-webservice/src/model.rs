use matrix_stats_core::{DenseMatrix, MatrixStats};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// Message returned whenever `Q` or `R` is missing from the request body.
pub const MISSING_MATRICES_MESSAGE: &str =
    "Faltan las matrices Q y/o R en el cuerpo de la solicitud";

// --- Request Models ---

// Q and R follow JavaScript truthiness: an absent key, `null`, `false`, `0` and `""`
// all mean "missing". `rotated` keeps absent and `null` apart so it can be echoed as sent.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
  "rotated": [[9.0, 9.0], [9.0, 9.0]],
  "Q": [[1.0, 0.0], [0.0, 1.0]],
  "R": [[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]]
}))]
pub struct AnalysisRequest {
    /// Rotated matrix produced upstream; echoed back without analysis.
    #[serde(default, deserialize_with = "present_or_null")]
    #[schema(value_type = Option<Vec<Vec<f64>>>)]
    pub rotated: Option<Option<DenseMatrix>>,
    #[serde(rename = "Q", default, deserialize_with = "matrix_unless_falsy")]
    #[validate(required)]
    #[schema(value_type = Option<Vec<Vec<f64>>>)]
    pub q: Option<DenseMatrix>,
    #[serde(rename = "R", default, deserialize_with = "matrix_unless_falsy")]
    #[validate(required)]
    #[schema(value_type = Option<Vec<Vec<f64>>>)]
    pub r: Option<DenseMatrix>,
}

/// Only called for keys that are present, so absent stays `None` via `default`.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<DenseMatrix>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<DenseMatrix>::deserialize(deserializer).map(Some)
}

fn matrix_unless_falsy<'de, D>(deserializer: D) -> Result<Option<DenseMatrix>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let falsy = match &value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    };
    if falsy {
        return Ok(None);
    }
    DenseMatrix::<f64>::deserialize(value)
        .map(Some)
        .map_err(D::Error::custom)
}

/// An [`AnalysisRequest`] whose `Q` and `R` are known to be present.
#[derive(Clone, Debug)]
pub struct ValidatedRequest {
    pub rotated: Option<Option<DenseMatrix>>,
    pub q: DenseMatrix,
    pub r: DenseMatrix,
}

impl AnalysisRequest {
    pub fn into_validated(self) -> Result<ValidatedRequest, ValidationErrors> {
        self.validate()?;
        match self {
            AnalysisRequest {
                rotated,
                q: Some(q),
                r: Some(r),
            } => Ok(ValidatedRequest { rotated, q, r }),
            _ => Err(ValidationErrors::new()),
        }
    }
}

// --- Response Models ---

// Mirrors matrix_stats_core::MatrixStats so the core crate stays free of OpenAPI concerns.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Largest element; `null` for an empty matrix.
    pub max: f64,
    /// Smallest element; `null` for an empty matrix.
    pub min: f64,
    pub sum: f64,
    /// `sum / element count`; `null` for an empty matrix.
    pub average: f64,
    pub is_diagonal: bool,
}

impl From<MatrixStats> for StatsResponse {
    fn from(stats: MatrixStats) -> Self {
        StatsResponse {
            max: stats.max,
            min: stats.min,
            sum: stats.sum,
            average: stats.average,
            is_diagonal: stats.is_diagonal,
        }
    }
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct AnalysisResponse {
    /// Omitted when the request had no `rotated` key, `null` when it was sent as `null`.
    #[serde(rename = "RotatedMatrix", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Vec<f64>>>)]
    pub rotated_matrix: Option<Option<DenseMatrix>>,
    #[serde(rename = "QStats")]
    pub q_stats: StatsResponse,
    #[serde(rename = "RStats")]
    pub r_stats: StatsResponse,
    #[serde(rename = "QMatrix")]
    #[schema(value_type = Vec<Vec<f64>>)]
    pub q_matrix: DenseMatrix,
    #[serde(rename = "RMatrix")]
    #[schema(value_type = Vec<Vec<f64>>)]
    pub r_matrix: DenseMatrix,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details),
        }
    }
}
