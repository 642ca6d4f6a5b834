use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::{header, HeaderMap},
    Json,
};
use serde::de::DeserializeOwned;

/// JSON body extractor that reads a missing body the way a permissive JSON body
/// parser does: an empty body, or one sent without a JSON content type, yields
/// `T::default()` instead of a rejection. Malformed JSON is still rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state).await?;

        if !is_json || bytes.is_empty() {
            tracing::debug!(
                target: "matrix_stats_webservice::extract",
                "Body not parsed (json content type: {}, {} bytes), using defaults.",
                is_json,
                bytes.len()
            );
            return Ok(LenientJson(T::default()));
        }

        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(LenientJson(value))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
