//! Machine api-key header extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;

/// Service api key carried in `x-shipway-api-key`.
///
/// Used on machine-to-machine endpoints (registration, login check, admin
/// user listing) that the auth edge calls directly. Extraction only reads
/// the header; the equality check against the configured key happens in the
/// handler, which also answers 401 on mismatch.
#[derive(Debug, Clone)]
pub struct ApiKeyHeader {
    pub api_key: String,
}

impl<S> FromRequestParts<S> for ApiKeyHeader
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // Same E0195 workaround as `IdentityHeaders`: read headers synchronously,
    // return a 'static future.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let api_key = parts
            .headers
            .get("x-shipway-api-key")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_owned());

        async move {
            let api_key = api_key.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self { api_key })
        }
    }
}
