use std::sync::Arc;

use async_trait::async_trait;
use docfinder_api_types::{AnalysisResponse, SearchRequest};

use crate::error::AppResult;

/// Anything that can turn a search request into an analysis response.
///
/// Errors returned here are transport or decode failures only. A response carrying an
/// `error` field is still an `Ok`; deciding what that means is up to the caller.
#[async_trait(?Send)]
pub trait AnalysisApi {
    async fn analyze(&self, request: &SearchRequest) -> AppResult<AnalysisResponse>;
}

/// Shared handle put into the reactive context so components can reach the api.
#[derive(Clone)]
pub struct AnalysisClient(pub Arc<dyn AnalysisApi + Send + Sync>);

impl AnalysisClient {
    pub fn new(api: impl AnalysisApi + Send + Sync + 'static) -> Self {
        Self(Arc::new(api))
    }
}

/// Posts to a fixed endpoint as JSON.
#[derive(Clone, Debug)]
pub struct HttpAnalysisApi {
    endpoint: String,
}

impl HttpAnalysisApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

/// The body is decoded whatever the status code was, error responses still carry JSON.
fn decode_response(body: &str) -> AppResult<AnalysisResponse> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl AnalysisApi for HttpAnalysisApi {
    async fn analyze(&self, request: &SearchRequest) -> AppResult<AnalysisResponse> {
        let body = gloo_net::http::Request::post(&self.endpoint)
            .json(request)?
            .send()
            .await?
            .text()
            .await?;
        decode_response(&body)
    }
}

/// Outside the browser the endpoint has to be an absolute url.
#[cfg(not(feature = "hydrate"))]
#[async_trait(?Send)]
impl AnalysisApi for HttpAnalysisApi {
    async fn analyze(&self, request: &SearchRequest) -> AppResult<AnalysisResponse> {
        use reqwest::header::CONTENT_TYPE;

        let body = reqwest::Client::new()
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_string(request)?)
            .send()
            .await?
            .text()
            .await?;
        decode_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, SystemError};

    #[test]
    fn decodes_error_bodies_as_responses() {
        let response = decode_response(r#"{"error":"District not supported"}"#).unwrap();
        assert_eq!(response.domain_error(), Some("District not supported"));
    }

    #[test]
    fn bad_gateway_body_from_the_server_is_a_domain_error() {
        // what the server sends back with a 502 when the analysis service is down
        let body = r#"{"error":"The analysis service is unavailable right now. Please try again later."}"#;
        let response = decode_response(body).unwrap();
        let err = AppError::Domain(response.domain_error().unwrap().to_string());
        assert_eq!(
            err.user_message(),
            "The analysis service is unavailable right now. Please try again later."
        );
    }

    #[test]
    fn non_json_body_is_a_system_error() {
        let err = decode_response("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, AppError::SystemError(SystemError::Json(_))));
    }
}
