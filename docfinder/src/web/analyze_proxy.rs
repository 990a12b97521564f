use axum::{
    body::Bytes,
    extract::State,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use tracing::{info, instrument};

use super::error::ProxyError;

/// The analysis service `/api/analyze` gets forwarded to.
#[derive(Clone, Debug)]
pub(crate) struct Upstream {
    client: reqwest::Client,
    analyze_url: String,
}

impl Upstream {
    pub(crate) fn new(analyze_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            analyze_url: analyze_url.into(),
        }
    }
}

/// Relays the search body as is and hands back whatever status and body the service answered with.
#[instrument(skip(upstream, body))]
pub(crate) async fn analyze(
    State(upstream): State<Upstream>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let response = upstream
        .client
        .post(&upstream.analyze_url)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;
    let status = response.status();
    let body = response.bytes().await?;
    info!(%status, "analysis service responded");
    Ok((status, [(CONTENT_TYPE, "application/json")], body).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::error::UPSTREAM_UNAVAILABLE;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        routing::post,
        Json, Router,
    };
    use tower::ServiceExt;

    /// Stands in for the analysis service: echoes the district back as an error for "Nowhere".
    async fn fake_analyzer(Json(request): Json<serde_json::Value>) -> Response {
        if request["district"] == "Nowhere" {
            return Json(serde_json::json!({ "error": "District not supported" })).into_response();
        }
        Json(serde_json::json!({
            "specialization": "Neurology",
            "analysis": format!("Based on: {}", request["symptoms"].as_str().unwrap_or_default()),
            "doctors": [{ "name": "Dr. Ahmed", "specialization": "Neurology", "hospital": "Labaid", "district": "Dhaka", "rating": 4.6 }]
        }))
        .into_response()
    }

    async fn spawn_analyzer() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().route("/api/analyze", post(fake_analyzer));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/api/analyze")
    }

    fn proxy(analyze_url: String) -> Router {
        Router::new()
            .route("/api/analyze", post(analyze))
            .with_state(Upstream::new(analyze_url))
    }

    async fn post_search(router: Router, body: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::post("/api/analyze")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn forwards_the_search_and_relays_the_answer() {
        let router = proxy(spawn_analyzer().await);
        let (status, body) = post_search(
            router,
            r#"{"symptoms":"migraine","district":"Dhaka","language":"en"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["specialization"], "Neurology");
        assert_eq!(body["analysis"], "Based on: migraine");
        assert_eq!(body["doctors"][0]["name"], "Dr. Ahmed");
    }

    #[tokio::test]
    async fn domain_errors_pass_through_untouched() {
        let router = proxy(spawn_analyzer().await);
        let (status, body) = post_search(
            router,
            r#"{"symptoms":"fever","district":"Nowhere","language":"en"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["error"], "District not supported");
    }

    #[tokio::test]
    async fn unreachable_service_is_a_bad_gateway_with_an_error_body() {
        // nothing listens on the discard port
        let router = proxy("http://127.0.0.1:9/api/analyze".to_string());
        let (status, body) = post_search(
            router,
            r#"{"symptoms":"fever","district":"Dhaka","language":"en"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], UPSTREAM_UNAVAILABLE);
    }
}
