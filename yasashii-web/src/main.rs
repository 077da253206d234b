use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use yasashii::{FuriganaEngine, Renditions};
use yasashii_llm::{
    GroqProvider, LlmError, MockMode, MockSimplifier, SAMPLE_TEXTS, SampleText, Simplifier,
    simplify_and_render,
};

mod config;

use config::ServerConfig;

const TEXT_FILENAME: &str = "yasashii_nihongo.txt";
const HTML_FILENAME: &str = "yasashii_nihongo.html";

#[derive(Serialize, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

/// Provider failure carried to the client as `{error, kind}`
pub struct ApiError(LlmError);

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            LlmError::EmptyInput => StatusCode::BAD_REQUEST,
            LlmError::MissingApiKey | LlmError::Unauthorized(_) => StatusCode::SERVICE_UNAVAILABLE,
            LlmError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<LlmError> for ApiError {
    fn from(error: LlmError) -> Self {
        ApiError(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.0.to_string(),
            kind: self.0.kind().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<FuriganaEngine>,
    /// `None` when no API key is configured; translation then reports it
    pub simplifier: Option<Arc<dyn Simplifier>>,
}

impl AppState {
    pub fn new(engine: FuriganaEngine, simplifier: Option<Arc<dyn Simplifier>>) -> Self {
        Self {
            engine: Arc::new(engine),
            simplifier,
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/api/samples", get(list_samples))
        .route("/api/translate", post(translate_text))
        .route("/api/render", post(render_text))
        .route("/api/download/text", post(download_text))
        .route("/api/download/html", post(download_html))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let simplifier: Option<Arc<dyn Simplifier>> = if config.mock {
        info!("Using the echo mock simplifier");
        Some(Arc::new(MockSimplifier::new(MockMode::Echo)) as Arc<dyn Simplifier>)
    } else {
        match GroqProvider::from_env() {
            Ok(provider) => Some(Arc::new(provider) as Arc<dyn Simplifier>),
            Err(LlmError::MissingApiKey) => {
                warn!("GROQ_API_KEY is not set; /api/translate will answer 503");
                None
            }
            Err(e) => return Err(format!("Failed to initialize provider: {}", e).into()),
        }
    };

    let mut engine = FuriganaEngine::new();
    engine.with_line_height(config.line_height);
    let state = AppState::new(engine, simplifier);

    info!("Starting yasashii web server");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Server running at http://{}", config.bind);

    axum::serve(listener, app(state)).await?;

    Ok(())
}

async fn serve_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        include_str!("static/index.html"),
    )
}

async fn list_samples() -> Json<&'static [SampleText]> {
    Json(SAMPLE_TEXTS)
}

async fn translate_text(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Result<Json<Renditions>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(LlmError::EmptyInput.into());
    }
    let simplifier = state.simplifier.as_ref().ok_or(LlmError::MissingApiKey)?;

    info!(
        provider = simplifier.provider_name(),
        chars = request.text.chars().count(),
        "Simplifying text"
    );

    let renditions = simplify_and_render(simplifier.as_ref(), &state.engine, &request.text)
        .await
        .map_err(|e| {
            warn!(kind = e.kind(), "Simplification failed: {}", e);
            ApiError::from(e)
        })?;

    info!(spans = renditions.pairs.len(), "Simplified text");
    Ok(Json(renditions))
}

async fn render_text(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Json<Renditions> {
    Json(state.engine.renditions(&request.text))
}

fn attachment(content_type: &'static str, filename: &str, body: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}

async fn download_text(Json(request): Json<TextRequest>) -> Response {
    attachment("text/plain; charset=utf-8", TEXT_FILENAME, request.text)
}

async fn download_html(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Response {
    let document = state.engine.document(&request.text);
    attachment("text/html; charset=utf-8", HTML_FILENAME, document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const ANNOTATED: &str = "在留(ざいりゅう)カードを持(も)ってください。";

    fn state_with(mode: Option<MockMode>) -> AppState {
        let simplifier = mode.map(|mode| Arc::new(MockSimplifier::new(mode)) as Arc<dyn Simplifier>);
        AppState::new(FuriganaEngine::new(), simplifier)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Response) {
        let response = app(state).oneshot(request).await.unwrap();
        (response.status(), response)
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_string(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_index_is_html() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, response) = send(state_with(None), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        assert!(body_string(response).await.contains("やさしい日本語"));
    }

    #[tokio::test]
    async fn test_samples() {
        let request = Request::builder()
            .uri("/api/samples")
            .body(Body::empty())
            .unwrap();
        let (status, response) = send(state_with(None), request).await;
        assert_eq!(status, StatusCode::OK);
        let json = body_json(response).await;
        let samples = json.as_array().unwrap();
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0]["category"], "在留手続き");
    }

    #[tokio::test]
    async fn test_translate_returns_renditions() {
        let state = state_with(Some(MockMode::Fixed(ANNOTATED.to_string())));
        let request = post_json("/api/translate", json!({"text": "在留カードをお持ちください。"}));
        let (status, response) = send(state, request).await;
        assert_eq!(status, StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["bracket"], ANNOTATED);
        assert_eq!(json["plain"], "在留カードを持ってください。");
        assert_eq!(
            json["pairs"],
            json!([
                {"base": "在留", "reading": "ざいりゅう"},
                {"base": "持", "reading": "も"}
            ])
        );
        assert!(
            json["ruby"]
                .as_str()
                .unwrap()
                .starts_with("<ruby>在留<rt>ざいりゅう</rt></ruby>")
        );
        assert!(json["display"].as_str().unwrap().contains("line-height: 2.0"));
    }

    #[tokio::test]
    async fn test_translate_empty_input() {
        let state = state_with(Some(MockMode::Echo));
        let (status, response) = send(state, post_json("/api/translate", json!({"text": "  "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["kind"], "empty_input");
    }

    #[tokio::test]
    async fn test_translate_without_provider() {
        let (status, response) =
            send(state_with(None), post_json("/api/translate", json!({"text": "こんにちは"}))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let json = body_json(response).await;
        assert_eq!(json["kind"], "missing_api_key");
        assert!(!json["error"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_translate_upstream_failures() {
        let cases = [
            (
                MockMode::Unavailable("down".to_string()),
                StatusCode::BAD_GATEWAY,
                "service_unavailable",
            ),
            (MockMode::Timeout, StatusCode::GATEWAY_TIMEOUT, "timeout"),
        ];
        for (mode, expected_status, expected_kind) in cases {
            let (status, response) = send(
                state_with(Some(mode)),
                post_json("/api/translate", json!({"text": "こんにちは"})),
            )
            .await;
            assert_eq!(status, expected_status);
            assert_eq!(body_json(response).await["kind"], expected_kind);
        }
    }

    #[test]
    fn test_error_status_mapping() {
        let status = |e: LlmError| ApiError(e).status();
        assert_eq!(status(LlmError::EmptyInput), StatusCode::BAD_REQUEST);
        assert_eq!(status(LlmError::MissingApiKey), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            status(LlmError::Unauthorized("bad key".to_string())),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status(LlmError::ServiceUnavailable("down".to_string())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(status(LlmError::Timeout), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            status(LlmError::InvalidResponse("empty".to_string())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status(LlmError::Api {
                status: 400,
                message: "bad request".to_string()
            }),
            StatusCode::BAD_GATEWAY
        );
    }

    #[tokio::test]
    async fn test_render_skips_provider() {
        let (status, response) =
            send(state_with(None), post_json("/api/render", json!({"text": ANNOTATED}))).await;
        assert_eq!(status, StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["bracket"], ANNOTATED);
        assert_eq!(json["pairs"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_render_uses_configured_line_height() {
        let mut engine = FuriganaEngine::new();
        engine.with_line_height(1.5);
        let state = AppState::new(engine, None);
        let (_, response) = send(state, post_json("/api/render", json!({"text": "A\nB"}))).await;
        let display = body_json(response).await["display"].as_str().unwrap().to_string();
        assert!(display.contains("line-height: 1.5"));
        assert!(display.contains("A<br>B"));
    }

    #[tokio::test]
    async fn test_download_text_is_verbatim() {
        let text = "在留(ざいりゅう)カード\n2行目 <b>&</b>";
        let (status, response) =
            send(state_with(None), post_json("/api/download/text", json!({"text": text}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"yasashii_nihongo.txt\""
        );
        assert_eq!(body_string(response).await, text);
    }

    #[tokio::test]
    async fn test_download_html_document() {
        let (status, response) = send(
            state_with(None),
            post_json("/api/download/html", json!({"text": "在留(ざいりゅう)\nカード"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"yasashii_nihongo.html\""
        );
        let html = body_string(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<ruby>在留<rt>ざいりゅう</rt></ruby><br>カード"));
    }
}
