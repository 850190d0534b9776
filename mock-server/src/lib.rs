use axum::{
    body::Bytes,
    extract::Path,
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;

pub const GREETING: &str = "hello";
pub const UTF8_TEXT: &str = "Notícias: ação, économie, 日本語, emoji 🦀";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: u64,
    pub title: String,
    pub language: String,
    pub tags: Vec<String>,
}

pub fn sample_document() -> Document {
    Document {
        id: 42,
        title: "Mercados fecham em alta".to_string(),
        language: "pt".to_string(),
        tags: vec!["economia".to_string(), "bolsa".to_string()],
    }
}

pub fn app() -> Router {
    Router::new()
        .route("/echo", get(greeting).post(echo_body))
        .route("/echo/content-type", get(echo_content_type).post(echo_content_type))
        .route("/utf8", get(utf8_text))
        .route("/document", get(document))
        .route("/status/{code}", get(status))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn greeting() -> &'static str {
    GREETING
}

async fn echo_body(body: Bytes) -> Bytes {
    debug!(len = body.len(), "echoing request body");
    body
}

async fn echo_content_type(headers: HeaderMap) -> String {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn utf8_text() -> &'static str {
    UTF8_TEXT
}

async fn document() -> Json<Document> {
    Json(sample_document())
}

async fn status(Path(code): Path<u16>) -> Result<(StatusCode, String), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, format!("status {code}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_serializes_to_json() {
        let json = serde_json::to_value(sample_document()).unwrap();
        assert_eq!(json["id"], 42);
        assert_eq!(json["language"], "pt");
        assert_eq!(json["tags"][1], "bolsa");
    }

    #[test]
    fn document_rejects_missing_title() {
        let result: Result<Document, _> =
            serde_json::from_str(r#"{"id":1,"language":"en","tags":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn utf8_text_has_multibyte_characters() {
        assert!(UTF8_TEXT.len() > UTF8_TEXT.chars().count());
    }
}
