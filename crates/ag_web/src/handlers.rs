use crate::error::ApiError;
use crate::AppState;
use ag_core::{clean_text, GenerationRequest, GenerationResponse};
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info};

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerationResponse>, ApiError> {
    let url = match request.url {
        Some(url) if !url.trim().is_empty() => url,
        _ => return Err(ApiError::bad_request("URL is required")),
    };

    info!("Loading website content from {}", url);
    let pages = match state.loader.load(&[url.clone()]).await {
        Ok(pages) => pages,
        Err(e) => {
            error!("Failed to load {}: {}", url, e);
            Vec::new()
        }
    };
    let Some(page) = pages.into_iter().next() else {
        return Err(ApiError::bad_request("Failed to load website content"));
    };

    let cleaned = clean_text(&page.content);

    info!("Extracting website information");
    let Some(article_info) = state.generator.extract_website_info(&cleaned).await else {
        return Err(ApiError::bad_request(
            "Failed to extract website information",
        ));
    };

    info!("Generating article");
    let Some(article) = state.generator.generate_article(&article_info).await else {
        return Err(ApiError::bad_request("Failed to generate article"));
    };

    Ok(Json(GenerationResponse {
        success: true,
        article,
        source_url: url,
    }))
}
