use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use contracts::portfolio;
use tracing::error;

use crate::AppState;

const PAGES: [&str; 7] = ["/", "/about", "/services", "/work", "/contact", "/terms", "/privacy"];

/// Status for a client-side route. Anything the frontend router would send
/// to its not-found view is a 404 here too.
pub fn page_status(path: &str) -> StatusCode {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    if PAGES.contains(&path) {
        return StatusCode::OK;
    }
    match path.strip_prefix("/work/") {
        Some(slug) if portfolio().get_by_slug(slug).is_some() => StatusCode::OK,
        _ => StatusCode::NOT_FOUND,
    }
}

/// Serves the SPA shell for every path that is not a static asset.
pub async fn spa_index(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let index = state.config.frontend_dist.join("index.html");
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => (page_status(uri.path()), Html(html)).into_response(),
        Err(e) => {
            error!("Failed to read {}: {}", index.display(), e);
            (StatusCode::SERVICE_UNAVAILABLE, "Frontend bundle is not available").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_pages() {
        for page in PAGES {
            assert_eq!(page_status(page), StatusCode::OK, "{}", page);
        }
        assert_eq!(page_status("/about/"), StatusCode::OK);
        assert_eq!(page_status(""), StatusCode::OK);
    }

    #[test]
    fn test_case_study_paths() {
        for slug in portfolio().list_slugs() {
            assert_eq!(page_status(&format!("/work/{}", slug)), StatusCode::OK);
        }
        assert_eq!(page_status("/work/not-a-project"), StatusCode::NOT_FOUND);
        assert_eq!(page_status("/work/"), StatusCode::OK);
    }

    #[test]
    fn test_unknown_pages() {
        assert_eq!(page_status("/careers"), StatusCode::NOT_FOUND);
        assert_eq!(page_status("/work/ecommerce-transformation/extra"), StatusCode::NOT_FOUND);
    }
}
