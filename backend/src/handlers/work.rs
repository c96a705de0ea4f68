use axum::{
    extract::{Path, Query},
    Json,
};
use contracts::{filter, portfolio, CaseStudy, CaseStudySummary, CategorySelection};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct WorkQuery {
    pub category: Option<String>,
}

/// GET /api/work
pub async fn list_work(Query(query): Query<WorkQuery>) -> Json<Vec<CaseStudySummary>> {
    let selection = query
        .category
        .as_deref()
        .map(CategorySelection::from_label)
        .unwrap_or_default();
    let summaries = filter::filter(portfolio().get_all(), &selection)
        .into_iter()
        .map(CaseStudySummary::from)
        .collect();
    Json(summaries)
}

/// GET /api/work/slugs
pub async fn list_slugs() -> Json<Vec<&'static str>> {
    Json(portfolio().list_slugs())
}

/// GET /api/work/{slug}
pub async fn get_case_study(Path(slug): Path<String>) -> Result<Json<CaseStudy>, ApiError> {
    portfolio()
        .get_by_slug(&slug)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound("Case study"))
}
