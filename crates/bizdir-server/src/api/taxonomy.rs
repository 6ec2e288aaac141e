use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub(super) struct CategoryItem {
    pub slug: &'static str,
    pub label: &'static str,
    pub business_count: usize,
}

/// Category-browsing view: every taxonomy entry with its business count.
pub(super) async fn list_categories(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<CategoryItem>>> {
    let data = state
        .catalog
        .category_counts()
        .into_iter()
        .map(|(category, business_count)| CategoryItem {
            slug: category.slug(),
            label: category.label(),
            business_count,
        })
        .collect();

    Json(ApiResponse::new(data, req_id.0))
}

pub(super) async fn list_locations(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<String>>> {
    Json(ApiResponse::new(state.catalog.locations(), req_id.0))
}
