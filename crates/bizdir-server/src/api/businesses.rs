//! Listing and detail endpoints under `/api/v1/businesses`.
//!
//! The raw query string is the listing URL's query; it goes through the same
//! codec the browser view uses, so a shared link and an API call agree.

use axum::{
    extract::{Path, RawQuery, State},
    Extension, Json,
};
use bizdir_core::{Business, BusinessId};
use bizdir_query::{render, url, Clock, QueryState, SystemClock};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub(super) struct ListingData {
    items: Vec<Business>,
    total_matched: usize,
    total_pages: usize,
    page: usize,
    state: QueryState,
    canonical_query: String,
}

pub(super) async fn list_businesses(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    RawQuery(query): RawQuery,
) -> Json<ApiResponse<ListingData>> {
    let query_state = url::decode(query.as_deref().unwrap_or_default());
    let snapshot = render(
        state.catalog.businesses(),
        &query_state,
        state.page_config,
        SystemClock.today(),
    );

    tracing::debug!(
        query = %snapshot.canonical_query,
        matched = snapshot.page.total_matched,
        page = snapshot.page.page,
        "listing rendered"
    );

    Json(ApiResponse::new(
        ListingData {
            items: snapshot.page.items,
            total_matched: snapshot.page.total_matched,
            total_pages: snapshot.page.total_pages,
            page: snapshot.page.page,
            state: snapshot.state,
            canonical_query: snapshot.canonical_query,
        },
        req_id.0,
    ))
}

pub(super) async fn get_business(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<Business>>, ApiError> {
    let Ok(id) = raw_id.parse::<u64>() else {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            format!("invalid business id: {raw_id}"),
        ));
    };

    let business = state
        .catalog
        .get(BusinessId(id))
        .cloned()
        .ok_or_else(|| ApiError::new(req_id.0.clone(), "not_found", "business not found"))?;

    Ok(Json(ApiResponse::new(business, req_id.0)))
}
