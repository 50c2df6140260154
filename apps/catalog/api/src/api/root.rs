//! `GET /`: service name, version and a map of the main endpoints.

use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "Pagination & Search API")]
    pub message: &'static str,
    #[schema(example = "0.1.0")]
    pub version: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub docs: &'static str,
    pub items: &'static str,
    pub item_by_id: &'static str,
    pub categories: &'static str,
}

const ENDPOINTS: Endpoints = Endpoints {
    docs: "/api-docs",
    items: "/items?page=1&limit=10&search=widget",
    item_by_id: "/items/{id}",
    categories: "/items/categories/list",
};

/// Service information
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses((status = 200, description = "Service information", body = RootResponse))
)]
pub async fn root_handler(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Pagination & Search API",
        version: state.config.app.version,
        endpoints: ENDPOINTS,
    })
}
