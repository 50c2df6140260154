use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    JsonBody,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use serde_json::Value;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ItemError, ItemResult};
use crate::extractors::ItemIdPath;
use crate::models::{
    CategoriesResponse, DeleteResponse, Item, ItemPayload, ItemResponse, ListResponse, Pagination,
    SearchInfo,
};
use crate::params::{ListParams, RawListQuery};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_items,
        create_item,
        list_categories,
        get_item,
        update_item,
        delete_item,
    ),
    components(
        schemas(
            Item,
            ItemPayload,
            ListResponse,
            Pagination,
            SearchInfo,
            ItemResponse,
            CategoriesResponse,
            DeleteResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Items", description = "Paginated, searchable item catalog")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/categories/list", get(list_categories))
        .route("/{id}", get(get_item).put(update_item).delete(delete_item))
        .with_state(shared_service)
}

/// List items with pagination, search, filtering and sorting
///
/// Invalid `page`, `limit`, `sort` and `order` values fall back to defaults.
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    params(RawListQuery),
    responses(
        (status = 200, description = "One page of items", body = ListResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    query: Result<Query<RawListQuery>, QueryRejection>,
) -> ItemResult<Json<ListResponse>> {
    let Query(raw) = query.map_err(|e| ItemError::Validation(vec![e.body_text()]))?;
    let params = ListParams::try_from(raw)?;

    Ok(Json(service.list_items(params).await?))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    JsonBody(payload): JsonBody<Value>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(&payload).await?;
    Ok((StatusCode::CREATED, Json(ItemResponse::new(item))))
}

/// Distinct categories in ascending order
#[utoipa::path(
    get,
    path = "/categories/list",
    tag = "Items",
    responses(
        (status = 200, description = "All categories", body = CategoriesResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_categories<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<CategoriesResponse>> {
    let data = service.list_categories().await?;
    Ok(Json(CategoriesResponse {
        success: true,
        data,
    }))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ItemIdPath(id): ItemIdPath,
) -> ItemResult<Json<ItemResponse>> {
    let item = service.get_item(id).await?;
    Ok(Json(ItemResponse::new(item)))
}

/// Replace an item; all fields are required
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item updated", body = ItemResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ItemIdPath(id): ItemIdPath,
    JsonBody(payload): JsonBody<Value>,
) -> ItemResult<Json<ItemResponse>> {
    let item = service.update_item(id, &payload).await?;
    Ok(Json(ItemResponse::new(item)))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = DeleteResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ItemIdPath(id): ItemIdPath,
) -> ItemResult<Json<DeleteResponse>> {
    service.delete_item(id).await?;
    Ok(Json(DeleteResponse::for_item(id)))
}
