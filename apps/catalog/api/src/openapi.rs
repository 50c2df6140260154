use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::root::root_handler,
        crate::api::health::ready_handler,
        axum_helpers::server::health::health_handler,
    ),
    components(
        schemas(
            axum_helpers::ErrorResponse,
            axum_helpers::HealthResponse,
            crate::api::root::RootResponse,
            crate::api::root::Endpoints
        )
    ),
    info(
        title = "Pagination & Search API",
        version = "0.1.0",
        description = "Item catalog with pagination, search, filtering and sorting"
    ),
    nest(
        (path = "/items", api = domain_items::ApiDoc)
    )
)]
pub struct ApiDoc;
