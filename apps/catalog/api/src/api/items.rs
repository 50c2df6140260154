use axum::Router;
use domain_items::{ItemService, SeaOrmItemRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = SeaOrmItemRepository::new(state.db.clone());
    let service = ItemService::new(repository);
    handlers::router(service)
}
