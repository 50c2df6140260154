//! Item Service - Business logic layer

use rand::Rng;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ListResponse, Pagination, SearchInfo};
use crate::params::ListParams;
use crate::repository::ItemRepository;
use crate::seed::generate_items;
use crate::validation::validate_item;

/// Item service providing business logic operations
///
/// Payload validation happens here, before any storage call; the repository
/// only ever sees normalized input.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// One page of items with pagination metadata
    #[instrument(skip(self))]
    pub async fn list_items(&self, params: ListParams) -> ItemResult<ListResponse> {
        let search = params.search.clone().map(SearchInfo::new);
        let (data, total_items) = self.repository.list(params.clone()).await?;

        Ok(ListResponse {
            success: true,
            data,
            pagination: Pagination::new(total_items, &params),
            search,
        })
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i64) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ItemResult<Vec<String>> {
        self.repository.categories().await
    }

    /// Validate a raw body and insert it
    #[instrument(skip(self, payload))]
    pub async fn create_item(&self, payload: &Value) -> ItemResult<Item> {
        let input = validate_item(payload)?;
        let item = self.repository.create(input).await?;

        tracing::info!(item_id = item.id, "Item created");
        Ok(item)
    }

    /// Replace every field of an existing item
    #[instrument(skip(self, payload))]
    pub async fn update_item(&self, id: i64, payload: &Value) -> ItemResult<Item> {
        // Missing ids are reported before payload problems
        self.get_item(id).await?;

        let input = validate_item(payload)?;
        let item = self
            .repository
            .update(id, input)
            .await?
            .ok_or(ItemError::NotFound(id))?;

        tracing::info!(item_id = item.id, "Item updated");
        Ok(item)
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i64) -> ItemResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ItemError::NotFound(id));
        }

        tracing::info!(item_id = id, "Item deleted");
        Ok(())
    }

    /// Insert `count` generated items when the store is empty.
    ///
    /// Returns the number of rows inserted (0 when items already exist).
    #[instrument(skip(self, rng))]
    pub async fn seed_if_empty<G: Rng>(&self, count: usize, rng: &mut G) -> ItemResult<u64> {
        let existing = self.repository.count_all().await?;
        if existing > 0 {
            tracing::debug!(existing, "Items present, skipping seed");
            return Ok(0);
        }

        let inserted = self
            .repository
            .insert_many(generate_items(count, rng))
            .await?;

        tracing::info!(inserted, "Seeded sample items");
        Ok(inserted)
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
