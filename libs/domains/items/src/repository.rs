use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{Item, NewItem};
use crate::params::ListParams;

/// Repository trait for Item persistence
///
/// Filtering, counting and paging all happen inside the store; callers never
/// receive more rows than one page.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// One page of matching items plus the total number of matches
    async fn list(&self, params: ListParams) -> ItemResult<(Vec<Item>, u64)>;

    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>>;

    /// Distinct categories, ascending
    async fn categories(&self) -> ItemResult<Vec<String>>;

    /// Insert and return the row as re-read from storage
    async fn create(&self, input: NewItem) -> ItemResult<Item>;

    /// Overwrite every field; `None` when no row has this id
    async fn update(&self, id: i64, input: NewItem) -> ItemResult<Option<Item>>;

    /// `false` when no row has this id
    async fn delete(&self, id: i64) -> ItemResult<bool>;

    async fn count_all(&self) -> ItemResult<u64>;

    /// Single multi-row insert; returns the number of rows written
    async fn insert_many(&self, items: Vec<NewItem>) -> ItemResult<u64>;
}
