use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};

use crate::{
    entity::{self, Column, Entity},
    error::{ItemError, ItemResult},
    models::{Item, NewItem},
    params::ListParams,
    query::{filtered_select, page_select},
    repository::ItemRepository,
};

/// Rows per INSERT statement when bulk loading; keeps the bound parameter
/// count well under SQLite's limit.
const INSERT_CHUNK: usize = 1000;

/// SeaORM-backed item store
#[derive(Clone)]
pub struct SeaOrmItemRepository {
    db: DatabaseConnection,
}

impl SeaOrmItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find(&self, id: i64) -> ItemResult<Option<Item>> {
        let model = Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }
}

#[async_trait]
impl ItemRepository for SeaOrmItemRepository {
    async fn list(&self, params: ListParams) -> ItemResult<(Vec<Item>, u64)> {
        let total = filtered_select(&params).count(&self.db).await?;
        let models = page_select(&params).all(&self.db).await?;

        Ok((models.into_iter().map(Into::into).collect(), total))
    }

    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        self.find(id).await
    }

    async fn categories(&self) -> ItemResult<Vec<String>> {
        let categories = Entity::find()
            .select_only()
            .column(Column::Category)
            .distinct()
            .order_by_asc(Column::Category)
            .into_tuple::<String>()
            .all(&self.db)
            .await?;

        Ok(categories)
    }

    async fn create(&self, input: NewItem) -> ItemResult<Item> {
        let active_model: entity::ActiveModel = input.into();
        let result = Entity::insert(active_model).exec(&self.db).await?;

        // Re-read so the response is exactly what was stored
        self.find(result.last_insert_id).await?.ok_or_else(|| {
            ItemError::Internal(format!(
                "inserted item {} could not be read back",
                result.last_insert_id
            ))
        })
    }

    async fn update(&self, id: i64, input: NewItem) -> ItemResult<Option<Item>> {
        let active_model: entity::ActiveModel = input.into();
        let result = Entity::update_many()
            .set(active_model)
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find(id).await
    }

    async fn delete(&self, id: i64) -> ItemResult<bool> {
        let result = Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn count_all(&self) -> ItemResult<u64> {
        Ok(Entity::find().count(&self.db).await?)
    }

    async fn insert_many(&self, items: Vec<NewItem>) -> ItemResult<u64> {
        if items.is_empty() {
            return Ok(0);
        }

        let total = items.len() as u64;
        let txn = self.db.begin().await?;

        let mut rows = items.into_iter().map(entity::ActiveModel::from).peekable();
        while rows.peek().is_some() {
            let chunk: Vec<entity::ActiveModel> = rows.by_ref().take(INSERT_CHUNK).collect();
            Entity::insert_many(chunk).exec(&txn).await?;
        }

        txn.commit().await?;
        Ok(total)
    }
}
