use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the `items` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub category: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Item {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            category: model.category,
            price: model.price,
            description: model.description,
        }
    }
}

impl From<crate::models::NewItem> for ActiveModel {
    fn from(input: crate::models::NewItem) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            category: Set(input.category),
            price: Set(input.price),
            description: Set(input.description),
        }
    }
}
