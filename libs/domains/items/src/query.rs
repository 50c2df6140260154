//! Builds the count and page queries for `GET /items`.
//!
//! Both queries share one WHERE predicate so `totalItems` always matches the
//! rows that pagination walks through. User values only ever reach SQL as
//! bound parameters; the ORDER BY column and direction come from closed enums.

use sea_orm::sea_query::{Condition, LikeExpr};
use sea_orm::{ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Select};

use crate::entity::{Column, Entity};
use crate::params::{ListParams, SortField, SortOrder};

const LIKE_ESCAPE: char = '\\';

impl SortField {
    pub fn column(self) -> Column {
        match self {
            SortField::Id => Column::Id,
            SortField::Name => Column::Name,
            SortField::Price => Column::Price,
            SortField::Category => Column::Category,
        }
    }
}

impl From<SortOrder> for Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

/// WHERE predicate: exact category AND (name or description contains the term).
///
/// SQLite's LIKE is case-insensitive for ASCII letters only: `RED` matches
/// `red`, but `ÉCLAIR` does not match `éclair`. `%`, `_` and `\` in the term
/// are escaped so they match literally.
pub fn filter_condition(params: &ListParams) -> Condition {
    let mut condition = Condition::all();

    if let Some(category) = &params.category {
        condition = condition.add(Column::Category.eq(category.as_str()));
    }

    if let Some(term) = &params.search {
        let pattern = format!("%{}%", escape_like(term));
        condition = condition.add(
            Condition::any()
                .add(Column::Name.like(LikeExpr::new(pattern.clone()).escape(LIKE_ESCAPE)))
                .add(Column::Description.like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))),
        );
    }

    condition
}

/// All matching rows, unordered and unbounded; used for counting.
pub fn filtered_select(params: &ListParams) -> Select<Entity> {
    let condition = filter_condition(params);
    if condition.is_empty() {
        Entity::find()
    } else {
        Entity::find().filter(condition)
    }
}

/// The requested page: filtered, ordered, then LIMIT/OFFSET.
pub fn page_select(params: &ListParams) -> Select<Entity> {
    filtered_select(params)
        .order_by(params.sort.column(), params.order.into())
        .limit(params.limit)
        .offset(params.skip())
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
