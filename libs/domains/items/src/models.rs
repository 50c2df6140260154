use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::params::ListParams;

/// Fields matched by the `search` parameter, echoed back in list responses.
pub const SEARCH_FIELDS: [&str; 2] = ["name", "description"];

/// A catalog item as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Assigned by the database, never reused
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Premium Widget 1")]
    pub name: String,
    #[schema(example = "Electronics")]
    pub category: String,
    #[schema(example = 49.99)]
    pub price: f64,
    #[schema(example = "High-quality premium widget in the electronics category.")]
    pub description: Option<String>,
}

/// A validated, normalized create/update payload.
///
/// Only produced by [`crate::validation::validate_item`]: names and categories
/// are trimmed, blank descriptions are `None`, and `price > 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: Option<String>,
}

/// Request body for create and update (documentation only; bodies are
/// validated from raw JSON so every rule violation can be reported)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemPayload {
    /// 1-200 characters after trimming
    #[schema(example = "Red Widget")]
    pub name: String,
    #[schema(example = "Tools")]
    pub category: String,
    /// Strictly positive
    #[schema(example = 5.0)]
    pub price: f64,
    /// Blank values are stored as null
    #[schema(example = "A small red widget")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_items: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub limit: u64,
    pub skip: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Pagination {
    pub fn new(total_items: u64, params: &ListParams) -> Self {
        let total_pages = total_items.div_ceil(params.limit);

        Self {
            total_items,
            total_pages,
            current_page: params.page,
            limit: params.limit,
            skip: params.skip(),
            has_next_page: params.page < total_pages,
            has_prev_page: params.page > 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchInfo {
    #[schema(example = "widget")]
    pub term: String,
    #[schema(example = json!(["name", "description"]))]
    pub fields_searched: Vec<String>,
}

impl SearchInfo {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            fields_searched: SEARCH_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// `GET /items` response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListResponse {
    pub success: bool,
    pub data: Vec<Item>,
    pub pagination: Pagination,
    /// `null` when no search term was given
    pub search: Option<SearchInfo>,
}

/// Single item response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub success: bool,
    pub data: Item,
}

impl ItemResponse {
    pub fn new(data: Item) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `GET /items/categories/list` response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    #[schema(example = json!(["Books", "Electronics", "Toys"]))]
    pub data: Vec<String>,
}

/// `DELETE /items/{id}` response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
    #[schema(example = "Item 42 deleted successfully")]
    pub message: String,
}

impl DeleteResponse {
    pub fn for_item(id: i64) -> Self {
        Self {
            success: true,
            message: format!("Item {} deleted successfully", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::RawListQuery;
    use serde_json::json;

    fn params(page: &str, limit: &str) -> ListParams {
        ListParams::try_from(RawListQuery {
            page: Some(page.into()),
            limit: Some(limit.into()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_pagination_math() {
        let p = Pagination::new(25, &params("2", "10"));
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.skip, 10);
        assert!(p.has_next_page);
        assert!(p.has_prev_page);

        let last = Pagination::new(25, &params("3", "10"));
        assert!(!last.has_next_page);

        let exact = Pagination::new(20, &params("2", "10"));
        assert_eq!(exact.total_pages, 2);
        assert!(!exact.has_next_page);
    }

    #[test]
    fn test_pagination_empty_result() {
        let p = Pagination::new(0, &params("1", "10"));
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_next_page);
        assert!(!p.has_prev_page);
    }

    #[test]
    fn test_pagination_past_the_end() {
        let p = Pagination::new(5, &params("4", "2"));
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.skip, 6);
        assert!(!p.has_next_page);
        assert!(p.has_prev_page);
    }

    #[test]
    fn test_pagination_serializes_camel_case() {
        let value = serde_json::to_value(Pagination::new(1, &params("1", "10"))).unwrap();
        assert_eq!(
            value,
            json!({
                "totalItems": 1,
                "totalPages": 1,
                "currentPage": 1,
                "limit": 10,
                "skip": 0,
                "hasNextPage": false,
                "hasPrevPage": false
            })
        );
    }

    #[test]
    fn test_search_info_shape() {
        let value = serde_json::to_value(SearchInfo::new("red")).unwrap();
        assert_eq!(
            value,
            json!({"term": "red", "fieldsSearched": ["name", "description"]})
        );
    }

    #[test]
    fn test_list_response_null_search() {
        let response = ListResponse {
            success: true,
            data: vec![],
            pagination: Pagination::new(0, &params("1", "10")),
            search: None,
        };
        let value = serde_json::to_value(response).unwrap();
        assert!(value["search"].is_null());
        assert!(value.as_object().unwrap().contains_key("search"));
    }

    #[test]
    fn test_delete_message() {
        assert_eq!(
            DeleteResponse::for_item(7).message,
            "Item 7 deleted successfully"
        );
    }
}
