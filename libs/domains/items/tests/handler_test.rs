//! Handler tests for the Items domain
//!
//! These drive the items router end to end against a real SQLite file:
//! - Query normalization (page, limit, sort, order, search, category)
//! - Payload validation and normalization
//! - HTTP status codes and the `{success, error}` envelope
//!
//! Only the domain router is mounted (under `/items`); the application-wide
//! fallback and middleware are covered in `axum-helpers`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_items::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::assertions::assert_sorted_by;
use test_utils::{TestDataBuilder, TestDatabase};
use tower::ServiceExt; // For oneshot()

fn app(db: &TestDatabase) -> Router {
    let service = ItemService::new(SeaOrmItemRepository::new(db.connection()));
    Router::new().nest("/items", handlers::router(service))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create(app: &Router, payload: Value) -> Value {
    let (status, body) = send(app, "POST", "/items", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"].clone()
}

async fn seed_scenario(app: &Router) {
    for payload in [
        json!({"name": "Red Widget", "category": "Tools", "price": 5}),
        json!({"name": "Blue Widget", "category": "Tools", "price": 15}),
        json!({"name": "Red Gadget", "category": "Toys", "price": 8}),
    ] {
        create(app, payload).await;
    }
}

async fn seed_many(db: &TestDatabase, count: usize) {
    let repo = SeaOrmItemRepository::new(db.connection());
    let items = (1..=count)
        .map(|i| NewItem {
            name: format!("Item {i}"),
            category: "Books".to_string(),
            price: i as f64,
            description: None,
        })
        .collect();
    repo.insert_many(items).await.unwrap();
}

fn names(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_create_returns_201_and_round_trips() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let builder = TestDataBuilder::from_test_name("handler_create_round_trip");
    let payload = builder.item_payload("main");

    let (status, body) = send(&app, "POST", "/items", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);

    let id = body["data"]["id"].as_i64().unwrap();
    let (status, fetched) = send(&app, "GET", &format!("/items/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], body["data"]);
    assert_eq!(fetched["data"]["name"], payload["name"]);
    assert_eq!(fetched["data"]["category"], payload["category"]);
    assert_eq!(fetched["data"]["price"], payload["price"]);
    assert_eq!(fetched["data"]["description"], payload["description"]);
}

#[tokio::test]
async fn test_create_normalizes_payload() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let item = create(
        &app,
        json!({"name": "  Red Widget ", "category": " Tools ", "price": 5, "description": "   "}),
    )
    .await;

    assert_eq!(item["name"], "Red Widget");
    assert_eq!(item["category"], "Tools");
    assert_eq!(item["price"], 5.0);
    assert!(item["description"].is_null());

    let (_, fetched) = send(&app, "GET", &format!("/items/{}", item["id"]), None).await;
    assert_eq!(fetched["data"], item);
}

#[tokio::test]
async fn test_price_must_be_positive() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    for price in [json!(0), json!(-5)] {
        let (status, body) = send(
            &app,
            "POST",
            "/items",
            Some(json!({"name": "x", "category": "y", "price": price})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(
            body["error"],
            "price is required and must be a positive number"
        );
    }

    let item = create(&app, json!({"name": "x", "category": "y", "price": 0.01})).await;
    assert_eq!(item["price"], 0.01);
}

#[tokio::test]
async fn test_name_length_limit() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let ok = "a".repeat(200);
    let item = create(&app, json!({"name": ok, "category": "y", "price": 1})).await;
    assert_eq!(item["name"].as_str().unwrap().len(), 200);

    let (status, body) = send(
        &app,
        "POST",
        "/items",
        Some(json!({"name": "a".repeat(201), "category": "y", "price": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name must be at most 200 characters");
}

#[tokio::test]
async fn test_validation_errors_are_joined() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let (status, body) = send(&app, "POST", "/items", Some(json!({"description": 3}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        "name is required and must be a non-empty string, \
         category is required and must be a non-empty string, \
         price is required and must be a positive number, \
         description must be a string"
    );
    assert_eq!(body["details"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let request = Request::builder()
        .method("POST")
        .uri("/items")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_get_invalid_and_missing_ids() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    for id in ["abc", "-", "x12"] {
        let (status, body) = send(&app, "GET", &format!("/items/{id}"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{id}");
        assert_eq!(body, json!({"success": false, "error": "Invalid item ID"}));
    }

    let (status, _) = send(&app, "GET", "/items/12abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let item = create(&app, json!({"name": "Lamp", "category": "Home", "price": 20})).await;
    for suffix in ["abc", ".5"] {
        let uri = format!("/items/{}{suffix}", item["id"]);
        let (status, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body["data"]["name"], "Lamp");
    }

    let (status, body) = send(&app, "GET", "/items/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "error": "Item not found"}));
}

#[tokio::test]
async fn test_update_replaces_all_fields() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let item = create(
        &app,
        json!({"name": "Old", "category": "Tools", "price": 1, "description": "old"}),
    )
    .await;
    let uri = format!("/items/{}", item["id"]);

    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({"name": " New ", "category": "Toys", "price": 2.5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({"id": item["id"], "name": "New", "category": "Toys", "price": 2.5, "description": null})
    );

    let (_, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(fetched["data"], body["data"]);
}

#[tokio::test]
async fn test_update_errors() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let item = create(&app, json!({"name": "A", "category": "B", "price": 1})).await;

    let (status, _) = send(
        &app,
        "PUT",
        "/items/999",
        Some(json!({"name": "x", "category": "y", "price": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/items/{}", item["id"]),
        Some(json!({"name": "x", "category": "y"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "price is required and must be a positive number");

    let (status, _) = send(
        &app,
        "PUT",
        "/items/nope",
        Some(json!({"name": "x", "category": "y", "price": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let item = create(&app, json!({"name": "A", "category": "B", "price": 1})).await;
    let id = item["id"].as_i64().unwrap();
    let uri = format!("/items/{id}");

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": format!("Item {id} deleted successfully")})
    );

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/items/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_defaults_on_empty_store() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let (status, body) = send(&app, "GET", "/items", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "data": [],
            "pagination": {
                "totalItems": 0,
                "totalPages": 0,
                "currentPage": 1,
                "limit": 10,
                "skip": 0,
                "hasNextPage": false,
                "hasPrevPage": false
            },
            "search": null
        })
    );
}

#[tokio::test]
async fn test_pagination_metadata() {
    let db = TestDatabase::new().await;
    seed_many(&db, 25).await;
    let app = app(&db);

    let (_, body) = send(&app, "GET", "/items?page=2&limit=10", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
    assert_eq!(body["data"][0]["name"], "Item 11");
    assert_eq!(body["pagination"]["totalItems"], 25);
    assert_eq!(body["pagination"]["totalPages"], 3);
    assert_eq!(body["pagination"]["skip"], 10);
    assert_eq!(body["pagination"]["hasNextPage"], true);
    assert_eq!(body["pagination"]["hasPrevPage"], true);

    let (_, body) = send(&app, "GET", "/items?page=3&limit=10", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["pagination"]["hasNextPage"], false);

    let (_, body) = send(&app, "GET", "/items?page=9", None).await;
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["pagination"]["currentPage"], 9);
    assert_eq!(body["pagination"]["skip"], 80);
}

#[tokio::test]
async fn test_limit_and_page_are_normalized() {
    let db = TestDatabase::new().await;
    seed_many(&db, 120).await;
    let app = app(&db);

    let cases: [(&str, u64, usize); 9] = [
        ("limit=1000", 1, 100),
        ("limit=25abc", 1, 25),
        ("limit=7.9", 1, 7),
        ("limit=0", 1, 1),
        ("limit=-7", 1, 1),
        ("limit=abc", 1, 10),
        ("page=0", 1, 10),
        ("page=-3", 1, 10),
        ("page=xyz&limit=5", 1, 5),
    ];

    for (query, page, limit) in cases {
        let (status, body) = send(&app, "GET", &format!("/items?{query}"), None).await;
        assert_eq!(status, StatusCode::OK, "{query}");
        assert_eq!(body["pagination"]["currentPage"], page, "{query}");
        assert_eq!(body["pagination"]["limit"], limit, "{query}");
        assert_eq!(body["pagination"]["skip"], 0, "{query}");
        assert_eq!(body["data"].as_array().unwrap().len(), limit, "{query}");
    }

    let (_, body) = send(&app, "GET", "/items?page=2.9&limit=5", None).await;
    assert_eq!(body["pagination"]["currentPage"], 2);
    assert_eq!(body["pagination"]["skip"], 5);
}

#[tokio::test]
async fn test_category_filter_and_sort() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    seed_scenario(&app).await;

    let (status, body) = send(&app, "GET", "/items?category=Tools&sort=price&order=desc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Blue Widget", "Red Widget"]);
    assert_eq!(body["pagination"]["totalItems"], 2);
    assert!(body["search"].is_null());
}

#[tokio::test]
async fn test_search_matches_name_case_insensitively() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    seed_scenario(&app).await;

    let (status, body) = send(&app, "GET", "/items?search=red", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Red Widget", "Red Gadget"]);
    assert_eq!(body["pagination"]["totalItems"], 2);
    assert_eq!(
        body["search"],
        json!({"term": "red", "fieldsSearched": ["name", "description"]})
    );
}

#[tokio::test]
async fn test_search_matches_description_and_combines_with_category() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    create(
        &app,
        json!({"name": "Plain", "category": "Books", "price": 3, "description": "A SHINY cover"}),
    )
    .await;
    create(
        &app,
        json!({"name": "Shiny Toy", "category": "Toys", "price": 4}),
    )
    .await;
    create(
        &app,
        json!({"name": "Dull", "category": "Books", "price": 5, "description": "matte"}),
    )
    .await;

    let (_, body) = send(&app, "GET", "/items?search=shiny", None).await;
    assert_eq!(names(&body), vec!["Plain", "Shiny Toy"]);

    let (_, body) = send(&app, "GET", "/items?search=shiny&category=Books", None).await;
    assert_eq!(names(&body), vec!["Plain"]);
    assert_eq!(body["pagination"]["totalItems"], 1);
}

#[tokio::test]
async fn test_search_wildcards_match_literally() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    create(&app, json!({"name": "100% Cotton", "category": "Clothing", "price": 9})).await;
    create(&app, json!({"name": "1000 Cotton", "category": "Clothing", "price": 9})).await;

    let (_, body) = send(&app, "GET", "/items?search=0%25", None).await;
    assert_eq!(names(&body), vec!["100% Cotton"]);

    let (_, body) = send(&app, "GET", "/items?search=_", None).await;
    assert!(names(&body).is_empty());
}

#[tokio::test]
async fn test_search_folds_ascii_case_only() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    create(&app, json!({"name": "éclair", "category": "Bakery", "price": 3})).await;
    create(&app, json!({"name": "Éclair Tray", "category": "Bakery", "price": 12})).await;

    let (_, body) = send(&app, "GET", "/items?search=CLAIR", None).await;
    assert_eq!(names(&body), vec!["éclair", "Éclair Tray"]);

    // É and é are different letters to SQLite's LIKE
    let (_, body) = send(&app, "GET", "/items?search=%C3%89CLAIR", None).await;
    assert_eq!(names(&body), vec!["Éclair Tray"]);
}

#[tokio::test]
async fn test_search_length_limit() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let (status, body) = send(&app, "GET", &format!("/items?search={}", "a".repeat(101)), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "search must be at most 100 characters");

    let padded = format!("%20%20{}%20%20", "a".repeat(100));
    let (status, _) = send(&app, "GET", &format!("/items?search={padded}"), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_invalid_sort_falls_back_to_id() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    seed_scenario(&app).await;

    for query in ["sort=bogus", "sort=PRICE", "sort=price;DROP TABLE items"] {
        let (status, body) = send(&app, "GET", &format!("/items?{}", query.replace(' ', "%20")), None).await;
        assert_eq!(status, StatusCode::OK, "{query}");
        assert_eq!(names(&body), vec!["Red Widget", "Blue Widget", "Red Gadget"]);
    }

    let (_, body) = send(&app, "GET", "/items?sort=name&order=DESC", None).await;
    assert_eq!(names(&body), vec!["Blue Widget", "Red Gadget", "Red Widget"]);

    let (_, body) = send(&app, "GET", "/items?sort=price&order=desc", None).await;
    let items = body["data"].as_array().unwrap().clone();
    assert_sorted_by(&items, |item| item["price"].as_f64().unwrap(), true);
}

#[tokio::test]
async fn test_categories_are_distinct_and_sorted() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    seed_scenario(&app).await;
    create(&app, json!({"name": "Novel", "category": "Books", "price": 12})).await;

    let (status, body) = send(&app, "GET", "/items/categories/list", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "data": ["Books", "Tools", "Toys"]})
    );
}
