use actix_web::middleware::NormalizePath;
use actix_web::{App, test, web};
use serde_json::{Value, json};
use topicboard::repository::DieselRepository;
use topicboard::routes::api_config;

mod common;

macro_rules! test_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .wrap(NormalizePath::trim())
                .app_data(web::Data::new($repo))
                .configure(api_config),
        )
        .await
    };
}

#[actix_web::test]
async fn category_crud_over_http() {
    let test_db = common::TestDb::new();
    let app = test_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({"name": "Science", "description": "Scientific topics"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["name"], "Science");
    assert_eq!(created["description"], "Scientific topics");
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::get().uri("/categories").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri(&format!("/categories/{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);

    let req = test::TestRequest::put()
        .uri(&format!("/categories/{id}"))
        .set_json(json!({"name": "Tech"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["name"], "Tech");
    assert_eq!(updated["description"], Value::Null);

    let req = test::TestRequest::patch()
        .uri(&format!("/categories/{id}"))
        .set_json(json!({"description": "Technology topics"}))
        .to_request();
    let patched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(patched["name"], "Tech");
    assert_eq!(patched["description"], "Technology topics");

    let req = test::TestRequest::delete()
        .uri(&format!("/categories/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    let req = test::TestRequest::get()
        .uri(&format!("/categories/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn topic_references_category_by_id() {
    let test_db = common::TestDb::new();
    let app = test_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({"name": "Science"}))
        .to_request();
    let category: Value = test::call_and_read_body_json(&app, req).await;
    let category_id = category["id"].as_i64().unwrap();

    // Trailing slashes are accepted thanks to path normalization.
    let req = test::TestRequest::post()
        .uri("/topics/")
        .set_json(json!({
            "title": "Rust",
            "description": "Systems programming",
            "category": category_id,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let topic: Value = test::read_body_json(resp).await;
    let topic_id = topic["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/topics/{topic_id}/"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["category"].as_i64().unwrap(), category_id);
    assert!(fetched["created_at"].is_string());
}

#[actix_web::test]
async fn created_at_survives_updates() {
    let test_db = common::TestDb::new();
    let app = test_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({"name": "Science"}))
        .to_request();
    let category: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/topics")
        .set_json(json!({
            "title": "Rust",
            "description": "Systems programming",
            "category": category["id"],
        }))
        .to_request();
    let topic: Value = test::call_and_read_body_json(&app, req).await;
    let topic_id = topic["id"].as_i64().unwrap();
    let created_at = topic["created_at"].clone();

    let req = test::TestRequest::patch()
        .uri(&format!("/topics/{topic_id}"))
        .set_json(json!({"title": "Rust 2024"}))
        .to_request();
    let patched: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(patched["title"], "Rust 2024");
    assert_eq!(patched["created_at"], created_at);
}

#[actix_web::test]
async fn topic_with_unknown_category_is_rejected() {
    let test_db = common::TestDb::new();
    let app = test_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::post()
        .uri("/topics")
        .set_json(json!({
            "title": "Orphan",
            "description": "No category",
            "category": 42,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("category"));
}

#[actix_web::test]
async fn duplicate_category_name_is_a_conflict() {
    let test_db = common::TestDb::new();
    let app = test_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({"name": "Science"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({"name": "Science"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
}

#[actix_web::test]
async fn deleting_category_cascades_over_http() {
    let test_db = common::TestDb::new();
    let app = test_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({"name": "Science"}))
        .to_request();
    let category: Value = test::call_and_read_body_json(&app, req).await;
    let category_id = category["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/topics")
        .set_json(json!({
            "title": "Rust",
            "description": "Systems programming",
            "category": category_id,
        }))
        .to_request();
    let topic: Value = test::call_and_read_body_json(&app, req).await;
    let topic_id = topic["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/categories/{category_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    let req = test::TestRequest::get()
        .uri(&format!("/topics/{topic_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn missing_required_fields_are_rejected() {
    let test_db = common::TestDb::new();
    let app = test_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({"description": "nameless"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::post()
        .uri("/topics")
        .set_json(json!({"title": "No description"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn unknown_extra_fields_are_ignored() {
    let test_db = common::TestDb::new();
    let app = test_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({"name": "Science", "rank": 3}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
}

#[actix_web::test]
async fn delete_unknown_resources_return_404() {
    let test_db = common::TestDb::new();
    let app = test_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::delete().uri("/topics/99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::delete()
        .uri("/categories/99")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
