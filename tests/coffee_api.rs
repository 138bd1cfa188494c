#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use common::{bearer, token, token_without_permissions, Stores};
use fsnd_server::{
    models::domain::{Drink, Ingredient},
    repositories::DrinkRepository,
};

const MANAGER: &[&str] = &[
    "get:drinks-detail",
    "post:drinks",
    "patch:drinks",
    "delete:drinks",
];
const BARISTA: &[&str] = &["get:drinks-detail"];

async fn stores_with_water() -> Stores {
    let stores = Stores::default();
    let water = Drink::new(
        "Water",
        vec![Ingredient {
            name: "Water".to_string(),
            color: "blue".to_string(),
            parts: 1,
        }],
    );
    stores.drinks.create(water).await.unwrap();
    stores
}

#[actix_web::test]
async fn test_public_drinks_hide_ingredient_names() {
    let stores = stores_with_water().await;
    let app = init_app!(stores.app_state());

    let req = test::TestRequest::get().uri("/drinks").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    assert_eq!(
        body["drinks"],
        json!([{"id": 1, "title": "Water", "recipe": [{"color": "blue", "parts": 1}]}])
    );
}

#[actix_web::test]
async fn test_empty_menu_is_not_found() {
    let stores = Stores::default();
    let app = init_app!(stores.app_state());

    let req = test::TestRequest::get().uri("/drinks").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_drinks_detail_requires_a_token() {
    let stores = stores_with_water().await;
    let app = init_app!(stores.app_state());

    let req = test::TestRequest::get().uri("/drinks-detail").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 401);
    assert_eq!(body["message"], "Authorization header is expected.");
}

#[actix_web::test]
async fn test_drinks_detail_with_barista_token() {
    let stores = stores_with_water().await;
    let state = stores.app_state();
    let barista = token(&state, BARISTA);
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/drinks-detail")
        .insert_header(bearer(&barista))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["drinks"][0]["recipe"][0]["name"], "Water");
}

#[actix_web::test]
async fn test_malformed_authorization_headers() {
    let stores = stores_with_water().await;
    let app = init_app!(stores.app_state());

    let cases = [
        ("Basic abc", "Authorization header must start with \"Bearer\"."),
        ("Bearer", "Token not found."),
        ("Bearer a b", "Authorization header must be bearer token."),
        ("Bearer not.a.jwt", "Unable to parse authentication token."),
    ];

    for (header, message) in cases {
        let req = test::TestRequest::get()
            .uri("/drinks-detail")
            .insert_header(("Authorization", header))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "header: {}", header);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], message);
    }
}

#[actix_web::test]
async fn test_token_without_permissions_claim_is_bad_request() {
    let stores = stores_with_water().await;
    let state = stores.app_state();
    let bare = token_without_permissions(&state);
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/drinks-detail")
        .insert_header(bearer(&bare))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Permissions not included in JWT.");
}

#[actix_web::test]
async fn test_barista_cannot_create_drinks() {
    let stores = stores_with_water().await;
    let state = stores.app_state();
    let barista = token(&state, BARISTA);
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/drinks")
        .insert_header(bearer(&barista))
        .set_json(json!({"title": "Tea", "recipe": {"name": "Tea", "color": "brown", "parts": 1}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Permission not found.");
    assert_eq!(stores.drinks.find_all().await.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_manager_creates_drink_from_single_ingredient() {
    let stores = stores_with_water().await;
    let state = stores.app_state();
    let manager = token(&state, MANAGER);
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/drinks")
        .insert_header(bearer(&manager))
        .set_json(json!({"title": "Tea", "recipe": {"name": "Tea", "color": "brown", "parts": 1}}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["drinks"][0]["id"], 2);
    assert_eq!(body["drinks"][0]["recipe"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_duplicate_title_is_unprocessable() {
    let stores = stores_with_water().await;
    let state = stores.app_state();
    let manager = token(&state, MANAGER);
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/drinks")
        .insert_header(bearer(&manager))
        .set_json(json!({
            "title": "Water",
            "recipe": [{"name": "Water", "color": "clear", "parts": 2}]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_patch_updates_title_only() {
    let stores = stores_with_water().await;
    let state = stores.app_state();
    let manager = token(&state, MANAGER);
    let app = init_app!(state);

    let req = test::TestRequest::patch()
        .uri("/drinks/1")
        .insert_header(bearer(&manager))
        .set_json(json!({"title": "Still water"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["drinks"][0]["title"], "Still water");
    assert_eq!(body["drinks"][0]["recipe"][0]["color"], "blue");

    let req = test::TestRequest::patch()
        .uri("/drinks/42")
        .insert_header(bearer(&manager))
        .set_json(json!({"title": "Ghost"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_drink_returns_id_as_string() {
    let stores = stores_with_water().await;
    let state = stores.app_state();
    let manager = token(&state, MANAGER);
    let app = init_app!(state);

    let req = test::TestRequest::delete()
        .uri("/drinks/1")
        .insert_header(bearer(&manager))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"success": true, "delete": "1"}));

    let req = test::TestRequest::delete()
        .uri("/drinks/1")
        .insert_header(bearer(&manager))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_public_menu_ignores_unusable_tokens() {
    let stores = stores_with_water().await;
    let app = init_app!(stores.app_state());

    for header in ["Bearer garbage", "Basic abc", "Bearer"] {
        let req = test::TestRequest::get()
            .uri("/drinks")
            .insert_header(("Authorization", header))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "header: {}", header);
    }
}
