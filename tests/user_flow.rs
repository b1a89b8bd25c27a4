mod common;

use actix_web::{http::StatusCode, test};
use common::{admin_header, client::TestClient, test_data, TestContext};

#[actix_web::test]
async fn test_user_creation_flow_success() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let user_data = test_data::sample_user();

    let req = test::TestRequest::post()
        .uri("/users")
        .insert_header(admin_header())
        .set_json(&user_data)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], user_data.name);
    assert_eq!(body["email"], user_data.email);

    let id = body["id"].as_i64().unwrap() as i32;
    let user = ctx.db.get_user_by_id(id).await.unwrap();
    assert_eq!(user.email, user_data.email);
}

#[actix_web::test]
async fn test_user_creation_flow_duplicate_email() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let user_data = test_data::sample_user_with_email("dup@test.com");
    client.create_test_user(Some("dup@test.com".to_string())).await.unwrap();

    let req = test::TestRequest::post()
        .uri("/users")
        .insert_header(admin_header())
        .set_json(&user_data)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ALREADY_EXISTS");
}

#[actix_web::test]
async fn test_user_creation_flow_unauthorized() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/users")
        .insert_header(("Authorization", "Bearer invalid_token"))
        .set_json(test_data::sample_user())
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
    assert!(ctx.db.list_users().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_user_list_flow() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_named_user("Diego").await;
    client.create_named_user("Robson").await;

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header(admin_header())
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Diego", "Robson"]);
}
