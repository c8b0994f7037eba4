use reqwest::StatusCode;
use serde_json::json;

use crate::helpers::{admin_claims, assert_cors, complete_resume, spawn_app, TABLE};

#[tokio::test]
async fn admin_gets_a_fresh_id() {
    let test_app = spawn_app().await;

    let response = test_app.post_resume(&complete_resume(), admin_claims()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    let message = response.json::<String>().await.unwrap();
    let id = message
        .strip_prefix("Created item with id: ")
        .expect("id in message")
        .to_owned();

    let stored = test_app.store.scan_all(TABLE).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, id);
    assert_eq!(stored[0].city, "New York");
}

#[tokio::test]
async fn created_resume_is_readable_by_id() {
    let test_app = spawn_app().await;

    let message = test_app
        .post_resume(&complete_resume(), admin_claims())
        .await
        .json::<String>()
        .await
        .unwrap();
    let id = message.trim_start_matches("Created item with id: ");

    let response = test_app.get_resume(&[("id", id)]).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body[0]["id"], json!(id));
    assert_eq!(body[0]["name"], json!("Grace Hopper"));
}

#[tokio::test]
async fn missing_claims_are_rejected() {
    let test_app = spawn_app().await;

    let response = test_app.post_resume(&complete_resume(), None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_cors(&response);
    assert_eq!(response.text().await.unwrap(), "Not Authorized");
    assert!(test_app.store.scan_all(TABLE).await.unwrap().is_empty());
}

#[tokio::test]
async fn non_admin_groups_are_rejected() {
    let test_app = spawn_app().await;

    let response = test_app
        .post_resume(&complete_resume(), Some(json!({"cognito:groups": "editors,superadmins"})))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(test_app.store.scan_all(TABLE).await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_city_names_the_field() {
    let test_app = spawn_app().await;
    let mut body = complete_resume();
    body.as_object_mut().unwrap().remove("city");

    let response = test_app.post_resume(&body, admin_claims()).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_cors(&response);
    assert!(response.text().await.unwrap().contains("city"));
}

#[tokio::test]
async fn empty_fields_are_reported_in_order() {
    let test_app = spawn_app().await;
    let mut body = complete_resume();
    body["degree"] = json!("");
    body["linkedin"] = json!("");

    let response = test_app.post_resume(&body, admin_claims()).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(response.text().await.unwrap(), "Value for linkedin required!");
}

#[tokio::test]
async fn unsupported_method_keeps_cors_headers() {
    let test_app = spawn_app().await;

    let response = reqwest::Client::new()
        .delete(format!("{}/resume", test_app.address))
        .send()
        .await
        .expect("failed request");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_cors(&response);
}
