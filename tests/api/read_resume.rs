use reqwest::StatusCode;
use resume_api::structs::resume::ResumeRecord;

use crate::helpers::{admin_claims, assert_cors, complete_resume, spawn_app};

#[tokio::test]
async fn unknown_id_is_not_found() {
    let test_app = spawn_app().await;
    test_app.post_resume(&complete_resume(), admin_claims()).await;

    let response = test_app.get_resume(&[("id", "e50408fa-e368-4ccd-9ade-851fdb553e0f")]).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_cors(&response);
    assert_eq!(response.text().await.unwrap(), "Information not found");
}

#[tokio::test]
async fn empty_table_is_not_found() {
    let test_app = spawn_app().await;

    let response = test_app.get_resume(&[]).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text().await.unwrap(), "Information not found");
}

#[tokio::test]
async fn scan_returns_every_record() {
    let test_app = spawn_app().await;
    for _ in 0..3 {
        let response = test_app.post_resume(&complete_resume(), admin_claims()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = test_app.get_resume(&[]).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    let records = response.json::<Vec<ResumeRecord>>().await.unwrap();
    assert_eq!(records.len(), 3);
}

#[tokio::test]
async fn identical_reads_agree() {
    let test_app = spawn_app().await;
    test_app.post_resume(&complete_resume(), admin_claims()).await;
    test_app.post_resume(&complete_resume(), admin_claims()).await;

    let first = test_app.get_resume(&[]).await.json::<Vec<ResumeRecord>>().await.unwrap();
    let second = test_app.get_resume(&[]).await.json::<Vec<ResumeRecord>>().await.unwrap();

    assert_eq!(first, second);
}
