use std::sync::Arc;

use reqwest::StatusCode;
use resume_api::store::MongoRecordStore;
use resume_api::structs::resume::ResumeRecord;

use crate::helpers::{admin_claims, complete_resume, get_test_database, spawn_app_with};

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn resumes_round_trip_through_mongodb() {
    let database = get_test_database()
        .await
        .expect("failed to connect to mongodb");
    let test_app = spawn_app_with(Arc::new(MongoRecordStore::new(database))).await;

    let response = test_app.post_resume(&complete_resume(), admin_claims()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let message = response.json::<String>().await.unwrap();
    let id = message.trim_start_matches("Created item with id: ");

    let records = test_app
        .get_resume(&[("id", id)])
        .await
        .json::<Vec<ResumeRecord>>()
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Grace Hopper");
}
