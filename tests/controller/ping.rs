use axum::http::{header, StatusCode};
use snippetbox_test_utils::prelude::*;

use crate::util::{client::TestClient, TestContextExt};

/// Expect the literal OK body without any session or CSRF cookie
#[tokio::test]
async fn returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let mut client = TestClient::new(test.into_app());

    let response = client.get("/ping").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "OK");
    assert!(response.headers.get(header::SET_COOKIE).is_none());

    Ok(())
}

/// Expect the probe to answer even though the database has no tables
#[tokio::test]
async fn ignores_backing_store_state() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let mut client = TestClient::new(test.into_app());

    assert_eq!(client.get("/").await.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(client.get("/ping").await.body, "OK");

    Ok(())
}

/// Expect the same answer for an authenticated user
#[tokio::test]
async fn returns_ok_when_logged_in() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_snippet_tables()
        .with_mock_user(TEST_USER_NAME, TEST_USER_EMAIL, TEST_USER_PASSWORD)
        .build()
        .await?;
    let mut client = TestClient::new(test.into_app());
    crate::util::client::login(&mut client, TEST_USER_EMAIL, TEST_USER_PASSWORD).await;

    let response = client.get("/ping").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "OK");

    Ok(())
}
