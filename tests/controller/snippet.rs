use axum::http::StatusCode;
use snippetbox_test_utils::prelude::*;

use crate::util::{
    client::{login, TestClient},
    TestContextExt,
};

mod home {
    use super::*;

    /// Expect live snippets listed and expired ones hidden
    #[tokio::test]
    async fn lists_live_snippets() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_user_tables()
            .with_mock_snippet("An old silent pond", "A frog jumps into the pond", 7)
            .with_expired_snippet("Over the wintry forest", "Winds howl in rage")
            .build()
            .await?;
        let mut client = TestClient::new(test.into_app());

        let response = client.get("/").await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("An old silent pond"));
        assert!(!response.body.contains("Over the wintry forest"));

        Ok(())
    }

    /// Expect the empty state message when nothing is live
    #[tokio::test]
    async fn shows_empty_state() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_user_tables()
            .with_snippet_tables()
            .build()
            .await?;
        let mut client = TestClient::new(test.into_app());

        let response = client.get("/").await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("nothing to see here"));

        Ok(())
    }

    /// Expect at most ten snippets on the home page
    #[tokio::test]
    async fn limits_to_ten() -> Result<(), TestError> {
        let mut builder = TestBuilder::new().with_user_tables();
        for i in 1..=12 {
            builder = builder.with_mock_snippet(format!("Snippet number {i:02}"), "content", 7);
        }
        let test = builder.build().await?;
        let mut client = TestClient::new(test.into_app());

        let response = client.get("/").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body.matches("Snippet number").count(), 10);
        assert!(response.body.contains("Snippet number 12"));
        assert!(!response.body.contains("Snippet number 01"));

        Ok(())
    }
}

mod show {
    use super::*;

    /// Expect the snippet detail for a live snippet
    #[tokio::test]
    async fn shows_live_snippet() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_user_tables()
            .with_mock_snippet("An old silent pond", "A frog jumps into the pond", 7)
            .build()
            .await?;
        let mut client = TestClient::new(test.into_app());

        let response = client.get("/snippet/1").await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("An old silent pond"));
        assert!(response.body.contains("A frog jumps into the pond"));

        Ok(())
    }

    /// Expect 404 for IDs that are not positive integers or have no live snippet
    #[tokio::test]
    async fn rejects_unknown_ids() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_user_tables()
            .with_mock_snippet("An old silent pond", "A frog jumps into the pond", 7)
            .with_expired_snippet("Over the wintry forest", "Winds howl in rage")
            .build()
            .await?;
        let mut client = TestClient::new(test.into_app());

        for path in [
            "/snippet/0",
            "/snippet/-1",
            "/snippet/1.23",
            "/snippet/foo",
            "/snippet/2",
            "/snippet/99",
        ] {
            let response = client.get(path).await;
            assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
            assert_eq!(response.body, "Not Found", "{path}");
        }

        Ok(())
    }
}

mod create {
    use super::*;

    async fn logged_in_client() -> Result<TestClient, TestError> {
        let test = TestBuilder::new()
            .with_snippet_tables()
            .with_mock_user(TEST_USER_NAME, TEST_USER_EMAIL, TEST_USER_PASSWORD)
            .build()
            .await?;
        let mut client = TestClient::new(test.into_app());
        login(&mut client, TEST_USER_EMAIL, TEST_USER_PASSWORD).await;

        Ok(client)
    }

    /// Expect anonymous users redirected to the login page
    #[tokio::test]
    async fn requires_authentication() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_snippet_tables()
            .with_user_tables()
            .build()
            .await?;
        let mut client = TestClient::new(test.into_app());

        let response = client.get("/snippet/create").await;
        assert_eq!(response.status, StatusCode::FOUND);
        assert_eq!(response.location(), Some("/user/login"));

        let response = client
            .post_form(
                "/snippet/create",
                &[("title", "Title"), ("content", "Content"), ("expires", "7")],
            )
            .await;
        assert_eq!(response.status, StatusCode::FOUND);
        assert_eq!(response.location(), Some("/user/login"));

        Ok(())
    }

    /// Expect the form with a year expiry preselected
    #[tokio::test]
    async fn shows_form() -> Result<(), TestError> {
        let mut client = logged_in_client().await?;

        let response = client.get("/snippet/create").await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains(r#"action="/snippet/create""#));
        assert!(response.body.contains(r#"value="365" checked"#));

        Ok(())
    }

    /// Expect a redirect to the new snippet and a flash shown exactly once
    #[tokio::test]
    async fn stores_valid_snippet() -> Result<(), TestError> {
        let mut client = logged_in_client().await?;

        let response = client
            .post_form(
                "/snippet/create",
                &[
                    ("title", "O snail"),
                    ("content", "Climb Mount Fuji, but slowly, slowly!"),
                    ("expires", "7"),
                ],
            )
            .await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);
        assert_eq!(response.location(), Some("/snippet/1"));

        let response = client.get("/snippet/1").await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("O snail"));
        assert!(response.body.contains("Snippet successfully created!"));

        let response = client.get("/snippet/1").await;
        assert!(!response.body.contains("Snippet successfully created!"));

        Ok(())
    }

    /// Expect the form again with errors and the submitted values
    #[tokio::test]
    async fn rerenders_invalid_form() -> Result<(), TestError> {
        let mut client = logged_in_client().await?;
        let long_title = "a".repeat(101);

        let response = client
            .post_form(
                "/snippet/create",
                &[
                    ("title", long_title.as_str()),
                    ("content", "   "),
                    ("expires", "30"),
                ],
            )
            .await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response
            .body
            .contains("This field is too long (maximum is 100 characters)"));
        assert!(response.body.contains("This field cannot be blank"));
        assert!(response.body.contains("This field is invalid"));
        assert!(response.body.contains(&long_title));

        let response = client.get("/").await;
        assert!(response.body.contains("nothing to see here"));

        Ok(())
    }
}
