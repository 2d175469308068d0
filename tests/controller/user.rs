use axum::http::StatusCode;
use snippetbox_test_utils::prelude::*;

use crate::util::{
    client::{login, TestClient},
    TestContextExt,
};

mod signup {
    use super::*;

    /// Expect a redirect to login with a success flash, then a working login
    #[tokio::test]
    async fn registers_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_snippet_tables()
            .with_user_tables()
            .build()
            .await?;
        let mut client = TestClient::new(test.into_app());

        client.get("/user/signup").await;
        let response = client
            .post_form(
                "/user/signup",
                &[
                    ("name", "Bob"),
                    ("email", "bob@example.com"),
                    ("password", "validPa$$word"),
                ],
            )
            .await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);
        assert_eq!(response.location(), Some("/user/login"));

        let response = client.get("/user/login").await;
        assert!(response
            .body
            .contains("Your signup was successful. Please log in."));

        let response = login(&mut client, "bob@example.com", "validPa$$word").await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);

        Ok(())
    }

    /// Expect the form again with an error when the email is taken
    #[tokio::test]
    async fn rejects_duplicate_email() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_snippet_tables()
            .with_mock_user(TEST_USER_NAME, TEST_USER_EMAIL, TEST_USER_PASSWORD)
            .build()
            .await?;
        let mut client = TestClient::new(test.into_app());

        client.get("/user/signup").await;
        let response = client
            .post_form(
                "/user/signup",
                &[
                    ("name", "Another Alice"),
                    ("email", TEST_USER_EMAIL),
                    ("password", "validPa$$word"),
                ],
            )
            .await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("Address is already in use"));
        assert!(response.body.contains("Another Alice"));

        Ok(())
    }

    /// Expect field errors without echoing the password
    #[tokio::test]
    async fn rejects_invalid_fields() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_snippet_tables()
            .with_user_tables()
            .build()
            .await?;
        let mut client = TestClient::new(test.into_app());

        client.get("/user/signup").await;
        let response = client
            .post_form(
                "/user/signup",
                &[
                    ("name", ""),
                    ("email", "bob@example."),
                    ("password", "pa$$"),
                ],
            )
            .await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("This field cannot be blank"));
        assert!(response.body.contains("This field is invalid"));
        assert!(response
            .body
            .contains("This field is too short (minimum is 5 characters)"));
        assert!(!response.body.contains("pa$$"));

        Ok(())
    }
}

mod login {
    use super::*;

    async fn client_with_user() -> Result<TestClient, TestError> {
        let test = TestBuilder::new()
            .with_snippet_tables()
            .with_mock_user(TEST_USER_NAME, TEST_USER_EMAIL, TEST_USER_PASSWORD)
            .build()
            .await?;

        Ok(TestClient::new(test.into_app()))
    }

    /// Expect a redirect to the create page and access to protected routes
    #[tokio::test]
    async fn authenticates_user() -> Result<(), TestError> {
        let mut client = client_with_user().await?;

        let response = login(&mut client, TEST_USER_EMAIL, TEST_USER_PASSWORD).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);
        assert_eq!(response.location(), Some("/snippet/create"));

        let response = client.get("/snippet/create").await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains(TEST_USER_NAME));

        Ok(())
    }

    /// Expect the session ID issued before login to be replaced
    #[tokio::test]
    async fn cycles_session_id() -> Result<(), TestError> {
        let mut client = client_with_user().await?;

        login(&mut client, TEST_USER_EMAIL, TEST_USER_PASSWORD).await;
        client.post_form("/user/logout", &[]).await;
        let before = client.cookie("id").map(str::to_string);
        assert!(before.is_some());

        login(&mut client, TEST_USER_EMAIL, TEST_USER_PASSWORD).await;
        let after = client.cookie("id").map(str::to_string);

        assert!(after.is_some());
        assert_ne!(before, after);

        Ok(())
    }

    /// Expect a generic error for a wrong password or unknown email
    #[tokio::test]
    async fn rejects_invalid_credentials() -> Result<(), TestError> {
        let mut client = client_with_user().await?;

        for (email, password) in [
            (TEST_USER_EMAIL, "wrong password"),
            ("nobody@example.com", TEST_USER_PASSWORD),
            ("", ""),
        ] {
            let response = login(&mut client, email, password).await;
            assert_eq!(response.status, StatusCode::OK);
            assert!(response.body.contains("Email or Password is incorrect"));
        }

        let response = client.get("/snippet/create").await;
        assert_eq!(response.status, StatusCode::FOUND);
        assert_eq!(response.location(), Some("/user/login"));

        Ok(())
    }
}

mod logout {
    use super::*;

    /// Expect a redirect home with a flash and protected routes closed again
    #[tokio::test]
    async fn logs_user_out() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_snippet_tables()
            .with_mock_user(TEST_USER_NAME, TEST_USER_EMAIL, TEST_USER_PASSWORD)
            .build()
            .await?;
        let mut client = TestClient::new(test.into_app());
        login(&mut client, TEST_USER_EMAIL, TEST_USER_PASSWORD).await;

        let response = client.post_form("/user/logout", &[]).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);
        assert_eq!(response.location(), Some("/"));

        let response = client.get("/").await;
        assert!(response.body.contains("logged out successfully"));
        assert!(!response.body.contains("Create snippet"));

        let response = client.get("/snippet/create").await;
        assert_eq!(response.status, StatusCode::FOUND);

        Ok(())
    }

    /// Expect a fresh session ID after logout that still carries the flash
    #[tokio::test]
    async fn cycles_session_id() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_snippet_tables()
            .with_mock_user(TEST_USER_NAME, TEST_USER_EMAIL, TEST_USER_PASSWORD)
            .build()
            .await?;
        let mut client = TestClient::new(test.into_app());
        login(&mut client, TEST_USER_EMAIL, TEST_USER_PASSWORD).await;
        let before = client.cookie("id").map(str::to_string);
        assert!(before.is_some());

        let response = client.post_form("/user/logout", &[]).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);
        let after = client.cookie("id").map(str::to_string);

        assert!(after.is_some());
        assert_ne!(before, after);

        let response = client.get("/").await;
        assert!(response.body.contains("logged out successfully"));

        Ok(())
    }

    /// Expect anonymous logout to redirect to the login page
    #[tokio::test]
    async fn requires_authentication() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_snippet_tables()
            .with_user_tables()
            .build()
            .await?;
        let mut client = TestClient::new(test.into_app());

        client.get("/").await;
        let response = client.post_form("/user/logout", &[]).await;

        assert_eq!(response.status, StatusCode::FOUND);
        assert_eq!(response.location(), Some("/user/login"));

        Ok(())
    }
}
