//! Minimal browser stand-in for driving the router in tests.
//!
//! Keeps a cookie jar across requests so session and CSRF cookies behave the way they would in a
//! browser, and fills in the CSRF form field from the jar on form submissions.

use std::collections::HashMap;

use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use snippetbox::server::middleware::csrf::{CSRF_COOKIE_NAME, CSRF_FORM_FIELD};
use tower::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Redirect target, if any
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }
}

pub struct TestClient {
    app: Router,
    cookies: HashMap<String, String>,
}

impl TestClient {
    pub fn new(app: Router) -> Self {
        Self {
            app,
            cookies: HashMap::new(),
        }
    }

    /// Value of a cookie currently held in the jar
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    pub async fn get(&mut self, path: &str) -> TestResponse {
        let request = Request::get(path);
        self.send(request, Body::empty()).await
    }

    /// Submits a form, adding the CSRF token from the jar
    ///
    /// Panics if no page has been loaded yet to issue a CSRF cookie.
    pub async fn post_form(&mut self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let token = self
            .cookie(CSRF_COOKIE_NAME)
            .expect("load a page before submitting a form")
            .to_string();

        let mut fields = fields.to_vec();
        fields.push((CSRF_FORM_FIELD, &token));

        self.post_form_raw(path, &fields).await
    }

    /// Submits a form exactly as given, without adding a CSRF token
    pub async fn post_form_raw(&mut self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = serde_urlencoded::to_string(fields).unwrap();
        let request = Request::post(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");

        self.send(request, Body::from(body)).await
    }

    async fn send(&mut self, mut request: axum::http::request::Builder, body: Body) -> TestResponse {
        if !self.cookies.is_empty() {
            let cookie_header = self
                .cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ");
            request = request.header(header::COOKIE, cookie_header);
        }

        let response = self
            .app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        for set_cookie in response.headers().get_all(header::SET_COOKIE) {
            let set_cookie = set_cookie.to_str().unwrap();
            let (name, value) = set_cookie
                .split(';')
                .next()
                .and_then(|pair| pair.split_once('='))
                .unwrap();

            if set_cookie.contains("Max-Age=0") {
                self.cookies.remove(name);
            } else {
                self.cookies.insert(name.to_string(), value.to_string());
            }
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

/// Loads the login page and signs in, returning the login response
pub async fn login(client: &mut TestClient, email: &str, password: &str) -> TestResponse {
    client.get("/user/login").await;
    client
        .post_form("/user/login", &[("email", email), ("password", password)])
        .await
}
