//! Server-side HTML rendering.
//!
//! Pages are [maud](https://maud.lambda.xyz/) functions compiled into the binary and registered
//! by name in a [`TemplateCache`]. Every page receives the same [`TemplateData`] envelope: the
//! authenticated user, the CSRF token, a popped flash message, the current year, and a
//! page-specific [`Page`] payload. All dynamic values are escaped by maud.
//!
//! A page is rendered into a complete string before anything is written to the response, so a
//! failing template never produces a half-written page.

pub mod layout;
pub mod pages;

use std::collections::HashMap;

use axum::response::{Html, IntoResponse, Response};
use chrono::{Datelike, NaiveDateTime, Utc};
use maud::Markup;

use crate::{
    model::{snippet::SnippetDto, user::UserDto},
    server::{
        error::{render::RenderError, Error},
        form::Form,
        model::{app::AppState, scope::RequestScope, session::flash::SessionFlash},
    },
};

/// Latest snippets.
pub const HOME_PAGE: &str = "home.page";
/// Snippet detail.
pub const SHOW_PAGE: &str = "show.page";
/// New snippet form.
pub const CREATE_PAGE: &str = "create.page";
/// Registration form.
pub const SIGNUP_PAGE: &str = "signup.page";
/// Login form.
pub const LOGIN_PAGE: &str = "login.page";

/// A compiled page. Fails if handed a [`Page`] payload it does not know how to display.
pub type Template = fn(&TemplateData) -> Result<Markup, RenderError>;

/// Page-specific payload carried by [`TemplateData`].
#[derive(Clone, Debug, Default)]
pub enum Page {
    /// No page data
    #[default]
    Empty,
    /// One snippet, for the detail page
    Snippet(SnippetDto),
    /// Snippet list, for the home page
    Snippets(Vec<SnippetDto>),
    /// Submitted or empty form, for the form pages
    Form(Form),
}

impl Page {
    /// Name of the variant, reported when a page is handed the wrong payload.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Snippet(_) => "snippet",
            Self::Snippets(_) => "snippets",
            Self::Form(_) => "form",
        }
    }
}

/// Data envelope passed to every page.
#[derive(Clone, Debug, Default)]
pub struct TemplateData {
    /// Logged in user, drives the navigation links
    pub authenticated_user: Option<UserDto>,
    /// Value for the hidden CSRF field of every form
    pub csrf_token: String,
    /// One-time message popped from the session
    pub flash: Option<String>,
    /// Year shown in the footer
    pub current_year: i32,
    /// Page-specific payload
    pub page: Page,
}

/// Lookup table from page name to compiled page.
pub struct TemplateCache {
    templates: HashMap<&'static str, Template>,
}

impl TemplateCache {
    /// Creates a cache with every application page registered.
    pub fn new() -> Self {
        let mut cache = Self::empty();
        cache.insert(HOME_PAGE, pages::snippet::home);
        cache.insert(SHOW_PAGE, pages::snippet::show);
        cache.insert(CREATE_PAGE, pages::snippet::create);
        cache.insert(SIGNUP_PAGE, pages::user::signup);
        cache.insert(LOGIN_PAGE, pages::user::login);

        cache
    }

    /// Creates a cache with no pages registered.
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Registers `template` under `name`, replacing any page already registered there.
    pub fn insert(&mut self, name: &'static str, template: Template) {
        self.templates.insert(name, template);
    }

    /// Renders the page registered as `name` into a complete HTML document.
    ///
    /// # Returns
    /// - `Ok(String)` - Rendered page
    /// - `Err(RenderError::TemplateNotFound)` - No page is registered as `name`
    /// - `Err(RenderError::UnexpectedPayload)` - The page rejected `data.page`
    pub fn render(&self, name: &str, data: &TemplateData) -> Result<String, RenderError> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| RenderError::TemplateNotFound(name.to_string()))?;

        Ok(template(data)?.into_string())
    }
}

impl Default for TemplateCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders `name` for the current request and wraps it in an HTML response.
///
/// Fills the envelope from the request scope and pops the session's flash message, so the
/// message is shown exactly once.
pub async fn render(
    state: &AppState,
    scope: &RequestScope,
    name: &str,
    page: Page,
) -> Result<Response, Error> {
    let data = TemplateData {
        authenticated_user: scope.authenticated_user.clone(),
        csrf_token: scope.csrf_token.0.clone(),
        flash: SessionFlash::pop(&scope.session).await?,
        current_year: Utc::now().year(),
        page,
    };

    let body = state.templates.render(name, &data)?;

    Ok(Html(body).into_response())
}

/// Formats a timestamp the way every page displays dates, e.g. `17 Oct 2025 at 09:30`.
pub fn human_date(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%d %b %Y at %H:%M").to_string()
}
