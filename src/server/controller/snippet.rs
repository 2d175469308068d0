//! Snippet listing, detail and creation handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::server::{
    controller::util::form::PostForm,
    error::Error,
    form::Form,
    model::{app::AppState, scope::RequestScope, session::flash::SessionFlash},
    render::{render, Page, CREATE_PAGE, HOME_PAGE, SHOW_PAGE},
};

/// Accepted values of the `expires` field, in days.
pub const PERMITTED_EXPIRY_DAYS: [&str; 3] = ["365", "7", "1"];
/// Longest snippet title accepted, in characters.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Lists the latest snippets
///
/// # Responses
/// - 200 (Success): Home page with up to ten snippets which have not expired
/// - 500 (Internal Server Error): The snippet store failed
pub async fn home(State(state): State<AppState>, scope: RequestScope) -> Result<Response, Error> {
    let snippets = state.snippets.latest().await?;

    render(&state, &scope, HOME_PAGE, Page::Snippets(snippets)).await
}

/// Shows one snippet
///
/// # Responses
/// - 200 (Success): Snippet detail page
/// - 404 (Not Found): ID is not a positive integer, or no live snippet has that ID
/// - 500 (Internal Server Error): The snippet store failed
pub async fn show_snippet(
    State(state): State<AppState>,
    scope: RequestScope,
    Path(id): Path<String>,
) -> Result<Response, Error> {
    let id = match id.parse::<i32>() {
        Ok(id) if id >= 1 => id,
        _ => return Err(Error::NotFound),
    };

    let snippet = state.snippets.get(id).await?;

    render(&state, &scope, SHOW_PAGE, Page::Snippet(snippet)).await
}

/// Displays an empty snippet form
pub async fn create_snippet_form(
    State(state): State<AppState>,
    scope: RequestScope,
) -> Result<Response, Error> {
    render(&state, &scope, CREATE_PAGE, Page::Form(Form::empty())).await
}

/// Validates and stores a new snippet
///
/// # Responses
/// - 303 (See Other): Snippet stored, redirect to its detail page with a flash message
/// - 200 (Success): Validation failed, form rendered again with errors and submitted values
/// - 4xx (Client Error): Body is not a decodable form
/// - 500 (Internal Server Error): The snippet store failed
pub async fn create_snippet(
    State(state): State<AppState>,
    scope: RequestScope,
    PostForm(mut form): PostForm,
) -> Result<Response, Error> {
    form.required(&["title", "content", "expires"])
        .max_length("title", MAX_TITLE_LENGTH)
        .permitted_values("expires", &PERMITTED_EXPIRY_DAYS);

    if !form.is_valid() {
        return render(&state, &scope, CREATE_PAGE, Page::Form(form)).await;
    }

    let expires_in_days = form
        .get("expires")
        .parse::<i64>()
        .map_err(|_| Error::ClientError(StatusCode::BAD_REQUEST))?;

    let id = state
        .snippets
        .insert(form.get("title"), form.get("content"), expires_in_days)
        .await?;

    SessionFlash::insert(&scope.session, "Snippet successfully created!").await?;

    Ok(Redirect::to(&format!("/snippet/{}", id)).into_response())
}
