//! Signup, login and logout handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};

use crate::server::{
    controller::util::form::PostForm,
    error::{model::ModelError, Error},
    form::{Form, EMAIL_RX, GENERIC_ERROR_KEY},
    model::{
        app::AppState,
        scope::RequestScope,
        session::{flash::SessionFlash, user::SessionUserId},
    },
    render::{render, Page, LOGIN_PAGE, SIGNUP_PAGE},
};

/// Shortest password accepted at signup, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 5;

/// Displays an empty signup form
pub async fn signup_user_form(
    State(state): State<AppState>,
    scope: RequestScope,
) -> Result<Response, Error> {
    render(&state, &scope, SIGNUP_PAGE, Page::Form(Form::empty())).await
}

/// Registers a new user
///
/// # Responses
/// - 303 (See Other): User created, redirect to the login page with a flash message
/// - 200 (Success): Validation failed or the email is taken, form rendered again with errors
/// - 4xx (Client Error): Body is not a decodable form
/// - 500 (Internal Server Error): The user store failed
pub async fn signup_user(
    State(state): State<AppState>,
    scope: RequestScope,
    PostForm(mut form): PostForm,
) -> Result<Response, Error> {
    form.required(&["name", "email", "password"])
        .matches_pattern("email", &EMAIL_RX)
        .min_length("password", MIN_PASSWORD_LENGTH);

    if !form.is_valid() {
        return render(&state, &scope, SIGNUP_PAGE, Page::Form(form)).await;
    }

    let result = state
        .users
        .insert(form.get("name"), form.get("email"), form.get("password"))
        .await;

    match result {
        Ok(()) => {}
        Err(ModelError::DuplicateEmail) => {
            form.errors.add("email", "Address is already in use");

            return render(&state, &scope, SIGNUP_PAGE, Page::Form(form)).await;
        }
        Err(err) => return Err(err.into()),
    }

    SessionFlash::insert(&scope.session, "Your signup was successful. Please log in.").await?;

    Ok(Redirect::to("/user/login").into_response())
}

/// Displays an empty login form
pub async fn login_user_form(
    State(state): State<AppState>,
    scope: RequestScope,
) -> Result<Response, Error> {
    render(&state, &scope, LOGIN_PAGE, Page::Form(Form::empty())).await
}

/// Logs a user in
///
/// The session ID is cycled before the user ID is stored so a session fixed before login cannot
/// be reused.
///
/// # Responses
/// - 303 (See Other): Credentials valid, redirect to the create snippet page
/// - 200 (Success): Credentials invalid, form rendered again with a generic error
/// - 4xx (Client Error): Body is not a decodable form
/// - 500 (Internal Server Error): The user store or session failed
pub async fn login_user(
    State(state): State<AppState>,
    scope: RequestScope,
    PostForm(mut form): PostForm,
) -> Result<Response, Error> {
    let result = state
        .users
        .authenticate(form.get("email"), form.get("password"))
        .await;

    let user_id = match result {
        Ok(user_id) => user_id,
        Err(ModelError::InvalidCredentials) => {
            form.errors
                .add(GENERIC_ERROR_KEY, "Email or Password is incorrect");

            return render(&state, &scope, LOGIN_PAGE, Page::Form(form)).await;
        }
        Err(err) => return Err(err.into()),
    };

    scope.session.cycle_id().await?;
    SessionUserId::insert(&scope.session, user_id).await?;

    Ok(Redirect::to("/snippet/create").into_response())
}

/// Logs the current user out
///
/// The session ID is cycled as well, the flash message carries over to the new ID.
///
/// # Responses
/// - 303 (See Other): User ID removed from the session, redirect home with a flash message
/// - 500 (Internal Server Error): The session could not be updated
pub async fn logout_user(scope: RequestScope) -> Result<Response, Error> {
    scope.session.cycle_id().await?;
    SessionUserId::remove(&scope.session).await?;
    SessionFlash::insert(&scope.session, "You've been logged out successfully!").await?;

    Ok(Redirect::to("/").into_response())
}
