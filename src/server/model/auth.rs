//! Request extensions set by the middleware chain.

use crate::model::user::UserDto;

/// Request extension holding the user resolved from the session by the authenticate middleware.
///
/// Absent for anonymous requests.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser(pub UserDto);

/// Request extension holding the CSRF token issued for this request.
///
/// Pages embed it in a hidden `csrf_token` field of every form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsrfToken(pub String);
