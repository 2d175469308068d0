//! Form body extractor.

use axum::extract::{FromRequest, Request};

use crate::server::{error::Error, form::Form};

/// Extracts an `application/x-www-form-urlencoded` request body into a [`Form`].
///
/// A body which cannot be decoded is rejected with the client error status axum reports for it,
/// e.g. 415 for the wrong content type or 400 for malformed encoding.
pub struct PostForm(pub Form);

impl<S> FromRequest<S> for PostForm
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Form(pairs) = axum::Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Rejected form body: {}", rejection.body_text());

                Error::ClientError(rejection.status())
            })?;

        Ok(Self(Form::new(pairs)))
    }
}
