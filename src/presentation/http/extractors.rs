//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::shared::{error::AppError, validation::validation_error};

/// JSON body that has been deserialized and validated.
///
/// Every rejection (wrong content type, malformed JSON, missing fields,
/// failed validation) becomes a 400 with an `{"error": ...}` body.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
            })?;

        value.validate().map_err(validation_error)?;

        Ok(ValidatedJson(value))
    }
}
