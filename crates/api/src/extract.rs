//! Request body extractor that decodes JSON and runs `validator` rules.

use allnote_core::error::CoreError;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has passed its `#[validate(...)]` rules.
///
/// Malformed JSON is a 400 `BAD_REQUEST`; a rule violation is a 400
/// `VALIDATION_ERROR` naming the offending field.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(CoreError::from)?;
        Ok(Self(value))
    }
}
