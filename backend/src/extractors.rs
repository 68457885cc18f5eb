//! Request body extraction with schema validation

use crate::error::ApiError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use portfolio_shared::validate_payload;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::Validate;

/// JSON body that has been deserialized and checked against its declared
/// constraints.
///
/// Wrong types, unknown fields and constraint violations are reported
/// together, one `"field: message"` entry per offending field.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        let value = decode_payload::<T>(body)?;
        validate_payload(&value).map_err(ApiError::Validation)?;

        Ok(Self(value))
    }
}

/// Numeric `:id` path segment. Anything that is not an integer is a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityId(pub i32);

#[axum::async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::BadRequest("Missing id".to_string()))?;

        raw.parse::<i32>()
            .map(EntityId)
            .map_err(|_| ApiError::BadRequest(format!("Invalid id '{}'", raw)))
    }
}

/// Deserialize a request body, collecting every field with the wrong shape.
///
/// Each top-level field is checked on its own. Fields that fail are left out
/// and the rest of the payload is still run through its constraints, so a
/// single response lists both kinds of problem.
fn decode_payload<T>(body: Value) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    let whole_error = match serde_json::from_value::<T>(body.clone()) {
        Ok(value) => return Ok(value),
        Err(e) => e.to_string(),
    };

    // Per-field checks only make sense when every field is optional on its own
    let Value::Object(fields) = body else {
        return Err(ApiError::Validation(vec![whole_error]));
    };
    if serde_json::from_value::<T>(Value::Object(Map::new())).is_err() {
        return Err(ApiError::Validation(vec![whole_error]));
    }

    let mut rejected = Vec::new();
    let mut details = Vec::new();
    let mut accepted = Map::new();

    for (key, value) in fields {
        let mut single = Map::new();
        single.insert(key.clone(), value);

        match serde_json::from_value::<T>(Value::Object(single.clone())) {
            Ok(_) => accepted.extend(single),
            Err(e) => {
                details.push(format!("{}: {}", key, e));
                rejected.push(key);
            }
        }
    }

    let remainder = serde_json::from_value::<T>(Value::Object(accepted))
        .map_err(|e| ApiError::Validation(vec![e.to_string()]))?;

    if let Err(messages) = validate_payload(&remainder) {
        // A dropped field falls back to its default, which is not worth a second message
        details.extend(messages.into_iter().filter(|message| {
            message
                .split_once(':')
                .map_or(true, |(field, _)| !rejected.iter().any(|r| r == field))
        }));
    }

    if details.is_empty() {
        details.push(whole_error);
    }
    details.sort();

    Err(ApiError::Validation(details))
}

fn rejection_to_error(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonSyntaxError(_) => ApiError::BadRequest("Malformed JSON body".to_string()),
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::BadRequest("Expected Content-Type: application/json".to_string())
        }
        other => ApiError::BadRequest(other.body_text()),
    }
}
