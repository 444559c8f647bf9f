use crate::DecodePath;
use crate::ResponseError;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Reasons a response document could not be decoded into a result value.
///
/// Any of these aborts the whole decode: there are no partial results.
/// An optional key that is absent is not an error at all; its target is
/// simply left unset.
#[derive(Clone, Debug, Error)]
pub enum DecodeError {
    #[error(
        "Response is missing the `{missing}` envelope key expected around \
        every node lookup{}",
        describe_response_errors(.errors),
    )]
    EnvelopeMismatch {
        /// The first of `data` / `node` that was absent (or `null`).
        missing: &'static str,
        /// Any GraphQL `errors` the server reported alongside the response.
        errors: Vec<ResponseError>,
    },

    #[error("Response body is not valid JSON: {0}")]
    InvalidJson(Arc<serde_json::Error>),

    #[error("Required key `{key}` is absent at `{path}`")]
    MissingRequiredKey {
        key: String,
        path: DecodePath,
    },

    #[error(
        "Value at `{path}` does not match the declared `{expected}` type: \
        {detail}"
    )]
    TypeMismatch {
        detail: String,
        expected: String,
        path: DecodePath,
    },
}
impl DecodeError {
    /// The location in the response document at which decoding failed, if
    /// the failure happened past the envelope.
    pub fn path(&self) -> Option<&DecodePath> {
        match self {
            Self::MissingRequiredKey { path, .. }
                | Self::TypeMismatch { path, .. } => Some(path),
            Self::EnvelopeMismatch { .. }
                | Self::InvalidJson(_) => None,
        }
    }

    pub(crate) fn type_mismatch(
        expected: impl Into<String>,
        found: &Value,
        path: &DecodePath,
    ) -> Self {
        Self::TypeMismatch {
            detail: format!("found {}", json_kind(found)),
            expected: expected.into(),
            path: path.clone(),
        }
    }
}
impl std::convert::From<serde_json::Error> for DecodeError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidJson(Arc::new(value))
    }
}

fn describe_response_errors(errors: &[ResponseError]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    format!(
        " (server reported: {})",
        errors.iter()
            .map(|err| format!("`{}`", err.message()))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "an array",
        Value::Bool(_) => "a boolean",
        Value::Null => "null",
        Value::Number(_) => "a number",
        Value::Object(_) => "an object",
        Value::String(_) => "a string",
    }
}
