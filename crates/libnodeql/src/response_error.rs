use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// An entry of the top-level `errors` array a GraphQL server may return
/// alongside (or instead of) `data`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ResponseError {
    #[serde(default)]
    pub(crate) extensions: IndexMap<String, Value>,
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) path: Vec<Value>,
    #[serde(default, rename = "type")]
    pub(crate) error_type: Option<String>,
}
impl ResponseError {
    /// A server-specific classification of the error, e.g. GitHub's
    /// `NOT_FOUND`.
    pub fn error_type(&self) -> Option<&str> {
        self.error_type.as_deref()
    }

    pub fn extensions(&self) -> &IndexMap<String, Value> {
        &self.extensions
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn path(&self) -> &Vec<Value> {
        &self.path
    }

    /// Collect the `errors` array of a response document. Entries that do
    /// not look like GraphQL errors are skipped.
    pub(crate) fn all_from_response(response: &Value) -> Vec<Self> {
        let Some(Value::Array(entries)) = response.get("errors") else {
            return vec![];
        };

        entries.iter()
            .filter_map(|entry| Self::deserialize(entry).ok())
            .collect()
    }
}
