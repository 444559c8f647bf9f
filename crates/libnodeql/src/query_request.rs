use serde::Deserialize;
use serde::Serialize;

/// The body a transport POSTs to the GraphQL endpoint: `{"query": "..."}`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct QueryRequest {
    pub(crate) query: String,
}
impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
