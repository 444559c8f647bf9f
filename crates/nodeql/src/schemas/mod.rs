//! The GitHub object types `nodeql` knows how to look up.

mod actor;
mod issue;
mod label;
mod pull_request;
mod repository;

pub(crate) use actor::Actor;
pub(crate) use issue::Issue;
pub(crate) use label::Label;
pub(crate) use pull_request::PullRequest;
pub(crate) use repository::Repository;

use indexmap::IndexMap;
use libnodeql::NodeType;
use libnodeql::QueryRequest;
use serde::Serialize;
use serde_json::Value;
use std::sync::LazyLock;

/// Type-erased access to one [`NodeType`]'s query tree.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SchemaEntry {
    decode_str: fn(&str) -> anyhow::Result<Value>,
    fragment: fn() -> &'static str,
    request: fn(&str) -> QueryRequest,
}
impl SchemaEntry {
    fn of<T: NodeType + Serialize>() -> Self {
        Self {
            decode_str: |body| {
                let decoded = T::query_tree().decode_str(body)?;
                Ok(serde_json::to_value(decoded)?)
            },
            fragment: || T::query_tree().fragment(),
            request: |id| T::query_tree().request(id),
        }
    }

    /// Decode a response body and re-serialize the typed result as JSON.
    pub(crate) fn decode_str(&self, body: &str) -> anyhow::Result<Value> {
        (self.decode_str)(body)
    }

    pub(crate) fn fragment(&self) -> &'static str {
        (self.fragment)()
    }

    pub(crate) fn request(&self, id: &str) -> QueryRequest {
        (self.request)(id)
    }
}

static REGISTRY: LazyLock<IndexMap<&'static str, SchemaEntry>> = LazyLock::new(|| {
    IndexMap::from([
        ("Actor", SchemaEntry::of::<Actor>()),
        ("Issue", SchemaEntry::of::<Issue>()),
        ("Label", SchemaEntry::of::<Label>()),
        ("PullRequest", SchemaEntry::of::<PullRequest>()),
        ("Repository", SchemaEntry::of::<Repository>()),
    ])
});

/// All bundled schemas, keyed by GraphQL type name.
pub(crate) fn registry() -> &'static IndexMap<&'static str, SchemaEntry> {
    &REGISTRY
}

pub(crate) fn lookup(type_name: &str) -> anyhow::Result<&'static SchemaEntry> {
    registry().get(type_name).ok_or_else(|| anyhow::anyhow!(
        "Unknown type `{type_name}`. Known types: {}",
        registry().keys()
            .map(|name| format!("`{name}`"))
            .collect::<Vec<_>>()
            .join(", "),
    ))
}

#[cfg(test)]
pub(crate) mod tests;
