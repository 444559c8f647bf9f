//! The seam between query trees and whatever actually talks to the server.
//!
//! This crate ships no HTTP client. A [`Transport`] implementation POSTs a
//! [`QueryRequest`] and hands back the parsed response body; [`NodeClient`]
//! chains render, transport and decode for a [`NodeType`].

use crate::DecodeError;
use crate::NodeType;
use crate::QueryRequest;
use serde_json::Value;
use std::future::Future;
use thiserror::Error;

/// Sends a [`QueryRequest`] and returns the parsed JSON response body.
///
/// Authentication, retries, timeouts and cancellation all belong to the
/// implementation.
pub trait Transport {
    type Error: std::error::Error + Send + Sync + 'static;

    fn execute(
        &self,
        request: &QueryRequest,
    ) -> impl Future<Output = Result<Value, Self::Error>> + Send;
}

/// Looks up [`NodeType`]s by global ID over a [`Transport`].
#[derive(Clone, Debug)]
pub struct NodeClient<Tr> {
    transport: Tr,
}
impl<Tr: Transport> NodeClient<Tr> {
    /// Fetch and decode the node with global ID `id` as a `T`.
    ///
    /// A decode failure is final for this response; re-issuing the query is
    /// up to the caller.
    pub async fn fetch<T: NodeType>(
        &self,
        id: &str,
    ) -> Result<T, FetchError<Tr::Error>> {
        let tree = T::query_tree();
        let request = tree.request(id);
        log::debug!("Fetching `{}` node `{id}`.", tree.type_name());
        log::trace!("Query: {}", request.query());

        let response =
            self.transport
                .execute(&request)
                .await
                .map_err(FetchError::Transport)?;

        Ok(tree.decode(&response)?)
    }

    pub fn new(transport: Tr) -> Self {
        Self {
            transport,
        }
    }

    pub fn transport(&self) -> &Tr {
        &self.transport
    }
}

#[derive(Debug, Error)]
pub enum FetchError<E> {
    #[error("Failed to decode the response: {0}")]
    Decode(#[from] DecodeError),

    #[error("Transport failed to execute the query: {0}")]
    Transport(#[source] E),
}
