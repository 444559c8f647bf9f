//! Declarative, node-lookup GraphQL queries with a mirrored decode plan.
//!
//! A [`QueryTree`] is built once per result type from an ordered list of
//! [`Node`]s. The same traversal that renders the query fragment also
//! produces the [`DecodeStep`]s that turn the matching JSON response back
//! into a value of that type, so the two can never drift apart.

mod decode_error;
mod decode_path;
mod decode_step;
mod decoder;
mod graphql_literal;
pub mod node;
mod node_type;
mod query_request;
mod query_tree;
mod query_tree_builder;
mod response_error;
mod target;
pub mod transport;

pub use decode_error::DecodeError;
pub use decode_path::DecodePath;
pub use decode_path::PathSegment;
pub use decode_step::DecodeAction;
pub use decode_step::DecodeStep;
pub use node::Node;
pub use node_type::NodeType;
pub use query_request::QueryRequest;
pub use query_tree::QueryTree;
pub use query_tree_builder::QueryTreeBuilder;
pub use response_error::ResponseError;
pub use target::Target;

#[cfg(test)]
mod tests;
