use crate::DecodeError;
use crate::DecodePath;
use crate::DecodeStep;
use crate::QueryRequest;
use crate::QueryTreeBuilder;
use crate::decoder;
use crate::graphql_literal;
use crate::node::IfType;
use crate::node::Node;
use serde_json::Value;

/// Everything needed to look up one result type by global ID: the query
/// fragment to send and the decode plan for what comes back.
///
/// The root is a type condition over the top-level nodes, so its fragment
/// reads `... on TypeName { <nodes> }` and (like any inline fragment) it
/// adds no level to the response.
#[derive(Debug)]
pub struct QueryTree<T> {
    root: IfType<T>,
}
impl<T: 'static> QueryTree<T> {
    /// Convenience wrapper around [`QueryTreeBuilder::new()`].
    pub fn builder(type_name: impl Into<String>) -> QueryTreeBuilder<T> {
        QueryTreeBuilder::new(type_name)
    }
}
impl<T> QueryTree<T> {
    pub fn new(type_name: impl Into<String>, nodes: Vec<Node<T>>) -> Self {
        Self {
            root: IfType::new(type_name, nodes),
        }
    }

    /// The flattened decode plan for a node of this type, relative to the
    /// node's own object.
    pub fn decode_steps(&self) -> &[DecodeStep<T>] {
        self.root.decode_steps()
    }

    /// `... on TypeName { <nodes> }`. This is also the sub-selection used
    /// wherever another type nests this one.
    pub fn fragment(&self) -> &str {
        self.root.fragment()
    }

    /// The top-level nodes, in declaration order.
    pub fn nodes(&self) -> &[Node<T>] {
        self.root.children()
    }

    /// Render the lookup query for the node with global ID `id`:
    /// `query { node(id: "<id>") { <fragment> } }`.
    pub fn render(&self, id: &str) -> String {
        format!(
            "query {{ node(id: {}) {} }}",
            graphql_literal::string_value(id),
            graphql_literal::selection_set([self.fragment()]),
        )
    }

    /// The POST body carrying [`QueryTree::render`]'s output.
    pub fn request(&self, id: &str) -> QueryRequest {
        QueryRequest::new(self.render(id))
    }

    pub fn type_name(&self) -> &str {
        self.root.type_name()
    }
}
impl<T: Default> QueryTree<T> {
    /// Decode a complete response document. The `data` and `node` envelope
    /// keys are consumed before this tree's decode steps are applied.
    pub fn decode(&self, response: &Value) -> Result<T, DecodeError> {
        log::debug!(
            "Decoding a `{}` response with {} top-level decode steps.",
            self.type_name(),
            self.decode_steps().len(),
        );
        let mut path = DecodePath::new();
        let node = decoder::unwrap_envelope(response, &mut path)?;
        self.decode_object_at(node, &mut path)
    }

    /// Decode the node object itself, with no envelope around it. This is
    /// how a nested type is decoded from its parent's field value.
    pub fn decode_object(&self, object: &Value) -> Result<T, DecodeError> {
        self.decode_object_at(object, &mut DecodePath::new())
    }

    /// Parse `body` as JSON and [`decode`](QueryTree::decode) it.
    pub fn decode_str(&self, body: &str) -> Result<T, DecodeError> {
        let response: Value = serde_json::from_str(body)?;
        self.decode(&response)
    }

    pub(crate) fn decode_object_at(
        &self,
        object: &Value,
        path: &mut DecodePath,
    ) -> Result<T, DecodeError> {
        let mut decoded = T::default();
        decoder::apply_steps(self.decode_steps(), &mut decoded, object, path)?;
        Ok(decoded)
    }
}
