use crate::DecodeStep;
use crate::graphql_literal;
use crate::node::Node;

/// An inline fragment with a type condition: `... on TypeName { <children> }`.
///
/// Inline fragments do not add a level to the response, so the children's
/// decode steps are handed to the parent as-is.
#[derive(Debug)]
pub struct IfType<T> {
    children: Vec<Node<T>>,
    decode_steps: Vec<DecodeStep<T>>,
    fragment: String,
    type_name: String,
}
impl<T> IfType<T> {
    pub fn new(type_name: impl Into<String>, children: Vec<Node<T>>) -> Self {
        let type_name = type_name.into();
        let fragment = format!(
            "... on {type_name} {}",
            graphql_literal::selection_set(children.iter().map(Node::fragment)),
        );
        let decode_steps =
            children.iter()
                .flat_map(|child| child.decode_steps().iter().cloned())
                .collect();

        Self {
            children,
            decode_steps,
            fragment,
            type_name,
        }
    }

    pub fn children(&self) -> &[Node<T>] {
        self.children.as_slice()
    }

    pub fn decode_steps(&self) -> &[DecodeStep<T>] {
        self.decode_steps.as_slice()
    }

    pub fn fragment(&self) -> &str {
        self.fragment.as_str()
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
