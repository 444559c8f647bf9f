use crate::DecodeStep;
use crate::graphql_literal;
use crate::node::Node;

/// A container field: `name { <children> }`.
///
/// It has no target of its own. Its children write into the same result
/// value as their siblings, one JSON level further down.
#[derive(Debug)]
pub struct NestedField<T> {
    children: Vec<Node<T>>,
    decode_step: DecodeStep<T>,
    fragment: String,
    name: String,
}
impl<T> NestedField<T> {
    pub fn new(name: impl Into<String>, children: Vec<Node<T>>) -> Self {
        let name = name.into();
        let fragment = format!(
            "{name} {}",
            graphql_literal::selection_set(children.iter().map(Node::fragment)),
        );
        let decode_step = DecodeStep::container(
            &name,
            children.iter()
                .flat_map(|child| child.decode_steps().iter().cloned())
                .collect(),
        );

        Self {
            children,
            decode_step,
            fragment,
            name,
        }
    }

    pub fn children(&self) -> &[Node<T>] {
        self.children.as_slice()
    }

    pub fn decode_step(&self) -> &DecodeStep<T> {
        &self.decode_step
    }

    pub fn fragment(&self) -> &str {
        self.fragment.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
