use crate::QueryTree;
use crate::node::Node;

/// Accumulates a type's top-level [`Node`]s in declaration order and then
/// produces its [`QueryTree`].
///
/// Declaration order is the only ordering there is: it fixes both the order
/// fields appear in the query and the order decode steps run.
#[derive(Debug)]
pub struct QueryTreeBuilder<T> {
    nodes: Vec<Node<T>>,
    type_name: String,
}
impl<T> QueryTreeBuilder<T> {
    /// Add a [`Node`] after any previously added `Node`s.
    pub fn add_node(mut self, node: Node<T>) -> Self {
        self.nodes.push(node);
        self
    }

    /// Add each of `nodes` (in order) after any previously added `Node`s.
    pub fn add_nodes(mut self, nodes: impl IntoIterator<Item = Node<T>>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    /// Consume this [`QueryTreeBuilder`] to produce a [`QueryTree`].
    pub fn build(self) -> QueryTree<T> {
        QueryTree::new(self.type_name, self.nodes)
    }

    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![],
            type_name: type_name.into(),
        }
    }
}
