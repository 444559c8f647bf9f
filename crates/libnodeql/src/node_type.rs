use crate::DecodeError;
use crate::QueryTree;
use serde_json::Value;

/// A result type that can be looked up by global ID.
///
/// Each implementation ties the type to exactly one [`QueryTree`], built
/// once and kept in a static:
///
/// ```
/// use libnodeql::Node;
/// use libnodeql::NodeType;
/// use libnodeql::QueryTree;
/// use libnodeql::Target;
/// use std::sync::LazyLock;
///
/// #[derive(Debug, Default)]
/// struct Label {
///     name: String,
/// }
/// impl NodeType for Label {
///     fn query_tree() -> &'static QueryTree<Self> {
///         static TREE: LazyLock<QueryTree<Label>> = LazyLock::new(|| {
///             QueryTree::new("Label", vec![
///                 Node::field("name", Target::value(|label: &mut Label, name: String| {
///                     label.name = name;
///                 })),
///             ])
///         });
///         &TREE
///     }
/// }
///
/// assert_eq!(
///     Label::render("LA_kwDO"),
///     r#"query { node(id: "LA_kwDO") { ... on Label { name } } }"#,
/// );
/// ```
///
/// Nesting one type inside another (see
/// [`Target::object`](crate::Target::object)) reads the nested type's tree
/// while the outer tree is being built, so a type must not embed itself,
/// directly or through a cycle.
pub trait NodeType: Default + Sized + 'static {
    fn query_tree() -> &'static QueryTree<Self>;

    /// Decode a full `{"data": {"node": ...}}` response into `Self`.
    fn decode(response: &Value) -> Result<Self, DecodeError> {
        Self::query_tree().decode(response)
    }

    /// Render the lookup query for the node with global ID `id`.
    fn render(id: &str) -> String {
        Self::query_tree().render(id)
    }
}
