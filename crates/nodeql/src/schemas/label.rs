use libnodeql::Node;
use libnodeql::NodeType;
use libnodeql::QueryTree;
use libnodeql::Target;
use serde::Serialize;
use std::sync::LazyLock;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Label {
    pub(crate) color: String,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl NodeType for Label {
    fn query_tree() -> &'static QueryTree<Self> {
        static TREE: LazyLock<QueryTree<Label>> = LazyLock::new(|| {
            QueryTree::new("Label", vec![
                Node::field("name", Target::value(|label: &mut Label, name: String| {
                    label.name = name;
                })),
                Node::field("color", Target::value(|label: &mut Label, color: String| {
                    label.color = color;
                })),
                Node::field("description", Target::optional_value(|label: &mut Label, desc: String| {
                    label.description = Some(desc);
                })),
            ])
        });
        &TREE
    }
}
