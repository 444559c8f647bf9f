use libnodeql::Node;
use libnodeql::NodeType;
use libnodeql::QueryTree;
use libnodeql::Target;
use serde::Serialize;
use std::sync::LazyLock;

/// Whoever authored something: a user, a bot, an organization, ...
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Actor {
    pub(crate) login: String,
    /// Only users have a display name.
    pub(crate) name: Option<String>,
    pub(crate) url: String,
}
impl NodeType for Actor {
    fn query_tree() -> &'static QueryTree<Self> {
        static TREE: LazyLock<QueryTree<Actor>> = LazyLock::new(|| {
            QueryTree::new("Actor", vec![
                Node::field("login", Target::value(|actor: &mut Actor, login: String| {
                    actor.login = login;
                })),
                Node::field("url", Target::value(|actor: &mut Actor, url: String| {
                    actor.url = url;
                })),
                Node::if_type("User", vec![
                    Node::field("name", Target::optional_value(|actor: &mut Actor, name: String| {
                        actor.name = Some(name);
                    })),
                ]),
            ])
        });
        &TREE
    }
}
