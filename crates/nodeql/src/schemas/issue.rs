use crate::schemas::Actor;
use crate::schemas::Label;
use libnodeql::Node;
use libnodeql::NodeType;
use libnodeql::QueryTree;
use libnodeql::Target;
use serde::Deserialize;
use serde::Serialize;
use std::sync::LazyLock;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum IssueState {
    Closed,
    #[default]
    Open,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Issue {
    pub(crate) author: Option<Actor>,
    pub(crate) labels: Vec<Label>,
    pub(crate) number: u64,
    pub(crate) repository_name: String,
    pub(crate) state: IssueState,
    pub(crate) title: String,
}
impl NodeType for Issue {
    fn query_tree() -> &'static QueryTree<Self> {
        static TREE: LazyLock<QueryTree<Issue>> = LazyLock::new(|| {
            QueryTree::new("Issue", vec![
                Node::field("number", Target::value(|issue: &mut Issue, number: u64| {
                    issue.number = number;
                })),
                Node::field("title", Target::value(|issue: &mut Issue, title: String| {
                    issue.title = title;
                })),
                Node::field("state", Target::value(|issue: &mut Issue, state: IssueState| {
                    issue.state = state;
                })),
                Node::field("author", Target::optional_object(|issue: &mut Issue, author: Actor| {
                    issue.author = Some(author);
                })),
                Node::field_list("labels", 20, |issue: &mut Issue, labels: Vec<Label>| {
                    issue.labels = labels;
                }),
                Node::nested("repository", vec![
                    Node::field("nameWithOwner", Target::value(|issue: &mut Issue, name: String| {
                        issue.repository_name = name;
                    })),
                ]),
            ])
        });
        &TREE
    }
}
