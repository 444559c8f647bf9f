use crate::schemas::Label;
use libnodeql::Node;
use libnodeql::NodeType;
use libnodeql::QueryTree;
use libnodeql::Target;
use serde::Serialize;
use std::sync::LazyLock;

/// The label GitHub suggests for newcomer-friendly issues.
const GOOD_FIRST_ISSUE_LABEL: &str = "good first issue";

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Repository {
    pub(crate) default_branch: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) good_first_issue_label: Option<Label>,
    /// The commit at the tip of the default branch.
    pub(crate) head_oid: Option<String>,
    pub(crate) is_archived: bool,
    pub(crate) labels: Vec<Label>,
    pub(crate) name_with_owner: String,
}
impl NodeType for Repository {
    fn query_tree() -> &'static QueryTree<Self> {
        static TREE: LazyLock<QueryTree<Repository>> = LazyLock::new(|| {
            QueryTree::builder("Repository")
                .add_node(Node::field("nameWithOwner", Target::value(|repo: &mut Repository, name: String| {
                    repo.name_with_owner = name;
                })))
                .add_node(Node::field("description", Target::optional_value(|repo: &mut Repository, desc: String| {
                    repo.description = Some(desc);
                })))
                .add_node(Node::field("isArchived", Target::value(|repo: &mut Repository, archived: bool| {
                    repo.is_archived = archived;
                })))
                .add_node(Node::nested("defaultBranchRef", vec![
                    Node::field("name", Target::optional_value(|repo: &mut Repository, name: String| {
                        repo.default_branch = Some(name);
                    })),
                    Node::nested("target", vec![
                        Node::if_type("Commit", vec![
                            Node::field("oid", Target::optional_value(|repo: &mut Repository, oid: String| {
                                repo.head_oid = Some(oid);
                            })),
                        ]),
                    ]),
                ]))
                .add_node(Node::field_list("labels", 50, |repo: &mut Repository, labels: Vec<Label>| {
                    repo.labels = labels;
                }))
                .add_node(Node::filtered_field(
                    "label",
                    GOOD_FIRST_ISSUE_LABEL,
                    |repo: &mut Repository, label: Label| {
                        repo.good_first_issue_label = Some(label);
                    },
                ))
                .build()
        });
        &TREE
    }
}
