use crate::schemas::Actor;
use crate::schemas::Label;
use crate::schemas::Repository;
use libnodeql::Node;
use libnodeql::NodeType;
use libnodeql::QueryTree;
use libnodeql::Target;
use serde::Deserialize;
use serde::Serialize;
use std::sync::LazyLock;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum PullRequestState {
    Closed,
    Merged,
    #[default]
    Open,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PullRequest {
    /// `None` when the author's account has since been deleted.
    pub(crate) author: Option<Actor>,
    pub(crate) base_ref_name: String,
    pub(crate) head_ref_name: String,
    pub(crate) is_draft: bool,
    pub(crate) labels: Vec<Label>,
    pub(crate) number: u64,
    pub(crate) repository: Repository,
    pub(crate) review_decision: Option<String>,
    pub(crate) state: PullRequestState,
    pub(crate) title: String,
}
impl NodeType for PullRequest {
    fn query_tree() -> &'static QueryTree<Self> {
        static TREE: LazyLock<QueryTree<PullRequest>> = LazyLock::new(|| {
            QueryTree::new("PullRequest", vec![
                Node::field("number", Target::value(|pr: &mut PullRequest, number: u64| {
                    pr.number = number;
                })),
                Node::field("title", Target::value(|pr: &mut PullRequest, title: String| {
                    pr.title = title;
                })),
                Node::field("state", Target::value(|pr: &mut PullRequest, state: PullRequestState| {
                    pr.state = state;
                })),
                Node::field("isDraft", Target::value(|pr: &mut PullRequest, draft: bool| {
                    pr.is_draft = draft;
                })),
                Node::field("baseRefName", Target::value(|pr: &mut PullRequest, name: String| {
                    pr.base_ref_name = name;
                })),
                Node::field("headRefName", Target::value(|pr: &mut PullRequest, name: String| {
                    pr.head_ref_name = name;
                })),
                Node::field("reviewDecision", Target::optional_value(|pr: &mut PullRequest, decision: String| {
                    pr.review_decision = Some(decision);
                })),
                Node::field("author", Target::optional_object(|pr: &mut PullRequest, author: Actor| {
                    pr.author = Some(author);
                })),
                Node::field_list("labels", 20, |pr: &mut PullRequest, labels: Vec<Label>| {
                    pr.labels = labels;
                }),
                Node::field("repository", Target::object(|pr: &mut PullRequest, repo: Repository| {
                    pr.repository = repo;
                })),
            ])
        });
        &TREE
    }
}
