use crate::schemas;
use crate::schemas::Actor;
use crate::schemas::PullRequest;
use crate::schemas::pull_request::PullRequestState;
use libnodeql::NodeType;
use serde_json::json;

const LABEL_FRAGMENT: &str = "... on Label { name color description }";

pub(crate) fn pull_request_response() -> serde_json::Value {
    json!({
        "data": { "node": {
            "number": 1347,
            "title": "Decode connection nodes in order",
            "state": "OPEN",
            "isDraft": false,
            "baseRefName": "main",
            "headRefName": "connection-order",
            "reviewDecision": null,
            "author": {
                "login": "octocat",
                "url": "https://github.com/octocat",
                "name": "The Octocat",
            },
            "labels": { "nodes": [
                { "name": "bug", "color": "d73a4a", "description": "Something isn't working" },
            ] },
            "repository": {
                "nameWithOwner": "octocat/hello-world",
                "description": null,
                "isArchived": false,
                "defaultBranchRef": {
                    "name": "main",
                    "target": { "oid": "7fd1a60b01f91b314f59955a4e4d4e80d8edf11d" },
                },
                "labels": { "nodes": [] },
            },
        } },
    })
}

#[test]
fn actor_narrows_to_user_for_the_display_name() {
    assert_eq!(
        Actor::render("MDQ6VXNlcjU4MzIzMQ=="),
        concat!(
            r#"query { node(id: "MDQ6VXNlcjU4MzIzMQ==") { "#,
            "... on Actor { login url ... on User { name } }",
            " } }",
        ),
    );
}

#[test]
fn pull_request_embeds_its_nested_types() {
    let fragment = PullRequest::query_tree().fragment();

    assert!(fragment.starts_with(
        "... on PullRequest { number title state isDraft baseRefName headRefName reviewDecision ",
    ));
    assert!(fragment.contains("author { ... on Actor { login url ... on User { name } } }"));
    assert!(fragment.contains(&format!("labels(first: 20) {{ nodes {{ {LABEL_FRAGMENT} }} }}")));
    assert!(fragment.contains(&format!(
        r#"label(name: "good first issue") {{ {LABEL_FRAGMENT} }}"#,
    )));
    assert!(fragment.contains("defaultBranchRef { name target { ... on Commit { oid } } }"));
}

#[test]
fn pull_request_response_decodes() {
    let pr = PullRequest::decode(&pull_request_response()).unwrap();

    assert_eq!(pr.number, 1347);
    assert_eq!(pr.state, PullRequestState::Open);
    assert_eq!(pr.review_decision, None);
    assert_eq!(pr.author.as_ref().and_then(|a| a.name.as_deref()), Some("The Octocat"));
    assert_eq!(pr.labels.len(), 1);
    assert_eq!(pr.labels[0].description.as_deref(), Some("Something isn't working"));
    assert_eq!(pr.repository.name_with_owner, "octocat/hello-world");
    assert_eq!(pr.repository.default_branch.as_deref(), Some("main"));
    assert_eq!(pr.repository.good_first_issue_label, None);
}

#[test]
fn ghost_author_decodes_to_none() {
    let mut response = pull_request_response();
    response["data"]["node"]["author"] = json!(null);

    let pr = PullRequest::decode(&response).unwrap();

    assert_eq!(pr.author, None);
}

#[test]
fn unknown_enum_value_is_rejected() {
    let mut response = pull_request_response();
    response["data"]["node"]["state"] = json!("REOPENED");

    let err = PullRequest::decode(&response).unwrap_err();

    assert_eq!(
        err.path().map(ToString::to_string).as_deref(),
        Some("data.node.state"),
    );
}

#[test]
fn registry_lists_types_in_a_stable_order() {
    let names: Vec<&str> = schemas::registry().keys().copied().collect();

    assert_eq!(names, vec!["Actor", "Issue", "Label", "PullRequest", "Repository"]);
}

#[test]
fn lookup_of_an_unknown_type_lists_the_known_ones() {
    let err = schemas::lookup("Gist").unwrap_err();

    assert!(err.to_string().starts_with("Unknown type `Gist`. Known types: `Actor`"));
}

#[test]
fn schema_entry_decodes_to_camel_case_json() {
    let entry = schemas::lookup("PullRequest").unwrap();

    let value = entry.decode_str(&pull_request_response().to_string()).unwrap();

    assert_eq!(value["headRefName"], json!("connection-order"));
    assert_eq!(value["repository"]["nameWithOwner"], json!("octocat/hello-world"));
    assert_eq!(value["state"], json!("OPEN"));
}
