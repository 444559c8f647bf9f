use crate::DecodeError;
use crate::Node;
use crate::NodeType;
use crate::QueryTree;
use crate::Target;
use crate::tests::test_types::Label;
use crate::tests::test_types::NestedType;
use crate::tests::test_types::Outer;
use crate::tests::test_types::Repository;
use serde_json::json;
use std::sync::LazyLock;

/// Three levels deep: `Project -> Outer -> NestedType`, plus an optional
/// `Repository` to check that a whole multi-variant tree embeds verbatim.
#[derive(Clone, Debug, Default, PartialEq)]
struct Project {
    outer: Outer,
    repository: Option<Repository>,
}
impl NodeType for Project {
    fn query_tree() -> &'static QueryTree<Self> {
        static TREE: LazyLock<QueryTree<Project>> = LazyLock::new(|| {
            QueryTree::new("Project", vec![
                Node::field("outer", Target::object(|p: &mut Project, o: Outer| {
                    p.outer = o;
                })),
                Node::field("repository", Target::optional_object(|p: &mut Project, r: Repository| {
                    p.repository = Some(r);
                })),
            ])
        });
        &TREE
    }
}

#[test]
fn nested_type_round_trips_through_its_parent() {
    assert_eq!(
        Outer::render("O_1"),
        r#"query { node(id: "O_1") { ... on Outer { nested { ... on NestedType { example } } } } }"#,
    );

    let decoded = Outer::decode(&json!({
        "data": { "node": { "nested": { "example": "v" } } },
    })).unwrap();

    assert_eq!(decoded.nested, NestedType { example: "v".to_string() });
}

#[test]
fn nested_tree_fragment_is_embedded_verbatim() {
    let fragment = Project::query_tree().fragment();

    assert!(fragment.contains(&format!("outer {{ {} }}", Outer::query_tree().fragment())));
    assert!(fragment.contains(&format!("repository {{ {} }}", Repository::query_tree().fragment())));
}

#[test]
fn nested_decode_starts_at_the_field_value_without_an_envelope() {
    // Wrapping the nested value in its own `data`/`node` envelope is wrong:
    // only the root response carries one.
    let err = Outer::decode(&json!({
        "data": { "node": {
            "nested": { "data": { "node": { "example": "v" } } },
        } },
    })).unwrap_err();

    match &err {
        DecodeError::MissingRequiredKey { key, path } => {
            assert_eq!(key, "example");
            assert_eq!(path.to_string(), "data.node.nested");
        },
        other => panic!("Expected a MissingRequiredKey, found {other:?}"),
    }
}

#[test]
fn three_level_nesting_decodes_and_reports_full_paths() {
    let decoded = Project::decode(&json!({
        "data": { "node": {
            "outer": { "nested": { "example": "deep" } },
        } },
    })).unwrap();

    assert_eq!(decoded.outer.nested.example, "deep");
    assert_eq!(decoded.repository, None);

    let err = Project::decode(&json!({
        "data": { "node": {
            "outer": { "nested": { "example": 7 } },
        } },
    })).unwrap_err();

    assert_eq!(
        err.path().map(ToString::to_string).as_deref(),
        Some("data.node.outer.nested.example"),
    );
}

#[test]
fn embedded_multi_variant_tree_decodes_in_place() {
    let decoded = Project::decode(&json!({
        "data": { "node": {
            "outer": { "nested": { "example": "v" } },
            "repository": {
                "name": "nodeql",
                "labels": { "nodes": [{ "name": "bug", "color": "d73a4a" }] },
                "defaultBranchRef": {
                    "name": "main",
                    "target": { "oid": "abc123" },
                },
                "isFork": true,
            },
        } },
    })).unwrap();

    assert_eq!(decoded.repository, Some(Repository {
        bug_label: None,
        default_branch: Some("main".to_string()),
        head_oid: Some("abc123".to_string()),
        is_fork: true,
        labels: vec![Label {
            color: Some("d73a4a".to_string()),
            name: "bug".to_string(),
        }],
        name: "nodeql".to_string(),
    }));
}

#[test]
fn filtered_field_present_decodes_to_a_populated_value() {
    let decoded = Repository::decode(&json!({
        "data": { "node": {
            "name": "nodeql",
            "labels": { "nodes": [] },
            "label": { "name": "bug" },
            "isFork": false,
        } },
    })).unwrap();

    assert_eq!(decoded.bug_label, Some(Label {
        color: None,
        name: "bug".to_string(),
    }));
}

#[test]
fn filtered_field_absent_leaves_the_target_unset() {
    let decoded = Repository::decode(&json!({
        "data": { "node": {
            "name": "nodeql",
            "labels": { "nodes": [] },
            "isFork": false,
        } },
    })).unwrap();

    assert_eq!(decoded.bug_label, None);
}

#[test]
fn filtered_field_with_a_broken_match_still_fails() {
    // Optional only covers absence; a present value must still decode.
    let err = Repository::decode(&json!({
        "data": { "node": {
            "name": "nodeql",
            "labels": { "nodes": [] },
            "label": { "color": "fff" },
            "isFork": false,
        } },
    })).unwrap_err();

    assert!(
        matches!(&err, DecodeError::MissingRequiredKey { key, .. } if key == "name"),
        "{err:?}",
    );
}
