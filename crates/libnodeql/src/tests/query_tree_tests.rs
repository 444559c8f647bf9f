use crate::Node;
use crate::NodeType;
use crate::QueryTree;
use crate::Target;
use crate::tests::test_types::Container;
use crate::tests::test_types::Example;
use crate::tests::test_types::REPOSITORY_FRAGMENT;
use crate::tests::test_types::Repository;

#[test]
fn single_leaf_field_renders_the_exact_lookup_query() {
    assert_eq!(
        Example::query_tree().render("Test"),
        r#"query { node(id: "Test") { ... on T { example } } }"#,
    );
}

#[test]
fn node_type_render_forwards_to_its_tree() {
    assert_eq!(Example::render("Test"), Example::query_tree().render("Test"));
}

#[test]
fn sibling_leaf_fields_render_space_separated_in_declaration_order() {
    let names = ["zeta", "alpha", "mid", "beta"];
    let tree = QueryTree::new(
        "T",
        names.iter()
            .map(|name| Node::field(
                *name,
                Target::value(|ex: &mut Example, v: String| ex.example = v),
            ))
            .collect(),
    );

    assert_eq!(tree.fragment(), "... on T { zeta alpha mid beta }");

    let keys: Vec<&str> = tree.decode_steps().iter().map(|s| s.key()).collect();
    assert_eq!(keys, names);
}

#[test]
fn empty_tree_renders_empty_selection() {
    let tree = QueryTree::<Example>::new("T", vec![]);

    assert_eq!(tree.fragment(), "... on T {}");
    assert_eq!(
        tree.render("X"),
        r#"query { node(id: "X") { ... on T {} } }"#,
    );
}

#[test]
fn root_type_condition_adds_no_decode_level() {
    let tree = Container::query_tree();

    assert_eq!(tree.type_name(), "Container");
    assert_eq!(tree.decode_steps().len(), 1);
    assert_eq!(tree.decode_steps()[0].key(), "container");
    assert_eq!(tree.nodes().len(), 1);
}

#[test]
fn every_variant_composes_into_one_fragment() {
    assert_eq!(Repository::query_tree().fragment(), REPOSITORY_FRAGMENT);
}

#[test]
fn builder_and_constructor_produce_the_same_tree() {
    let setter = |ex: &mut Example, v: String| ex.example = v;
    let built =
        QueryTree::builder("T")
            .add_node(Node::field("a", Target::value(setter)))
            .add_nodes([
                Node::field("b", Target::value(setter)),
                Node::nested("c", vec![Node::field("d", Target::value(setter))]),
            ])
            .build();
    let constructed = QueryTree::new("T", vec![
        Node::field("a", Target::value(setter)),
        Node::field("b", Target::value(setter)),
        Node::nested("c", vec![Node::field("d", Target::value(setter))]),
    ]);

    assert_eq!(built.fragment(), constructed.fragment());
    assert_eq!(built.render("id"), constructed.render("id"));
}

#[test]
fn render_escapes_the_id() {
    assert_eq!(
        Example::render(r#"a"b"#),
        r#"query { node(id: "a\"b") { ... on T { example } } }"#,
    );
}

#[test]
fn render_is_idempotent() {
    let tree = Repository::query_tree();

    assert_eq!(tree.render("R_kgDO"), tree.render("R_kgDO"));
}

#[test]
fn request_wraps_the_rendered_query() {
    let request = Example::query_tree().request("Test");

    assert_eq!(request.query(), Example::render("Test"));
    assert_eq!(
        request.to_json().unwrap(),
        r#"{"query":"query { node(id: \"Test\") { ... on T { example } } }"}"#,
    );
}

#[test]
fn rendered_queries_are_valid_graphql_documents() {
    for query in [
        Example::render("Test"),
        Container::render("C_1"),
        Repository::render("R_kgDOABCDEF"),
        Repository::render("needs \"escaping\"\n"),
    ] {
        let parsed = graphql_parser::parse_query::<String>(&query);
        assert!(parsed.is_ok(), "Failed to parse `{query}`: {parsed:?}");
    }
}
