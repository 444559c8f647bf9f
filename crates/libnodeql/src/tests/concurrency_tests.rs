use crate::NodeType;
use crate::tests::test_types::Repository;
use rayon::prelude::*;
use serde_json::json;

#[test]
fn concurrent_renders_and_decodes_share_one_static_tree() {
    let response = json!({
        "data": { "node": {
            "name": "nodeql",
            "labels": { "nodes": [{ "name": "bug" }, { "name": "docs" }] },
            "label": { "name": "bug" },
            "isFork": false,
        } },
    });
    let expected = Repository::decode(&response).unwrap();
    let expected_query = Repository::render("R_kgDO");

    let results: Vec<(String, Repository)> =
        (0..256)
            .into_par_iter()
            .map(|_| (
                Repository::render("R_kgDO"),
                Repository::decode(&response).unwrap(),
            ))
            .collect();

    assert_eq!(results.len(), 256);
    for (query, decoded) in results {
        assert_eq!(query, expected_query);
        assert_eq!(decoded, expected);
    }
}
