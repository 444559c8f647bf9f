mod composition_tests;
mod concurrency_tests;
mod query_tree_tests;
