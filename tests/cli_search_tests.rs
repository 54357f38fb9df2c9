//! End-to-end tests for `archiewiki search`.

mod fixtures;
use fixtures::*;

#[test]
fn test_search_matches_tags_and_descriptions() {
    let result = run_json(&["search", "glass", "--json"]);

    assert_eq!(result["query"], "glass");
    assert_eq!(result["status"]["state"], "success");
    assert_eq!(result["count"], 3);
    assert_eq!(
        ids(&result["results"]),
        vec!["glass_curtain_wall", "sliding_door", "french_door"]
    );
    assert_eq!(result["recent_searches"], serde_json::json!(["glass"]));
}

#[test]
fn test_search_is_case_insensitive() {
    let lower = run_json(&["search", "brick", "--json"]);
    let upper = run_json(&["search", "BRICK", "--json"]);

    assert_eq!(ids(&lower["results"]), vec!["brick_wall"]);
    assert_eq!(lower["results"], upper["results"]);
}

#[test]
fn test_search_with_category_filter() {
    let result = run_json(&["search", "glass", "--category", "walls", "--json"]);

    assert_eq!(result["category"], "walls");
    assert_eq!(ids(&result["results"]), vec!["glass_curtain_wall"]);
}

#[test]
fn test_search_no_results_is_success() {
    let output = run(&["search", "xyz123", "--json"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "No results is not an error. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["status"]["state"], "no_results");
    assert_eq!(result["status"]["message"], "xyz123");
    assert_eq!(result["count"], 0);
}

#[test]
fn test_search_no_results_human_readable() {
    let output = run(&["search", "xyz123"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("No results for 'xyz123'."));
}

#[test]
fn test_search_blank_query_rejected() {
    let output = run(&["search", "   "]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("must not be blank"));
}

#[test]
fn test_search_unknown_category_rejected() {
    let output = run(&["search", "glass", "--category", "basements"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_search_with_default_timing() {
    // No config file: default debounce and repository delay apply
    let dir = tempfile::TempDir::new().unwrap();
    let output = isolated_command(&["search", "cantilevered", "--json"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(ids(&result["results"]), vec!["floating_stairs"]);
}
