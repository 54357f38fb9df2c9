//! End-to-end tests for `archiewiki categories`, `category`, `browse` and `popular`.

mod fixtures;
use fixtures::*;

// ============================================================================
// Categories
// ============================================================================

#[test]
fn test_categories_json() {
    let result = run_json(&["categories", "--json"]);

    assert_eq!(result["count"], 6);
    let categories = result["categories"].as_array().unwrap();
    let ids: Vec<&str> = categories
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec!["walls", "roofs", "columns", "floors", "windows_doors", "stairs"]
    );

    let windows = &categories[4];
    assert_eq!(windows["type"], "windows_doors");
    assert_eq!(windows["name"], "Windows & Doors");
    assert!(windows["color"].as_str().unwrap().starts_with('#'));
}

#[test]
fn test_categories_human_readable() {
    let output = run(&["categories"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Categories (6):"));
    assert!(stdout.contains("Windows & Doors"));
}

// ============================================================================
// Category
// ============================================================================

#[test]
fn test_category_items_sorted_by_name() {
    let result = run_json(&["category", "walls", "--json"]);

    assert_eq!(result["category"]["name"], "Walls");
    assert_eq!(result["popular_only"], false);
    assert_eq!(result["item_count"], 6);
    assert_eq!(result["popular_count"], 2);
    assert_eq!(
        ids(&result["items"]),
        vec![
            "brick_wall",
            "concrete_wall",
            "curtain_wall",
            "glass_curtain_wall",
            "load_bearing_wall",
            "partition_wall",
        ]
    );
}

#[test]
fn test_category_popular_only() {
    let result = run_json(&["category", "walls", "--popular", "--json"]);

    assert_eq!(result["popular_only"], true);
    assert_eq!(result["item_count"], 6);
    assert_eq!(ids(&result["items"]), vec!["brick_wall", "concrete_wall"]);
}

#[test]
fn test_category_unknown_id() {
    let output = run(&["category", "basements"]);

    assert_eq!(
        output.status.code(),
        Some(1),
        "Unknown category should fail validation"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Category 'basements' not found"));
}

// ============================================================================
// Browse
// ============================================================================

#[test]
fn test_browse_all_alphabetical() {
    let result = run_json(&["browse", "--json"]);

    assert_eq!(result["count"], 33);
    assert_eq!(result["sort"], "alphabetical");
    let items = result["items"].as_array().unwrap();
    assert_eq!(items[0]["name"], "Arch Windows");
}

#[test]
fn test_browse_category_popular_first() {
    let result = run_json(&[
        "browse",
        "--category",
        "stairs",
        "--sort",
        "popular",
        "--json",
    ]);

    assert_eq!(result["category"], "stairs");
    assert_eq!(
        ids(&result["items"]),
        vec![
            "spiral_stairs",
            "straight_stairs",
            "l_shape_stairs",
            "floating_stairs",
            "u_shape_stairs",
        ]
    );
}

#[test]
fn test_browse_grouped() {
    let result = run_json(&["browse", "--category", "walls", "--grouped", "--json"]);

    assert_eq!(result["count"], 6);
    assert!(result.get("items").is_none());
    let groups = result["groups"].as_object().unwrap();
    let letters: Vec<&String> = groups.keys().collect();
    assert_eq!(letters, vec!["B", "C", "G", "L", "P"]);
    assert_eq!(ids(&groups["C"]), vec!["concrete_wall", "curtain_wall"]);
}

#[test]
fn test_browse_invalid_sort() {
    let output = run(&["browse", "--sort", "random"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown sort order"));
}

#[test]
fn test_browse_invalid_category() {
    let output = run(&["browse", "--category", "basements"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown category"));
}

// ============================================================================
// Popular
// ============================================================================

#[test]
fn test_popular_json() {
    let result = run_json(&["popular", "--json"]);

    assert_eq!(result["count"], 17);
    let items = result["items"].as_array().unwrap();
    assert!(items.iter().all(|item| item["popular"] == true));
    assert_eq!(items[0]["id"], "brick_wall");
}
