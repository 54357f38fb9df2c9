//! End-to-end tests for `archiewiki item`.

mod fixtures;
use fixtures::*;

#[test]
fn test_item_with_detail_json() {
    let result = run_json(&["item", "brick_wall", "--json"]);

    assert_eq!(result["item"]["name"], "Brick Walls");
    assert_eq!(result["is_favorite"], false);
    assert_eq!(result["image_count"], 3);
    assert_eq!(result["image_index"], 0);
    assert!(result["detail"]["full_description"].is_string());

    let groups: Vec<&str> = result["specification_groups"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["category"].as_str().unwrap())
        .collect();
    assert_eq!(
        groups,
        vec!["Material", "Dimensional", "Structural", "Performance", "Maintenance"]
    );

    assert_eq!(
        ids(&result["related_items"]),
        vec!["concrete_wall", "load_bearing_wall"]
    );
}

#[test]
fn test_item_without_detail() {
    let result = run_json(&["item", "hip_roof", "--json"]);

    assert!(result["detail"].is_null());
    assert_eq!(result["image_count"], 0);
    assert!(result["specification_groups"].as_array().unwrap().is_empty());
    assert_eq!(ids(&result["related_items"]), vec!["gable_roof"]);
}

#[test]
fn test_item_image_index_is_clamped() {
    let result = run_json(&["item", "brick_wall", "--image", "99", "--json"]);
    assert_eq!(result["image_index"], 2);

    let result = run_json(&["item", "wood_floor", "--image", "3", "--json"]);
    assert_eq!(result["image_index"], 0);
}

#[test]
fn test_item_favorite_toggle() {
    let result = run_json(&["item", "spiral_stairs", "--favorite", "--json"]);
    assert_eq!(result["is_favorite"], true);

    // Favorites live only as long as the process
    let result = run_json(&["item", "spiral_stairs", "--json"]);
    assert_eq!(result["is_favorite"], false);
}

#[test]
fn test_item_human_readable() {
    let output = run(&["item", "doric_column", "--image", "1"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Doric Column"));
    assert!(stdout.contains("Example projects:"));
    assert!(stdout.contains("Parthenon"));
    assert!(stdout.contains("Image 2 of 2"));
}

#[test]
fn test_item_unknown_id() {
    let output = run(&["item", "ghost"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Item 'ghost' not found"));
}
