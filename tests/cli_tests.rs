use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn restaurants_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("restaurants"))
}

/// Run inside an empty temp dir so no stray config is picked up.
fn cmd_in(dir: &TempDir) -> Command {
    let mut cmd = restaurants_cmd();
    cmd.current_dir(dir.path()).env_remove("RESTAURANTS_CONFIG");
    cmd
}

fn stdout_json(output: std::process::Output) -> serde_json::Value {
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    restaurants_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL"));
}

#[test]
fn test_version() {
    restaurants_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("restaurants"));
}

#[test]
fn test_schema_prints_sdl() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("setRestaurant"))
        .stdout(predicate::str::contains("editRestaurant"))
        .stdout(predicate::str::contains("deleteRestaurant"))
        .stdout(predicate::str::contains("input RestaurantInput"));
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_query_lists_seeded_restaurants() {
    let dir = TempDir::new().unwrap();
    let output = cmd_in(&dir)
        .arg("query")
        .arg("{ restaurants { id name } }")
        .output()
        .unwrap();

    let json = stdout_json(output);
    let ids: Vec<i64> = json["data"]["restaurants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_query_with_variables() {
    let dir = TempDir::new().unwrap();
    let output = cmd_in(&dir)
        .arg("query")
        .arg("query One($id: Int!) { restaurant(id: $id) { name } }")
        .arg("--variables")
        .arg(r#"{"id": 2}"#)
        .output()
        .unwrap();

    let json = stdout_json(output);
    assert_eq!(json["data"]["restaurant"]["name"], "Fiorellas");
}

#[test]
fn test_query_missing_restaurant_reports_error() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .arg("query")
        .arg("{ restaurant(id: 99) { name } }")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restaurant does not exist"));
}

#[test]
fn test_query_invalid_variables_fails() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .arg("query")
        .arg("{ restaurants { id } }")
        .arg("--variables")
        .arg("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Variables must be a JSON object"));
}

// =============================================================================
// Mutations
// =============================================================================

#[test]
fn test_mutate_set_restaurant() {
    let dir = TempDir::new().unwrap();
    let output = cmd_in(&dir)
        .arg("mutate")
        .arg(r#"setRestaurant(input: { name: "New" }) { id name }"#)
        .output()
        .unwrap();

    let json = stdout_json(output);
    assert_eq!(json["data"]["setRestaurant"]["id"], 4);
    assert_eq!(json["data"]["setRestaurant"]["name"], "New");
}

#[test]
fn test_mutate_delete_missing() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .arg("mutate")
        .arg("deleteRestaurant(id: 50)")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restaurant does not exist"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_seed_uses_zero_based_revision_from_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".restaurants.yml"),
        "store:\n  seed: zero-based\n",
    )
    .unwrap();

    let output = cmd_in(&dir).arg("seed").arg("--json").output().unwrap();
    let json = stdout_json(output);
    assert_eq!(json[0]["id"], 0);
    assert_eq!(json[2]["name"], "Karma");
}

#[test]
fn test_seed_file_from_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("menu.yml"),
        "- id: 7\n  name: Noodle Bar\n  dishes:\n    - name: Ramen\n      price: 14\n",
    )
    .unwrap();
    fs::write(
        dir.path().join(".restaurants.yml"),
        "store:\n  seed_file: menu.yml\n",
    )
    .unwrap();

    cmd_in(&dir)
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Noodle Bar"))
        .stdout(predicate::str::contains("Ramen"));
}

#[test]
fn test_explicit_config_path() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("custom.yml");
    fs::write(&config_path, "store:\n  seed: zero-based\n").unwrap();

    let output = restaurants_cmd()
        .arg("--config")
        .arg(&config_path)
        .arg("query")
        .arg("{ restaurant(id: 0) { name } }")
        .output()
        .unwrap();

    let json = stdout_json(output);
    assert_eq!(json["data"]["restaurant"]["name"], "WoodsHill ");
}

#[test]
fn test_duplicate_seed_ids_fail() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("dup.json"),
        r#"[{"id": 1, "name": "A"}, {"id": 1, "name": "B"}]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join(".restaurants.yml"),
        "store:\n  seed_file: dup.json\n",
    )
    .unwrap();

    cmd_in(&dir)
        .arg("seed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to seed restaurant store"));
}

#[test]
fn test_seed_and_id_mode_flags_override_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".restaurants.yml"),
        "store:\n  seed: one-based\n  id_mode: counter\n",
    )
    .unwrap();

    let output = cmd_in(&dir)
        .arg("--seed")
        .arg("zero-based")
        .arg("--id-mode")
        .arg("legacy")
        .arg("seed")
        .arg("--json")
        .output()
        .unwrap();
    let json = stdout_json(output);
    assert_eq!(json[0]["id"], 0);
}

#[test]
fn test_invalid_id_mode_flag_fails() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .arg("--id-mode")
        .arg("random")
        .arg("schema")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid id mode: random"));
}

#[test]
fn test_schema_ignores_broken_seed_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("dup.json"),
        r#"[{"id": 1, "name": "A"}, {"id": 1, "name": "B"}]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join(".restaurants.yml"),
        "store:\n  seed_file: dup.json\n",
    )
    .unwrap();

    cmd_in(&dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("setRestaurant"));
}

#[test]
fn test_missing_explicit_config_fails() {
    restaurants_cmd()
        .arg("--config")
        .arg("/nonexistent/restaurants.yml")
        .arg("schema")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
