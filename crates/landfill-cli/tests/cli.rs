use assert_cmd::Command;
use predicates::prelude::*;

/// The binary with no user config file in play
fn landfill() -> Command {
    let mut cmd = Command::cargo_bin("landfill").unwrap();
    cmd.env("LANDFILL_CONFIG", "/nonexistent/landfill/config.toml")
        .env_remove("LANDFILL_REGION")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn identify_plastic_bottle_in_california() {
    landfill()
        .args(["--region", "US-CA", "identify", "plastic", "bottle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("curbside-recycling"))
        .stdout(predicate::str::contains("Resin code #1 accepted"));
}

#[test]
fn identify_json_output() {
    landfill()
        .args(["--region", "us-ny", "--output", "json", "identify", "battery"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": true"))
        .stdout(predicate::str::contains("\"method\": \"special-disposal\""))
        .stdout(predicate::str::contains("ny-002"));
}

#[test]
fn unknown_item_fails_with_suggestion() {
    landfill()
        .args(["identify", "quantum", "flux", "capacitor"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Please provide more details"))
        .stderr(predicate::str::contains("Item could not be identified"));
}

#[test]
fn facilities_filtered_by_type() {
    landfill()
        .args(["--region", "US-TX", "facilities", "--type", "hazardous-waste"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tx-002"))
        .stdout(predicate::str::contains("tx-001").not());
}

#[test]
fn facilities_ranked_from_location() {
    landfill()
        .args([
            "--region", "US-CA", "--output", "json", "facilities", "--lat", "37.7549", "--lng",
            "-122.4394",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"distance\": 0.0"));
}

#[test]
fn unknown_facility_is_not_found() {
    landfill()
        .args(["facility", "zz-999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found: facility zz-999"));
}

#[test]
fn schedule_for_region() {
    landfill()
        .args(["--region", "US-TX", "schedule"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First Saturday of month"));
}

#[test]
fn regions_lists_builtin_policies() {
    landfill()
        .args(["regions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("US-CA"))
        .stdout(predicate::str::contains("New York"))
        .stdout(predicate::str::contains("Texas"));
}

#[test]
fn policy_as_yaml() {
    landfill()
        .args(["--region", "US-CA", "--output", "yaml", "policy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: California"));
}

#[test]
fn items_lists_catalog() {
    landfill()
        .args(["items"])
        .assert()
        .success()
        .stdout(predicate::str::contains("yogurt container"));
}

#[test]
fn config_file_sets_region() {
    let dir = std::env::temp_dir().join(format!("landfill-cli-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "default_region = \"US-NY\"\nfacility_limit = 1\n").unwrap();

    landfill()
        .env("LANDFILL_CONFIG", &path)
        .args(["--output", "json", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"region\": \"US-NY\""))
        .stdout(predicate::str::contains("\"facility_limit\": 1"));
}

#[test]
fn empty_image_is_rejected() {
    let dir = std::env::temp_dir().join(format!("landfill-cli-img-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("empty.jpg");
    std::fs::write(&path, b"").unwrap();

    landfill()
        .arg("scan")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid image data provided"));
}
