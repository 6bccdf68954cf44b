//! Integration tests for the weather-stats binary
//!
//! Each test runs the binary in its own temporary directory so the default
//! output file and config lookup never touch the repository.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CSV_HEADER: &str = "city,resolved_name,country,latitude,longitude,temperature_c,\
                          wind_speed_kmh,wind_direction_deg,condition,observed_at,error";

fn weather_stats(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("weather-stats").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_flag() {
    let dir = TempDir::new().unwrap();
    weather_stats(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn test_missing_argument_is_usage_error() {
    let dir = TempDir::new().unwrap();
    weather_stats(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_missing_input_file_exits_with_two() {
    let dir = TempDir::new().unwrap();
    weather_stats(&dir)
        .arg("does-not-exist.txt")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Input file not found"));

    assert!(!dir.path().join("weather_data.csv").exists());
}

#[test]
fn test_empty_input_writes_header_and_empty_summary() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("cities.txt"), "\n   \n").unwrap();

    weather_stats(&dir)
        .arg("cities.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 cities"));

    let csv = std::fs::read_to_string(dir.path().join("weather_data.csv")).unwrap();
    assert_eq!(
        csv,
        format!("{CSV_HEADER}\n\nstatistic,value\nmax,\nmin,\naverage,\n")
    );
}

#[test]
fn test_json_format_defaults_to_json_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("cities.txt"), "").unwrap();

    weather_stats(&dir)
        .args(["cities.txt", "--format", "json"])
        .assert()
        .success();

    assert!(!dir.path().join("weather_data.csv").exists());
    let json = std::fs::read_to_string(dir.path().join("weather_data.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["stats"].is_null());
}

#[test]
fn test_missing_input_wins_over_bad_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("weather-stats.toml"),
        "[output]\nformat = \"xml\"\n",
    )
    .unwrap();

    weather_stats(&dir)
        .arg("does-not-exist.txt")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_missing_config_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("cities.txt"), "").unwrap();

    weather_stats(&dir)
        .args(["cities.txt", "--config", "missing.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_unwritable_output_is_fatal() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("cities.txt"), "").unwrap();

    weather_stats(&dir)
        .args(["cities.txt", "--out", "no/such/dir/out.csv"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Output error"));
}

async fn mount_paris_tokyo(mock_server: &MockServer) {
    for (name, lat, lon, temperature) in [
        ("Paris", 48.85341, 2.3488, 15.0),
        ("Tokyo", 35.6895, 139.69171, 20.0),
    ] {
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("name", name))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [{"name": name, "latitude": lat, "longitude": lon}]
            })))
            .expect(1)
            .mount(mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("latitude", lat.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "latitude": lat,
                "longitude": lon,
                "current": {"time": "2024-01-15T12:00", "temperature_2m": temperature}
            })))
            .expect(1)
            .mount(mock_server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("name", "Nowhere"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(mock_server)
        .await;
}

/// Run the binary against `mock_server` off the async runtime
async fn run_against(mock_server: &MockServer, dir: &TempDir, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = weather_stats(dir);
    cmd.args(args)
        .env("WEATHER_STATS_WEATHER__BASE_URL", mock_server.uri())
        .env("WEATHER_STATS_WEATHER__GEOCODING_BASE_URL", mock_server.uri())
        .env("WEATHER_STATS_PIPELINE__REQUEST_DELAY_MS", "0");

    tokio::task::spawn_blocking(move || cmd.assert())
        .await
        .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_end_to_end_csv_report() {
    let mock_server = MockServer::start().await;
    mount_paris_tokyo(&mock_server).await;

    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("cities.txt"), "Paris\nNowhere\nTokyo\n").unwrap();

    run_against(&mock_server, &dir, &["cities.txt"])
        .await
        .success()
        .stdout(predicate::str::contains("3 cities, 1 failed"))
        .stdout(predicate::str::contains("Average: 17.50"));

    let csv = std::fs::read_to_string(dir.path().join("weather_data.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], CSV_HEADER);
    assert!(lines[1].starts_with("Paris,Paris,,48.85341,2.3488,15.0,"));
    assert_eq!(lines[2], "Nowhere,,,,,,,,,,City not found: Nowhere");
    assert!(lines[3].starts_with("Tokyo,Tokyo,,35.6895,139.69171,20.0,"));
    assert!(csv.ends_with("statistic,value\nmax,20.0\nmin,15.0\naverage,17.50\n"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_end_to_end_json_report() {
    let mock_server = MockServer::start().await;
    mount_paris_tokyo(&mock_server).await;

    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("cities.txt"), "Paris\nTokyo\n").unwrap();

    run_against(
        &mock_server,
        &dir,
        &["cities.txt", "--format", "json", "--out", "report.json"],
    )
    .await
    .success();

    let json = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["cities"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["stats"]["max"], 20.0);
    assert_eq!(value["stats"]["min"], 15.0);
    assert_eq!(value["stats"]["average"], 17.5);
    assert!(!dir.path().join("weather_data.csv").exists());
}
