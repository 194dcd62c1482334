//! Smoke tests to verify command wiring

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn letsbus() -> Command {
    let mut cmd = Command::cargo_bin("letsbus").unwrap();
    // Point the config lookup at an empty home so local files don't leak in
    cmd.env("HOME", "/nonexistent/letsbus-home")
        .env("LETSBUS_QUIET", "1")
        .env_remove("LETSBUS_DIRECTORY_URL")
        .env_remove("LETSBUS_REPORTS_URL");
    cmd
}

#[test]
fn test_routes_lists_table() {
    letsbus()
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("/user/:id"))
        .stdout(predicate::str::contains("Users (/users)"));
}

#[test]
fn test_open_static_pages() {
    letsbus()
        .args(["open", "/user/7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User ID: 7"));

    letsbus()
        .args(["open", "/about"])
        .assert()
        .success()
        .stdout(predicate::str::contains("About"));
}

#[test]
fn test_open_unknown_route_fails() {
    letsbus()
        .args(["open", "/nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No page at '/nowhere'"));
}

#[test]
fn test_users_unreachable_directory_shows_header() {
    letsbus()
        .args(["users", "--endpoint", "http://127.0.0.1:9/users"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Users\n"))
        .stderr(predicate::str::contains("There was an error fetching users"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_users_server_error_shows_header_and_logs() {
    use axum::http::StatusCode;
    use axum::routing::get;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/users", listener.local_addr().unwrap());
    let router = axum::Router::new().route(
        "/users",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let assert = tokio::task::spawn_blocking(move || {
        letsbus().args(["users", "--endpoint", &url]).assert()
    })
    .await
    .unwrap();

    assert
        .success()
        .stdout(predicate::str::diff("Users\n"))
        .stderr(predicate::str::contains("There was an error fetching users"))
        .stderr(predicate::str::contains("500"));
}

#[test]
fn test_bus_home_buttons() {
    letsbus()
        .arg("bus")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ Add report ]"));
}

#[test]
fn test_report_dry_run_prints_json() {
    letsbus()
        .args([
            "report", "--kind", "bus_missing", "--line", "12", "--station", "3", "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""kind": "bus_missing""#));
}

#[test]
fn test_report_rejects_unknown_kind() {
    letsbus()
        .args(["report", "--kind", "late", "--line", "1", "--station", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown report kind"));
}

#[test]
fn test_stats_per_day() {
    let dir = tempfile::tempdir().unwrap();
    let stop_times = dir.path().join("stop_times.txt");
    let arrivals = dir.path().join("arrivals.csv");

    std::fs::File::create(&stop_times)
        .unwrap()
        .write_all(b"trip_id,arrival_time,departure_time,stop_id\n12,08:00:00,08:00:00,200\n12,08:10:00,08:10:00,201\n")
        .unwrap();
    std::fs::File::create(&arrivals)
        .unwrap()
        .write_all(b"200,08:02,2024-05-01\n201,08:16,2024-05-01\n")
        .unwrap();

    letsbus()
        .arg("stats")
        .arg("--stop-times")
        .arg(&stop_times)
        .args(["--line", "12", "--arrivals"])
        .arg(&arrivals)
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-05-01"))
        .stdout(predicate::str::is_match(r"2024-05-01\s+4\s+2").unwrap());
}

#[test]
fn test_serve_help() {
    letsbus()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database URL"));
}
