// Contract test for `erth scrape` command

use assert_cmd::Command;
use predicates::prelude::*;

const PAGE: &str = include_str!("../fixtures/wartezeit.html");

fn erth() -> Command {
    let mut cmd = Command::cargo_bin("erth").unwrap();
    cmd.env_remove("ERTH_PAGE_URL").env_remove("ERTH_LISTEN");
    cmd
}

#[test]
fn scrape_prints_prometheus_text() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/wartezeit")
        .with_status(200)
        .with_body(PAGE)
        .create();

    let mut cmd = erth();
    cmd.arg("scrape")
        .arg("--page-url")
        .arg(format!("{}/wartezeit", server.url()));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "erth_people_waiting{service=\"citizen\"}",
        ))
        .stdout(predicate::str::contains(
            "erth_waiting_time{service=\"drivers_license\"}",
        ))
        .stdout(predicate::str::contains("# Meta information"));
}

#[test]
fn scrape_json_prints_a_structured_report() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/wartezeit")
        .with_status(200)
        .with_body(PAGE)
        .create();

    let mut cmd = erth();
    cmd.arg("scrape")
        .arg("--json")
        .arg("--page-url")
        .arg(format!("{}/wartezeit", server.url()));

    let output = cmd.assert().success().get_output().stdout.clone();
    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(report["citizen"]["people_waiting"], 12);
    assert_eq!(report["citizen"]["last_called_ticket"], "B123");
    assert_eq!(report["drivers_license"]["people_waiting"], 3);
    assert_eq!(report["drivers_license"]["estimated_wait_minutes"], 8);
    assert!(report["scraped_at"].is_string());
}

#[test]
fn scrape_rejects_a_non_http_page_url() {
    let mut cmd = erth();
    cmd.arg("scrape").arg("--page-url").arg("ftp://example.org");

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn scrape_reports_a_missing_config_file() {
    let mut cmd = erth();
    cmd.arg("scrape")
        .arg("--config")
        .arg("/nonexistent/erth.toml");

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn scrape_reports_an_unreachable_page() {
    let mut cmd = erth();
    cmd.arg("scrape")
        .arg("--page-url")
        .arg("http://127.0.0.1:1/wartezeit")
        .arg("--timeout")
        .arg("1");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Network error"));
}

#[test]
fn scrape_reports_an_unexpected_page_layout() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/wartezeit")
        .with_status(200)
        .with_body("<html><body><p>Baustelle</p></body></html>")
        .create();

    let mut cmd = erth();
    cmd.arg("scrape")
        .arg("--page-url")
        .arg(format!("{}/wartezeit", server.url()));

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Scrape error"));
}
