#![cfg(feature = "cli")]

use std::process::Command;
use tempfile::TempDir;

fn site_with_about_texts() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("texts/about")).unwrap();
    std::fs::write(dir.path().join("texts/about/page-title.txt"), "Minusta\n").unwrap();
    std::fs::write(dir.path().join("texts/about/history-1.txt"), "Koulutus & työ").unwrap();
    dir
}

#[test]
fn test_cli_renders_html_from_local_directory() {
    let site = site_with_about_texts();

    let output = Command::new(env!("CARGO_BIN_EXE_sivu-render"))
        .args(["--page", "about", "--content-dir"])
        .arg(site.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let html = String::from_utf8(output.stdout).unwrap();
    assert!(html.starts_with("<body data-page=\"about\">"));
    assert!(html.contains("<h2 id=\"content-page-title\">Minusta</h2>"));
    assert!(html.contains("<p>Koulutus &amp; työ</p>"));
    assert!(html.contains("<h3 id=\"about-history-title\">Tausta ja koulutus</h3>"));
}

#[test]
fn test_cli_writes_json_file() {
    let site = site_with_about_texts();
    let out = site.path().join("about.json");

    let status = Command::new(env!("CARGO_BIN_EXE_sivu-render"))
        .args(["--page", "about", "--format", "json", "--content-dir"])
        .arg(site.path())
        .arg("--output")
        .arg(&out)
        .status()
        .unwrap();

    assert!(status.success());
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["tag"], "body");
    assert_eq!(json["attributes"]["data-page"], "about");
}

#[test]
fn test_cli_rejects_missing_base_url() {
    let status = Command::new(env!("CARGO_BIN_EXE_sivu-render"))
        .args(["--page", "home"])
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(1));
}
