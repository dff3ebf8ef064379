//! CLI integration tests
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread;

use predicates::prelude::*;
use tempfile::TempDir;

const SCENARIO_PAGE: &str = "<html><body><div class=\"govspeak\"><h2>Title</h2><p>Hello\nworld</p><ul><li>One</li><li>Two</li></ul></div></body></html>";

const SCENARIO_TEXT: &str = "Title\n-----\n\nHello world\n\n• One\n• Two\n\n";

const DUPLICATE_PAGE: &str = "<html><body><article class=\"gem-c-govspeak\"><p>Once</p></article></body></html>";

const BANNER: &str = "THE HIGHWAY CODE — FULL TEXT\n=============================\n\n";

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("pagetext")
}

/// Serves canned `(path, status, body)` responses from a background thread.
fn serve(routes: Vec<(&'static str, u16, &'static str)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            let mut buf = [0u8; 8192];
            let n = stream.read(&mut buf).unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();

            let (status, body) = routes
                .iter()
                .find(|(p, _, _)| *p == path)
                .map(|(_, s, b)| (*s, *b))
                .unwrap_or((404, "not found"));
            let reason = if status == 200 { "OK" } else { "Other" };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}", addr)
}

fn write_urls(dir: &Path, urls: &[String]) -> String {
    let path = dir.join("urls.txt");
    fs::write(&path, format!("# pages to scrape\n{}\n", urls.join("\n"))).unwrap();
    path.to_str().unwrap().to_string()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_cli_scenario() {
    let base = serve(vec![("/guide/intro", 200, SCENARIO_PAGE), ("/guide/gone", 404, "gone")]);
    let tmp = TempDir::new().unwrap();
    let urls = write_urls(tmp.path(), &[format!("{base}/guide/intro"), format!("{base}/guide/gone")]);
    let pages = tmp.path().join("pages");
    let combined = tmp.path().join("full.txt");

    cmd()
        .current_dir(tmp.path())
        .args(["--urls", &urls, "--prefix", &format!("{base}/guide/")])
        .args(["--out-dir", path_arg(&pages), "--combined", path_arg(&combined)])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/2]"))
        .stdout(predicate::str::contains(format!("Scraping {base}/guide/intro")))
        .stdout(predicate::str::contains("Saved:"))
        .stdout(predicate::str::contains("intro.txt"))
        .stdout(predicate::str::contains("ERROR:"))
        .stdout(predicate::str::contains("unexpected status 404"))
        .stdout(predicate::str::contains("1/2 pages saved"));

    assert_eq!(fs::read_dir(&pages).unwrap().count(), 1);
    assert_eq!(fs::read_to_string(pages.join("intro.txt")).unwrap(), SCENARIO_TEXT);
    assert_eq!(
        fs::read_to_string(&combined).unwrap(),
        format!("{BANNER}\n===== intro =====\n\n{SCENARIO_TEXT}")
    );
}

#[test]
fn test_cli_multi_segment_identifier() {
    let base = serve(vec![("/guide/rules/cyclists", 200, SCENARIO_PAGE)]);
    let tmp = TempDir::new().unwrap();
    let urls = write_urls(tmp.path(), &[format!("{base}/guide/rules/cyclists")]);
    let pages = tmp.path().join("pages");
    let combined = tmp.path().join("full.txt");

    cmd()
        .args(["-u", &urls, "--prefix", &format!("{base}/guide/")])
        .args(["-o", path_arg(&pages), "-c", path_arg(&combined)])
        .assert()
        .success();

    assert!(pages.join("rules_cyclists.txt").exists());
    assert!(fs::read_to_string(&combined).unwrap().contains("\n===== rules cyclists =====\n\n"));
}

#[test]
fn test_cli_combined_write_failure() {
    let base = serve(vec![("/guide/intro", 200, SCENARIO_PAGE)]);
    let tmp = TempDir::new().unwrap();
    let urls = write_urls(tmp.path(), &[format!("{base}/guide/intro")]);
    let combined = tmp.path().join("missing-dir").join("full.txt");

    cmd()
        .args(["--urls", &urls, "--prefix", &format!("{base}/guide/")])
        .args(["--out-dir", path_arg(&tmp.path().join("pages")), "--combined", path_arg(&combined)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write full text"));
}

#[test]
fn test_cli_custom_banner() {
    let base = serve(vec![("/guide/intro", 200, SCENARIO_PAGE)]);
    let tmp = TempDir::new().unwrap();
    let urls = write_urls(tmp.path(), &[format!("{base}/guide/intro")]);
    let combined = tmp.path().join("full.txt");

    cmd()
        .args(["--urls", &urls, "--prefix", &format!("{base}/guide/"), "--banner", "DOCS"])
        .args(["--out-dir", path_arg(&tmp.path().join("pages")), "--combined", path_arg(&combined)])
        .assert()
        .success();

    assert!(fs::read_to_string(&combined).unwrap().starts_with("DOCS\n====\n\n\n===== intro ====="));
}

#[test]
fn test_cli_dedupe() {
    let base = serve(vec![("/guide/a", 200, DUPLICATE_PAGE)]);
    let tmp = TempDir::new().unwrap();
    let urls = write_urls(tmp.path(), &[format!("{base}/guide/a")]);
    let pages = tmp.path().join("pages");

    cmd()
        .args(["--urls", &urls, "--prefix", &format!("{base}/guide/")])
        .args(["--out-dir", path_arg(&pages), "--combined", path_arg(&tmp.path().join("full.txt"))])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(pages.join("a.txt")).unwrap(), "Once\n\nOnce\n\n");

    cmd()
        .args(["--urls", &urls, "--prefix", &format!("{base}/guide/"), "--dedupe"])
        .args(["--out-dir", path_arg(&pages), "--combined", path_arg(&tmp.path().join("full.txt"))])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(pages.join("a.txt")).unwrap(), "Once\n\n");
}

#[test]
fn test_cli_custom_selector() {
    let base = serve(vec![("/guide/a", 200, "<main id=\"body\"><p>Main body</p></main>")]);
    let tmp = TempDir::new().unwrap();
    let urls = write_urls(tmp.path(), &[format!("{base}/guide/a")]);
    let pages = tmp.path().join("pages");

    cmd()
        .args(["--urls", &urls, "--prefix", &format!("{base}/guide/"), "-s", "main#body"])
        .args(["--out-dir", path_arg(&pages), "--combined", path_arg(&tmp.path().join("full.txt"))])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved:"));

    assert_eq!(fs::read_to_string(pages.join("a.txt")).unwrap(), "Main body\n\n");
}

#[test]
fn test_cli_invalid_selector() {
    let tmp = TempDir::new().unwrap();
    let urls = write_urls(tmp.path(), &["http://127.0.0.1:9/guide/a".to_string()]);

    cmd()
        .current_dir(tmp.path())
        .args(["--urls", &urls, "--selector", "[[bad"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid container selector"));
}

#[test]
fn test_cli_invalid_url_list() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("urls.txt");
    fs::write(&path, "not a url\n").unwrap();

    cmd()
        .current_dir(tmp.path())
        .args(["--urls", path_arg(&path)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn test_cli_missing_url_list() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .current_dir(tmp.path())
        .args(["--urls", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load URL list"));
}

#[test]
fn test_cli_completions() {
    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pagetext"));
}

#[test]
fn test_cli_verbose() {
    let base = serve(vec![("/guide/intro", 200, SCENARIO_PAGE)]);
    let tmp = TempDir::new().unwrap();
    let urls = write_urls(tmp.path(), &[format!("{base}/guide/intro")]);

    cmd()
        .args(["-v", "--urls", &urls, "--prefix", &format!("{base}/guide/")])
        .args(["--out-dir", path_arg(&tmp.path().join("pages")), "--combined", path_arg(&tmp.path().join("full.txt"))])
        .assert()
        .success()
        .stderr(predicate::str::contains("pagetext"))
        .stdout(predicate::str::contains("Saved:"));
}
