use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

fn cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_autodoc")));
    cmd.env_remove("AUTODOC_MANIFEST").env_remove("RUST_LOG");
    cmd
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn manifest() -> String {
    fixture_path("symbols.json")
}

// -- stdin mode --

#[test]
fn stdin_mode_produces_html() {
    let assert = cmd()
        .args(["-m", manifest().as_str()])
        .write_stdin("demo.widgets\n")
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("<!DOCTYPE html>"));
    assert!(output.contains("<section id=\"0\">\n<h2><code>demo.widgets</code></h2>"));
    assert!(output.contains("<p class=\"title\">Widgets for the demo.</p>"));
    assert!(output.contains("<h3><code>render(widget, strict=False, **options)</code></h3>"));
}

#[test]
fn stdin_mode_filters_private_and_reexported() {
    let assert = cmd()
        .args(["-m", manifest().as_str()])
        .write_stdin("demo.widgets\n")
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(!output.contains("_cache"));
    assert!(!output.contains("dumps"));
    // Classes are documented through their own selection line, not as members.
    assert!(!output.contains("class demo.widgets.Demo"));
}

#[test]
fn stdin_mode_class_selection() {
    let assert = cmd()
        .args(["-m", manifest().as_str()])
        .write_stdin("demo.widgets::Demo\n")
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("<h2><code>class demo.widgets.Demo(title)</code></h2>"));
    assert!(output.contains("<h3><code>get()</code></h3>"));
    assert!(output.contains("<h3><code>set(title)</code></h3>"));
    assert!(!output.contains("_touch"));
    assert!(output.contains("<dt>Attributes</dt>"));
    // The indented usage example in the description renders as code.
    assert!(output.contains("<pre><code>demo = Demo(title=&quot;demo&quot;)"));
}

#[test]
fn stdin_mode_sections_in_source_order() {
    let assert = cmd()
        .args(["-m", manifest().as_str(), "-f", "json"])
        .write_stdin("demo.widgets")
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let page: serde_json::Value = serde_json::from_str(&output).unwrap();
    let render = &page["docs"][0]["members"][0];
    assert_eq!(render["signature"], "render(widget, strict=False, **options)");
    let labels: Vec<_> = render["sections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["label"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(labels, ["Args", "Returns", "Raises"]);
    assert_eq!(
        render["sections"][0]["body"],
        "<p>widget: the widget<br />\nstrict: fail on unknown fields</p>\n"
    );
}

#[test]
fn stdin_json_toc_follows_selection_order() {
    let assert = cmd()
        .args(["-m", manifest().as_str(), "-f", "json"])
        .write_stdin("demo.widgets::Demo\ndemo.widgets\n")
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let page: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(page["toc"][0]["title"], "Demo");
    assert_eq!(page["toc"][0]["anchor"], "#0");
    assert_eq!(page["toc"][0]["active"], true);
    assert_eq!(page["toc"][0]["children"][0]["title"], "widgets");
    assert_eq!(page["toc"][0]["children"][0]["anchor"], "#1");
    assert_eq!(page["docs"][0]["title"], "A demo of autodoc");
}

#[test]
fn stdin_empty_selection() {
    let assert = cmd()
        .args(["-m", manifest().as_str(), "-f", "json"])
        .write_stdin("\n\n")
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let page: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(page["docs"], serde_json::json!([]));
    assert_eq!(page["toc"], serde_json::json!([]));
}

// -- failures --

#[test]
fn unknown_module_fails_with_line() {
    cmd()
        .args(["-m", manifest().as_str()])
        .write_stdin("demo.widgets\ndemo.missing\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot resolve `demo.missing`"));
}

#[test]
fn unknown_class_fails() {
    cmd()
        .args(["-m", manifest().as_str()])
        .write_stdin("demo.widgets::Gadget\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("demo.widgets::Gadget"));
}

#[test]
fn opaque_routine_fails() {
    cmd()
        .args(["-m", manifest().as_str()])
        .write_stdin("demo.native\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot inspect parameters of `demo.native.fast_path`"));
}

#[test]
fn manifest_required() {
    cmd()
        .write_stdin("demo.widgets\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--manifest"));
}

#[test]
fn manifest_from_environment() {
    let mut cmd = cmd();
    cmd.env("AUTODOC_MANIFEST", manifest())
        .write_stdin("demo.widgets\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<h2><code>demo.widgets</code></h2>"));
}

#[test]
fn invalid_format_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-m", manifest().as_str()])
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "xml"])
        .arg(fixture_path("api.autodoc"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

// -- header matching --

#[test]
fn strict_headers_ignore_prose_tokens() {
    let manifest = r#"{ "modules": [ { "name": "m", "doc": "Title\n\nThe Returns: value is cached.\n\nArgs:\n    a: first", "members": [] } ] }"#;
    let mut file = NamedTempFile::with_suffix(".json").unwrap();
    file.write_all(manifest.as_bytes()).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let loose = cmd()
        .args(["-m", path.as_str(), "-f", "json"])
        .write_stdin("m")
        .assert()
        .success();
    let page: serde_json::Value = serde_json::from_slice(&loose.get_output().stdout).unwrap();
    assert_eq!(page["docs"][0]["sections"].as_array().unwrap().len(), 2);

    let strict = cmd()
        .args(["-m", path.as_str(), "-f", "json", "--strict-headers"])
        .write_stdin("m")
        .assert()
        .success();
    let page: serde_json::Value = serde_json::from_slice(&strict.get_output().stdout).unwrap();
    assert_eq!(page["docs"][0]["sections"].as_array().unwrap().len(), 1);
    assert_eq!(page["docs"][0]["sections"][0]["label"], "Args");
    assert_eq!(page["docs"][0]["description"], "<p>The Returns: value is cached.</p>\n");
}

// -- file mode --

#[test]
fn file_mode_creates_output() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-m", manifest().as_str()])
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("api.autodoc"))
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("api.html")).unwrap();
    assert!(output.contains("<title>api</title>"));
    assert!(output.contains("<li class=\"active\"><a href=\"#0\">widgets</a>"));
    assert!(output.contains("<li><a href=\"#1\">Demo</a></li>"));
    assert!(output.contains("<section id=\"1\">\n<h2><code>class demo.widgets.Demo(title)</code></h2>"));
}

#[test]
fn file_mode_json_format() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-m", manifest().as_str()])
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "json"])
        .arg(fixture_path("api.autodoc"))
        .assert()
        .success();

    let output_path = dir.path().join("api.json");
    assert!(output_path.exists(), "Should create .json file");
    let page: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output_path).unwrap()).unwrap();
    assert_eq!(page["title"], "api");
    assert_eq!(page["docs"].as_array().unwrap().len(), 2);
}

#[test]
fn file_mode_requires_output() {
    cmd()
        .args(["-m", manifest().as_str()])
        .arg(fixture_path("api.autodoc"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output is required"));
}

#[test]
fn file_mode_error_names_page() {
    let dir = TempDir::new().unwrap();
    let mut input = NamedTempFile::with_suffix(".autodoc").unwrap();
    input.write_all(b"demo.widgets\nnot.a.module\n").unwrap();

    cmd()
        .args(["-m", manifest().as_str()])
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(input.path().to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to document"))
        .stderr(predicate::str::contains("not.a.module"));
}

// -- page template --

#[test]
fn file_mode_with_template() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-m", manifest().as_str()])
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-t", fixture_path("page.html").as_str()])
        .arg(fixture_path("api.autodoc"))
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("api.html")).unwrap();
    assert!(
        output.starts_with("<html><head><title>api</title></head>"),
        "Should start with template, got: {}",
        &output[..80.min(output.len())]
    );
    assert!(output.contains("<aside><nav class=\"toc\">"));
    assert!(output.contains("<article><section id=\"0\">"));
    assert!(!output.contains("<!DOCTYPE html>"));
}

#[test]
fn missing_template_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-m", manifest().as_str()])
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-t", "/nonexistent/template.html"])
        .arg(fixture_path("api.autodoc"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("template not found"));
}
