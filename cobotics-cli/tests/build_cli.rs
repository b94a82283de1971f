use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const TEMPLATE: &str = "<html><body>\
{% for c in challenges %}<h2>{{ c.title }}</h2>{% endfor %}\
<script>const SKILLS = {{ skills | json | safe }};</script>\
</body></html>\n";

fn cobotics_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cobotics"));
    cmd.current_dir(cwd).env_remove("RUST_LOG");
    cmd
}

fn write_site(root: &Path, counts: [usize; 4]) {
    let names = ["challenges", "missions", "task_plots", "skills"];
    fs::create_dir_all(root.join("data")).unwrap();
    for (name, n) in names.iter().zip(counts) {
        let body: String = (0..n).map(|i| format!("- title: {name} {i}\n")).collect();
        fs::write(root.join("data").join(format!("{name}.yaml")), body).unwrap();
    }
    fs::create_dir_all(root.join("templates")).unwrap();
    fs::write(root.join("templates").join("index.html"), TEMPLATE).unwrap();
}

#[test]
fn no_args_builds_index_html_in_cwd() {
    let site = TempDir::new().unwrap();
    write_site(site.path(), [3, 2, 1, 0]);

    cobotics_cmd(site.path())
        .assert()
        .success()
        .stdout(contains("Starting Cobotics4All Build"))
        .stdout(contains("Loaded 3 challenges, 2 missions, 1 plots"))
        .stdout(contains("Generated index.html"));

    let html = fs::read_to_string(site.path().join("index.html")).unwrap();
    assert!(!html.is_empty());
    assert_eq!(html.matches("<h2>").count(), 3);
    assert!(html.contains("const SKILLS = [];"));
}

#[test]
fn missing_challenges_reports_file_and_keeps_output() {
    let site = TempDir::new().unwrap();
    write_site(site.path(), [3, 2, 1, 0]);
    fs::remove_file(site.path().join("data").join("challenges.yaml")).unwrap();
    fs::write(site.path().join("index.html"), "previous").unwrap();

    cobotics_cmd(site.path())
        .assert()
        .failure()
        .stderr(contains("Could not find data file").and(contains("challenges.yaml")))
        .stdout(contains("Generated").not());

    assert_eq!(fs::read_to_string(site.path().join("index.html")).unwrap(), "previous");
}

#[test]
fn missing_data_file_does_not_create_output() {
    let site = TempDir::new().unwrap();
    write_site(site.path(), [1, 1, 1, 1]);
    fs::remove_file(site.path().join("data").join("missions.yaml")).unwrap();

    cobotics_cmd(site.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(contains("missions.yaml"));
    assert!(!site.path().join("index.html").exists());
}

#[test]
fn missing_template_fails_with_template_name() {
    let site = TempDir::new().unwrap();
    write_site(site.path(), [1, 1, 1, 1]);
    fs::remove_file(site.path().join("templates").join("index.html")).unwrap();

    cobotics_cmd(site.path())
        .assert()
        .failure()
        .stderr(contains("template 'index.html' not found"));
    assert!(!site.path().join("index.html").exists());
}

#[test]
fn two_runs_produce_identical_bytes() {
    let site = TempDir::new().unwrap();
    write_site(site.path(), [2, 2, 2, 2]);

    cobotics_cmd(site.path()).assert().success();
    let first = fs::read(site.path().join("index.html")).unwrap();
    cobotics_cmd(site.path()).assert().success();
    let second = fs::read(site.path().join("index.html")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn root_and_output_flags_redirect_paths() {
    let site = TempDir::new().unwrap();
    write_site(site.path(), [1, 0, 0, 0]);
    let elsewhere = TempDir::new().unwrap();
    let out = elsewhere.path().join("public").join("page.html");

    cobotics_cmd(elsewhere.path())
        .arg("--root")
        .arg(site.path())
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Generated page.html"));

    assert!(out.exists());
    assert!(!site.path().join("index.html").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let site = TempDir::new().unwrap();
    write_site(site.path(), [1, 1, 1, 1]);

    cobotics_cmd(site.path())
        .args(["build", "--dry-run"])
        .assert()
        .success()
        .stdout(contains("[dry-run]"))
        .stdout(contains("would generate index.html"));
    assert!(!site.path().join("index.html").exists());
}

#[test]
fn check_json_reports_counts() {
    let site = TempDir::new().unwrap();
    write_site(site.path(), [3, 2, 1, 0]);

    let output = cobotics_cmd(site.path())
        .args(["check", "--json"])
        .output()
        .expect("run cobotics check --json");
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(report["counts"]["challenges"], 3);
    assert_eq!(report["counts"]["task_plots"], 1);
    assert_eq!(report["counts"]["skills"], 0);
    assert_eq!(report["sha256"].as_str().map(str::len), Some(64));
    assert!(!site.path().join("index.html").exists());
}

#[test]
fn diff_is_empty_after_build() {
    let site = TempDir::new().unwrap();
    write_site(site.path(), [1, 1, 1, 1]);

    cobotics_cmd(site.path())
        .arg("diff")
        .assert()
        .success()
        .stdout(contains("+++ b/index.html"));

    cobotics_cmd(site.path()).assert().success();

    cobotics_cmd(site.path())
        .arg("diff")
        .assert()
        .success()
        .stdout(contains("No differences"));
}

#[test]
fn bundled_demo_site_builds() {
    let demo = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("site");
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("index.html");

    cobotics_cmd(out_dir.path())
        .arg("--root")
        .arg(&demo)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Loaded 3 challenges, 3 missions, 1 plots"));

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("Quality &amp; Control"));
    assert!(html.contains(r#"id="skill-force-control""#));
    assert!(!demo.join("index.html").exists(), "demo tree must stay clean");
}
