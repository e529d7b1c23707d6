//! End-to-end tests: run the `shopper-docs` binary against the fixture
//! content and inspect the generated site.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shopper-docs"))
        .args(args)
        .output()
        .expect("failed to run shopper-docs")
}

fn build_into(out: &Path) -> Output {
    run(&[
        "build",
        "--source",
        fixtures().to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
    ])
}

fn read(out: &Path, route: &str) -> String {
    std::fs::read_to_string(out.join(route).join("index.html"))
        .unwrap_or_else(|e| panic!("missing page {route}: {e}"))
}

#[test]
fn build_writes_the_whole_site() {
    let tmp = TempDir::new().unwrap();
    let result = build_into(tmp.path());
    assert!(
        result.status.success(),
        "build failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );

    for route in [
        "",
        "getting-started/installation",
        "getting-started/configuration",
        "screencasts/introduction",
        "screencasts/products",
        "screencasts/orders",
        "screencasts/customers",
        "components",
        "screencasts/coming-soon",
    ] {
        assert!(
            tmp.path().join(route).join("index.html").exists(),
            "missing {route}"
        );
    }
    assert!(tmp.path().join("style.css").exists());

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("==> Build complete"));
    assert!(stdout.contains("Generated 7 pages, 2 built-in"));
}

#[test]
fn video_pages_follow_the_lesson_sequence() {
    let tmp = TempDir::new().unwrap();
    assert!(build_into(tmp.path()).status.success());

    let intro = read(tmp.path(), "screencasts/introduction");
    assert!(intro.contains(
        "https://player.vimeo.com/video/76979871?title=0&amp;byline=0&amp;portrait=0&amp;speed=1&amp;app_id=122963"
    ));
    assert!(intro.contains(r#"href="/screencasts/products""#));
    assert!(intro.contains("Next lesson"));

    // Orders is unpublished, so Products falls back.
    let products = read(tmp.path(), "screencasts/products");
    assert!(products.contains(r#"href="/screencasts/coming-soon""#));
    assert!(products.contains("Next lesson (coming soon)"));

    let customers = read(tmp.path(), "screencasts/customers");
    assert!(customers.contains("Next lesson (coming soon)"));
}

#[test]
fn basic_pages_render_headers_and_previews() {
    let tmp = TempDir::new().unwrap();
    assert!(build_into(tmp.path()).status.success());

    let home = read(tmp.path(), "");
    assert!(home.contains("<title>Introduction | Shopper Docs</title>"));
    assert!(home.contains("Laravel Shopper version"));
    assert!(home.contains(r#"id="home""#));
    assert!(home.contains("sh-alert-info"));
    assert!(home.contains("sh-page-divider"));

    let configuration = read(tmp.path(), "getting-started/configuration");
    assert!(!configuration.contains("sh-page-divider"));
    assert!(configuration.contains("sh-empty-card"));
}

#[test]
fn check_json_prints_the_manifest() {
    let result = run(&["check", "--json", "--source", fixtures().to_str().unwrap()]);
    assert!(result.status.success());
    let manifest: serde_json::Value = serde_json::from_slice(&result.stdout).unwrap();
    assert_eq!(manifest["pages"].as_array().unwrap().len(), 7);
    assert_eq!(manifest["config"]["site_title"], "Shopper Docs");
}

#[test]
fn render_narrow_viewport_omits_sidebar() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir_all(tmp.path().join("010-guide")).unwrap();
    std::fs::write(
        tmp.path().join("config.toml"),
        "[ad]\nserve = \"CEAI6KJL\"\nplacement = \"shopper\"\n",
    )
    .unwrap();
    std::fs::write(
        tmp.path().join("010-guide/010-start.md"),
        "---\ntitle: Start\n---\n\nHello.\n",
    )
    .unwrap();
    let source = tmp.path().to_str().unwrap();

    let wide = run(&["render", "/guide/start", "--source", source]);
    assert!(wide.status.success());
    assert!(String::from_utf8_lossy(&wide.stdout).contains("_carbon_ads_js"));

    let narrow = run(&["render", "/guide/start", "--width", "800", "--source", source]);
    assert!(narrow.status.success());
    let html = String::from_utf8_lossy(&narrow.stdout);
    assert!(!html.contains("sh-layout-secondary"));
    assert!(!html.contains("_carbon_ads_js"));
}

#[test]
fn invalid_preview_fails_the_build() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("index.md"),
        "---\ntitle: Home\n---\n\n```preview\ncomponent = \"alert\"\ncolor = \"purple\"\nmessage = \"x\"\n```\n",
    )
    .unwrap();
    let out = TempDir::new().unwrap();
    let result = run(&[
        "build",
        "--source",
        tmp.path().to_str().unwrap(),
        "--output",
        out.path().to_str().unwrap(),
    ]);
    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("index.md"));
    assert!(stderr.contains("purple"));
}

#[test]
fn gen_config_is_valid_toml() {
    let result = run(&["gen-config"]);
    assert!(result.status.success());
    let text = String::from_utf8_lossy(&result.stdout);
    let value: toml::Value = toml::from_str(&text).unwrap();
    assert_eq!(value["layout"]["sidebar_breakpoint"].as_integer(), Some(1280));
}

#[test]
fn check_rejects_unnumbered_video_page() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir_all(tmp.path().join("screencasts")).unwrap();
    std::fs::write(
        tmp.path().join("screencasts/intro.md"),
        "---\ntitle: Intro\nlayout: video\nvimeoId: '76979871'\n---\n",
    )
    .unwrap();
    let result = run(&["check", "--source", tmp.path().to_str().unwrap()]);
    assert!(!result.status.success());
    assert!(!String::from_utf8_lossy(&result.stdout).contains("Content is valid"));
    assert!(String::from_utf8_lossy(&result.stderr).contains("screencasts/intro.md"));
}
