//! Integration tests for the build command.
//!
//! These tests run `build::execute` against real project directories.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wcb_cli::CliError;
use wcb_cli::cli::BuildArgs;
use wcb_cli::commands::build;

const PREFIX: &str = "https://cdn.example/gh/owner/repo@";

fn component() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("src/img")).unwrap();
    fs::write(
        root.join("src/index.html"),
        "<link rel=\"stylesheet\" href=\"{{DEST}}/card{{INFIX}}.css\">\n\
         <script type=\"module\" src=\"{{DEST}}/card{{INFIX}}.js\"></script>\n",
    )
    .unwrap();
    fs::write(
        root.join("src/card.css"),
        ".card { background: url(\"{{DEST}}/img/bg.svg\"); color: red; }\n",
    )
    .unwrap();
    fs::write(
        root.join("src/card.js"),
        "export const base = \"{{DEST}}\";\nexport function label(name) { return base + '/' + name; }\n",
    )
    .unwrap();
    fs::write(root.join("src/img/bg.svg"), "<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap();
    fs::write(root.join("package.json"), r#"{ "name": "card", "version": "3.1.0" }"#).unwrap();
    fs::write(
        root.join("wcb.config.json"),
        format!(r#"{{ "cdnPrefix": "{PREFIX}" }}"#),
    )
    .unwrap();
    temp
}

fn args(root: &Path) -> BuildArgs {
    BuildArgs {
        cwd: Some(root.to_path_buf()),
        ..BuildArgs::default()
    }
}

fn manifest(root: &Path) -> Vec<String> {
    let text = fs::read_to_string(root.join("dist/CDN-FILES.md")).unwrap();
    let mut lines: Vec<String> = text
        .lines()
        .filter_map(|line| line.strip_prefix("- "))
        .map(str::to_string)
        .collect();
    lines.sort();
    lines
}

#[tokio::test]
async fn test_local_build() {
    let temp = component();
    let root = temp.path();

    let report = build::execute(args(root)).await.unwrap();
    assert_eq!(report.destination.as_str(), "/dist");

    let html = fs::read_to_string(root.join("dist/index.html")).unwrap();
    assert!(html.contains("href=\"/dist/card.css\""));
    assert!(html.contains("src=\"/dist/card.js\""));

    assert_eq!(
        manifest(root),
        vec![
            "/dist/card.css",
            "/dist/card.js",
            "/dist/img/bg.svg",
            "/dist/index.html",
        ]
    );
}

#[tokio::test]
async fn test_tag_build_with_value() {
    let temp = component();
    let root = temp.path();

    let report = build::execute(BuildArgs {
        tag: Some(Some("v2.0.0".into())),
        ..args(root)
    })
    .await
    .unwrap();
    assert_eq!(report.destination.as_str(), format!("{PREFIX}v2.0.0/dist"));

    let css = fs::read_to_string(root.join("dist/card.css")).unwrap();
    assert!(css.contains(&format!("{PREFIX}v2.0.0/dist/img/bg.svg")));
}

#[tokio::test]
async fn test_bare_tag_uses_package_version() {
    let temp = component();
    let root = temp.path();

    let report = build::execute(BuildArgs {
        tag: Some(None),
        branch: true,
        ..args(root)
    })
    .await
    .unwrap();
    assert_eq!(report.destination.as_str(), format!("{PREFIX}3.1.0/dist"));
}

#[tokio::test]
async fn test_minified_build_with_clean() {
    let temp = component();
    let root = temp.path();
    fs::create_dir_all(root.join("dist")).unwrap();
    fs::write(root.join("dist/stale.txt"), "old").unwrap();

    build::execute(BuildArgs {
        minify: true,
        clean: true,
        ..args(root)
    })
    .await
    .unwrap();

    assert!(!root.join("dist/stale.txt").exists());
    for file in [
        "index.min.html",
        "card.min.css",
        "card.min.css.map",
        "card.min.js",
        "card.min.js.map",
    ] {
        assert!(root.join("dist").join(file).is_file(), "missing {file}");
    }

    let html = fs::read_to_string(root.join("dist/index.min.html")).unwrap();
    assert!(html.contains("/dist/card.min.css"));
    assert!(!html.contains("{{"));
}

#[tokio::test]
async fn test_out_dir_flag_overrides_config() {
    let temp = component();
    let root = temp.path();

    let report = build::execute(BuildArgs {
        out_dir: Some(PathBuf::from("./public/cdn/")),
        ..args(root)
    })
    .await
    .unwrap();

    assert_eq!(report.destination.as_str(), "/public/cdn");
    assert!(root.join("public/cdn/CDN-FILES.md").is_file());
    assert!(!root.join("dist").exists());
}

#[tokio::test]
async fn test_missing_source_dir() {
    let temp = TempDir::new().unwrap();
    let err = build::execute(args(temp.path())).await.unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
    assert!(!temp.path().join("dist").exists());
}

#[tokio::test]
async fn test_missing_version_for_bare_tag() {
    let temp = component();
    let root = temp.path();
    fs::write(root.join("package.json"), r#"{ "name": "card" }"#).unwrap();

    let err = build::execute(BuildArgs {
        tag: Some(None),
        ..args(root)
    })
    .await
    .unwrap_err();
    assert!(err.to_string().contains("version"));
    assert!(!root.join("dist/CDN-FILES.md").exists());
}

#[tokio::test]
async fn test_tag_with_whitespace_rejected() {
    let temp = component();
    let err = build::execute(BuildArgs {
        tag: Some(Some("v1 beta".into())),
        ..args(temp.path())
    })
    .await
    .unwrap_err();
    assert!(err.to_string().contains("tag"));
}

#[tokio::test]
async fn test_invalid_js_fails_minified_build() {
    let temp = component();
    let root = temp.path();
    fs::write(root.join("src/card.js"), "export function (").unwrap();

    let err = build::execute(BuildArgs {
        minify: true,
        ..args(root)
    })
    .await
    .unwrap_err();
    assert!(err.to_string().contains("js-min"));
    assert!(!root.join("dist/CDN-FILES.md").exists());
}
