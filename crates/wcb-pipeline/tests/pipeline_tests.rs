//! End-to-end pipeline runs against temporary projects.

mod helpers;

use helpers::*;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use wcb_pipeline::placeholder::has_markers;
use wcb_pipeline::{AssetKind, DestinationSource, Error, ResolutionError};

#[tokio::test]
async fn test_local_build_rewrites_index() {
    let temp = TempDir::new().unwrap();
    write_files(
        temp.path(),
        &[("src/index.html", "<script src=\"{{DEST}}/x{{INFIX}}.js\"></script>")],
    );

    let report = options(temp.path()).run().await.unwrap();

    assert_eq!(report.destination.as_str(), "/dist");
    assert_eq!(
        read(temp.path().join("dist/index.html")),
        "<script src=\"/dist/x.js\"></script>"
    );
    assert_eq!(
        read(temp.path().join("dist/CDN-FILES.md")),
        "# CDN Files\n\n- /dist/index.html"
    );
    assert_eq!(report.manifest_entries, 1);
}

#[tokio::test]
async fn test_plain_html_keeps_empty_infix_comment() {
    let temp = TempDir::new().unwrap();
    write_files(
        temp.path(),
        &[(
            "src/index.html",
            "<link rel=\"stylesheet\" href=\"{{DEST}}/x.css\"><!--{{INFIX}}-->",
        )],
    );

    options(temp.path()).run().await.unwrap();

    let html = read(temp.path().join("dist/index.html"));
    assert!(html.contains("href=\"/dist/x.css\""));
    assert!(html.contains("<!---->"));
}

#[tokio::test]
async fn test_plain_build_has_no_min_files() {
    let temp = component_project();
    options(temp.path()).run().await.unwrap();

    let files = list_files(&temp.path().join("dist"));
    assert_eq!(
        files,
        vec![
            PathBuf::from("CDN-FILES.md"),
            PathBuf::from("card.js"),
            PathBuf::from("img/bg.svg"),
            PathBuf::from("index.html"),
            PathBuf::from("styles/card.css"),
        ]
    );
    assert!(
        files
            .iter()
            .all(|f| !f.to_string_lossy().contains(".min."))
    );
}

#[tokio::test]
async fn test_minified_build_adds_variants_and_maps() {
    let temp = component_project();
    let report = options(temp.path()).minify(true).run().await.unwrap();
    let dist = temp.path().join("dist");

    for plain in ["index.html", "card.js", "styles/card.css"] {
        assert!(dist.join(plain).exists(), "missing {plain}");
    }
    for min in ["index.min.html", "card.min.js", "styles/card.min.css"] {
        assert!(dist.join(min).exists(), "missing {min}");
    }
    assert!(dist.join("card.min.js.map").exists());
    assert!(dist.join("styles/card.min.css.map").exists());
    assert!(!dist.join("index.min.html.map").exists());

    let js = read(dist.join("card.min.js"));
    assert!(js.contains("/dist/index.min.html"));
    assert!(js.ends_with("//# sourceMappingURL=card.min.js.map"));

    let html = read(dist.join("index.min.html"));
    assert!(html.contains("/dist/styles/card.min.css"));
    assert!(html.contains("/dist/card.min.js"));

    let names: Vec<&str> = report.leaves.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names.len(), 7);
    assert!(names.contains(&"css-min"));
    assert!(names.contains(&"copy"));
}

#[tokio::test]
async fn test_no_markers_survive_in_templates() {
    let temp = component_project();
    options(temp.path()).minify(true).run().await.unwrap();

    for file in list_files(&temp.path().join("dist")) {
        if AssetKind::from_path(&file).is_some() {
            let text = read(temp.path().join("dist").join(&file));
            assert!(!has_markers(&text), "{} still has markers", file.display());
        }
    }
}

#[tokio::test]
async fn test_manifest_lists_every_other_file() {
    let temp = component_project();
    let report = options(temp.path()).minify(true).run().await.unwrap();

    let files = list_files(&temp.path().join("dist"));
    assert_eq!(report.manifest_entries, files.len() - 1);

    let manifest = read(&report.manifest_path);
    assert!(manifest.starts_with("# CDN Files\n\n- "));
    assert_eq!(manifest.lines().filter(|l| l.starts_with("- /dist/")).count(), files.len() - 1);
    assert!(manifest.contains("- /dist/img/bg.svg"));
    assert!(!manifest.contains("CDN-FILES.md"));
}

#[tokio::test]
async fn test_explicit_tag_destination() {
    let temp = component_project();
    let report = options(temp.path())
        .destination(DestinationSource::Tag(Some("v2.0.0".into())))
        .run()
        .await
        .unwrap();

    let base = format!("{TEST_PREFIX}v2.0.0/dist");
    assert_eq!(report.destination.as_str(), base);
    assert!(read(temp.path().join("dist/card.js")).contains(&format!("{base}/index.html")));
    assert!(read(&report.manifest_path).contains(&format!("- {base}/card.js")));
}

#[tokio::test]
async fn test_bare_tag_uses_package_version() {
    let temp = component_project();
    let report = options(temp.path())
        .destination(DestinationSource::Tag(None))
        .run()
        .await
        .unwrap();

    assert_eq!(
        report.destination.as_str(),
        format!("{TEST_PREFIX}1.4.2/dist")
    );
}

#[tokio::test]
async fn test_branch_destination() {
    let temp = component_project();
    let report = options(temp.path())
        .destination(DestinationSource::Branch)
        .run()
        .await
        .unwrap();

    assert_eq!(report.destination.as_str(), format!("{TEST_PREFIX}main/dist"));
}

#[tokio::test]
async fn test_branch_failure_stops_before_build() {
    let temp = component_project();
    let err = options(temp.path())
        .destination(DestinationSource::Branch)
        .version_control(Arc::new(NoRepository))
        .run()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Resolution(ResolutionError::VcsFailed { .. })
    ));
    assert!(!temp.path().join("dist/index.html").exists());
}

#[tokio::test]
async fn test_failing_minifier_skips_manifest() {
    let temp = component_project();
    let err = options(temp.path())
        .minify(true)
        .minifier(Arc::new(FailingOn(AssetKind::Css)))
        .run()
        .await
        .unwrap_err();

    match err {
        Error::BuildTask { task, path, .. } => {
            assert_eq!(task, "css-min");
            assert!(path.ends_with("card.css"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!temp.path().join("dist/CDN-FILES.md").exists());
}

#[tokio::test]
async fn test_rebuild_is_idempotent() {
    let temp = component_project();
    options(temp.path()).minify(true).run().await.unwrap();
    let dist = temp.path().join("dist");
    let first: Vec<(PathBuf, Vec<u8>)> = list_files(&dist)
        .into_iter()
        .filter(|f| f != &PathBuf::from("CDN-FILES.md"))
        .map(|f| {
            let bytes = fs::read(dist.join(&f)).unwrap();
            (f, bytes)
        })
        .collect();

    options(temp.path())
        .minify(true)
        .clean(true)
        .run()
        .await
        .unwrap();
    let second: Vec<(PathBuf, Vec<u8>)> = list_files(&dist)
        .into_iter()
        .filter(|f| f != &PathBuf::from("CDN-FILES.md"))
        .map(|f| {
            let bytes = fs::read(dist.join(&f)).unwrap();
            (f, bytes)
        })
        .collect();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_clean_removes_stale_outputs() {
    let temp = component_project();
    write_files(temp.path(), &[("dist/old/stale.js", "1")]);

    options(temp.path()).clean(true).run().await.unwrap();

    assert!(!temp.path().join("dist/old/stale.js").exists());
    assert!(!read(temp.path().join("dist/CDN-FILES.md")).contains("stale.js"));
}

#[tokio::test]
async fn test_clean_failure_stops_before_build() {
    let temp = component_project();
    // The output path is a regular file.
    write_files(temp.path(), &[("dist", "not a directory")]);

    let err = options(temp.path()).clean(true).run().await.unwrap_err();

    match err {
        Error::Cleanup { path, .. } => assert!(path.ends_with("dist")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(temp.path().join("dist").is_file());
    assert_eq!(read(temp.path().join("dist")), "not a directory");
    assert!(!temp.path().join("dist/CDN-FILES.md").exists());
    assert!(!temp.path().join("dist/index.html").exists());
}

#[tokio::test]
async fn test_without_clean_stale_outputs_are_listed() {
    let temp = component_project();
    write_files(temp.path(), &[("dist/old/stale.js", "1")]);

    options(temp.path()).run().await.unwrap();

    assert!(read(temp.path().join("dist/CDN-FILES.md")).contains("- /dist/old/stale.js"));
}

#[tokio::test]
async fn test_custom_out_dir_is_used_in_urls() {
    let temp = component_project();
    let report = options(temp.path())
        .out_dir("./public/cdn/")
        .run()
        .await
        .unwrap();

    assert_eq!(report.destination.as_str(), "/public/cdn");
    assert!(temp.path().join("public/cdn/index.html").exists());
    assert!(read(temp.path().join("public/cdn/CDN-FILES.md")).contains("- /public/cdn/card.js"));
}

#[tokio::test]
async fn test_empty_source_still_writes_manifest() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("src")).unwrap();

    let report = options(temp.path()).run().await.unwrap();
    assert_eq!(report.manifest_entries, 0);
    assert_eq!(read(&report.manifest_path), "# CDN Files\n\n");
}
