//! Site Build Integration Tests
//!
//! Tests for writing the site from a content file and static assets.

use std::path::Path;

use folioflix::build::{build_site, prepare_registry};
use folioflix::config::ResolvedConfig;
use folioflix::render::{RenderContext, SiteMeta, Theme};
use tempfile::TempDir;

const CONTENT: &str = r##"
meta:
  brand: Devflix
  name: Dev Example
  title: Engineer
  email: dev@example.com
  profiles:
    github: https://github.com/dev
    linkedin: "#"
  resume: /cv.pdf
featured:
  tag: FEATURED
  title: Search Engine
  description: Fast retrieval.
  ctas:
    - label: View Demo
      icon: play
      href: "#projects"
about:
  headline: About Dev
  body: Builds things.
  highlights:
    - One paper
papers:
  - title: A Paper
    links:
      pdf: https://example.com/a.pdf
projects:
  - title: A Project
    subtitle: CLI
"##;

fn config_for(root: &Path, content: Option<&Path>) -> ResolvedConfig {
    ResolvedConfig {
        out_dir: root.join("dist"),
        static_dir: root.join("public"),
        content: content.map(Path::to_path_buf),
        config_file: None,
        site: SiteMeta::default(),
        theme: Theme::default(),
    }
}

#[tokio::test]
async fn test_build_builtin_without_assets() {
    let temp = TempDir::new().unwrap();
    let config = config_for(temp.path(), None);

    let report = build_site(&config, &RenderContext::for_year(2025))
        .await
        .unwrap();

    assert_eq!(report.page, temp.path().join("dist").join("index.html"));
    assert_eq!(report.assets_copied, 0);
    // No public/resume.pdf, so the resume degrades
    assert_eq!(report.disabled_links, 1);

    let html = tokio::fs::read_to_string(&report.page).await.unwrap();
    assert!(html.contains("Resume (coming soon)"));
    assert!(temp.path().join("dist").join("style.css").is_file());
}

#[tokio::test]
async fn test_build_from_content_file() {
    let temp = TempDir::new().unwrap();
    let content = temp.path().join("portfolio.yaml");
    tokio::fs::write(&content, CONTENT).await.unwrap();
    tokio::fs::create_dir_all(temp.path().join("public")).await.unwrap();
    tokio::fs::write(temp.path().join("public").join("cv.pdf"), b"%PDF")
        .await
        .unwrap();

    let config = config_for(temp.path(), Some(&content));
    let report = build_site(&config, &RenderContext::for_year(2025))
        .await
        .unwrap();

    assert_eq!(report.assets_copied, 1);
    assert!(temp.path().join("dist").join("cv.pdf").is_file());

    // LinkedIn placeholder, paper code + doi, project live + repo
    assert_eq!(report.disabled_links, 5);

    let html = tokio::fs::read_to_string(&report.page).await.unwrap();
    assert!(html.contains("Devflix"));
    assert!(html.contains(r#"href="/cv.pdf""#));
    assert!(html.contains("LinkedIn (coming soon)"));
}

#[tokio::test]
async fn test_invalid_content_fails() {
    let temp = TempDir::new().unwrap();
    let content = temp.path().join("portfolio.yaml");
    let broken = CONTENT.replace("title: A Project", "title: \"\"");
    tokio::fs::write(&content, broken).await.unwrap();

    let config = config_for(temp.path(), Some(&content));
    let err = prepare_registry(&config).await.unwrap_err();

    assert!(format!("{:#}", err).contains("project #0 has an empty title"));
    assert!(!temp.path().join("dist").exists());
}

#[tokio::test]
async fn test_build_into_static_dir_preserves_assets() {
    let temp = TempDir::new().unwrap();
    let public = temp.path().join("public");
    tokio::fs::create_dir_all(&public).await.unwrap();
    tokio::fs::write(public.join("resume.pdf"), b"%PDF-1.7 real content")
        .await
        .unwrap();

    let mut config = config_for(temp.path(), None);
    config.out_dir = public.clone();

    let report = build_site(&config, &RenderContext::for_year(2025))
        .await
        .unwrap();

    assert_eq!(report.assets_copied, 0);
    assert_eq!(report.disabled_links, 0);
    assert_eq!(
        tokio::fs::read(public.join("resume.pdf")).await.unwrap(),
        b"%PDF-1.7 real content"
    );

    let html = tokio::fs::read_to_string(&report.page).await.unwrap();
    assert!(html.contains(r#"href="/resume.pdf""#));
}
