//! Site generation.
//!
//! This module contains:
//! - Build: Load content, render the page, write the output directory
//! - Output: File writing and static asset copying
//! - Report: Links that currently render as "coming soon"
//! - Watch: Rebuild on content or asset changes

pub mod output;
pub mod report;
pub mod watch;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{info, warn};

use crate::config::ResolvedConfig;
use crate::domain::Registry;
use crate::render::{render_page, RenderContext, STYLESHEET};

pub use output::{copy_dir, OUTPUT_PAGE, OUTPUT_STYLESHEET};
pub use report::{link_report, DisabledLink};
pub use watch::watch;

/// Summary of a finished build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Written page
    pub page: PathBuf,
    /// Static files copied into the output
    pub assets_copied: usize,
    /// Links rendered as "coming soon"
    pub disabled_links: usize,
}

/// Load the registry for a config and settle site-relative assets
pub async fn prepare_registry(config: &ResolvedConfig) -> Result<Registry> {
    let mut registry = Registry::load_or_builtin(config.content.as_deref()).await?;
    settle_resume(&mut registry, &config.static_dir);
    Ok(registry)
}

/// A site-relative resume that is not among the static assets renders
/// disabled instead of linking to a missing file.
fn settle_resume(registry: &mut Registry, static_dir: &Path) {
    let Some(resume) = registry.meta.resume.as_deref() else {
        return;
    };

    let Some(relative) = site_relative(resume) else {
        return;
    };

    if !static_dir.join(relative).is_file() {
        warn!(
            "Resume {} not found in {}, rendering it as coming soon",
            resume,
            static_dir.display()
        );
        registry.meta.resume = None;
    }
}

/// File path behind a site-relative href: `/my%20cv.pdf?v=2` -> `my cv.pdf`.
/// Absolute and protocol-relative URLs -> None
fn site_relative(href: &str) -> Option<String> {
    if href.starts_with("//") {
        return None;
    }

    let path = href.split(['?', '#']).next().unwrap_or(href);
    let rest = path.strip_prefix('/').filter(|rest| !rest.is_empty())?;

    match urlencoding::decode(rest) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(_) => Some(rest.to_string()),
    }
}

/// Render the full document for a config
pub async fn render_document(config: &ResolvedConfig, ctx: &RenderContext) -> Result<String> {
    let registry = prepare_registry(config).await?;
    Ok(render_page(&registry, &config.site, &config.theme, ctx).into_string())
}

/// Build the site into `config.out_dir`
pub async fn build_site(config: &ResolvedConfig, ctx: &RenderContext) -> Result<BuildReport> {
    let registry = prepare_registry(config).await?;
    let html = render_page(&registry, &config.site, &config.theme, ctx).into_string();

    let page = output::write_site(&config.out_dir, &html, STYLESHEET).await?;

    let assets_copied = if config.static_dir.is_dir() {
        copy_dir(&config.static_dir, &config.out_dir).await?
    } else {
        0
    };

    let disabled_links = link_report(&registry).len();

    info!(
        "Built {} ({} assets, {} links coming soon)",
        page.display(),
        assets_copied,
        disabled_links
    );

    Ok(BuildReport {
        page,
        assets_copied,
        disabled_links,
    })
}
