//! Command-line interface for folioflix.
//!
//! Provides commands for building the site, printing the page, checking
//! content for links that are not live yet, watching for changes, and
//! showing the resolved configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::build::{build_site, link_report, prepare_registry, render_document, watch};
use crate::config::{config, ResolvedConfig};
use crate::render::RenderContext;

/// folioflix - Static portfolio page generator
#[derive(Parser, Debug)]
#[command(name = "folioflix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the page and write it to the output directory
    Build {
        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Content YAML file (built-in content if not provided)
        #[arg(short, long)]
        content: Option<PathBuf>,
    },

    /// Print the rendered HTML document to stdout
    Render {
        /// Content YAML file (built-in content if not provided)
        #[arg(short, long)]
        content: Option<PathBuf>,
    },

    /// Validate content and list links that render as "coming soon"
    Check {
        /// Content YAML file (built-in content if not provided)
        #[arg(short, long)]
        content: Option<PathBuf>,
    },

    /// Build, then rebuild whenever content or static assets change
    Watch {
        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Content YAML file (built-in content if not provided)
        #[arg(short, long)]
        content: Option<PathBuf>,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Build { out, content } => build(out, content).await,
            Commands::Render { content } => render(content).await,
            Commands::Check { content } => check(content).await,
            Commands::Watch { out, content } => {
                let resolved = resolved(out.clone(), content.clone())?;
                watch(resolved, out, content).await
            }
            Commands::Config => show_config(),
        }
    }
}

/// Global config with command-line overrides applied
fn resolved(out: Option<PathBuf>, content: Option<PathBuf>) -> Result<ResolvedConfig> {
    Ok(config()?.clone().with_overrides(out, content))
}

async fn build(out: Option<PathBuf>, content: Option<PathBuf>) -> Result<()> {
    let config = resolved(out, content)?;
    let report = build_site(&config, &RenderContext::now()).await?;

    eprintln!("Built {}", report.page.display());
    eprintln!("   Assets copied: {}", report.assets_copied);
    if report.disabled_links > 0 {
        eprintln!(
            "   Links coming soon: {} (run `folioflix check` for details)",
            report.disabled_links
        );
    }

    Ok(())
}

async fn render(content: Option<PathBuf>) -> Result<()> {
    let config = resolved(None, content)?;
    let html = render_document(&config, &RenderContext::now()).await?;
    println!("{}", html);
    Ok(())
}

async fn check(content: Option<PathBuf>) -> Result<()> {
    let config = resolved(None, content)?;
    let registry = prepare_registry(&config).await?;

    let source = config
        .content
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    println!("Content OK ({})", source);

    for row in registry.rows() {
        println!("  {:<12} {} item(s)", row.id, row.items.len());
    }

    let disabled = link_report(&registry);
    if disabled.is_empty() {
        println!("\nAll links are live");
        return Ok(());
    }

    println!("\nComing soon ({}):", disabled.len());
    for link in disabled {
        println!("  {}", link);
    }

    Ok(())
}

fn show_config() -> Result<()> {
    let config = config()?;

    println!("Output:      {}", config.out_dir.display());
    println!("Static:      {}", config.static_dir.display());
    match &config.content {
        Some(path) => println!("Content:     {}", path.display()),
        None => println!("Content:     (built-in)"),
    }
    match &config.config_file {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none)"),
    }
    println!("Title:       {}", config.site.title);
    println!("Language:    {}", config.site.lang);
    println!(
        "Theme:       background {}, foreground {}",
        config.theme.background, config.theme.foreground
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_flags() {
        let cli = Cli::parse_from(["folioflix", "build", "--out", "site", "-c", "me.yaml"]);
        match cli.command {
            Commands::Build { out, content } => {
                assert_eq!(out, Some(PathBuf::from("site")));
                assert_eq!(content, Some(PathBuf::from("me.yaml")));
            }
            other => panic!("Expected build, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_check_defaults() {
        let cli = Cli::parse_from(["folioflix", "check"]);
        assert!(matches!(cli.command, Commands::Check { content: None }));
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(Cli::try_parse_from(["folioflix", "serve"]).is_err());
    }
}
