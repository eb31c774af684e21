//! folioflix - Static portfolio page generator
//!
//! Renders a single scrollable portfolio page: navigation, a featured hero
//! banner, an about card, and horizontally scrolling rows of cards for
//! papers, projects, demos and experience.
//!
//! # Architecture
//!
//! Rendering is a pure, top-down composition:
//! - The registry holds all content (built in, or loaded from YAML)
//! - Each row hands its records to the card renderer
//! - Each card's category fixes which link buttons it shows
//! - Every link passes through one resolver: usable, or "coming soon"
//!
//! # Modules
//!
//! - `domain`: Content model (records, categories, registry)
//! - `render`: HTML rendering (links, cards, rows, page)
//! - `build`: Writing the site, link report, watch mode
//! - `config`: Layered configuration
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Build into ./dist
//! folioflix build
//!
//! # Use your own content
//! folioflix build --content portfolio.yaml --out public_html
//!
//! # List links that are not live yet
//! folioflix check
//! ```

pub mod build;
pub mod cli;
pub mod config;
pub mod domain;
pub mod render;

// Re-export main types at crate root for convenience
pub use build::{build_site, link_report, BuildReport, DisabledLink};
pub use domain::{Category, ContentError, ContentRecord, LinkKind, Registry, Row};
pub use render::{render_page, resolve, LinkState, RenderContext, SiteMeta, Theme};
