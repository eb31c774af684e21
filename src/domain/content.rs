//! Content records and the per-category link schema.
//!
//! Papers, projects, demos and experience entries all share one record
//! shape. What differs is which links a card shows, and that is decided by
//! the [`Category`] the record is rendered under.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Kind of external link a record can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Document (e.g. a paper PDF)
    Pdf,

    /// Source code accompanying a paper
    Code,

    /// Persistent identifier (DOI)
    Doi,

    /// Live running instance
    Live,

    /// Source repository
    Repo,
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkKind::Pdf => write!(f, "pdf"),
            LinkKind::Code => write!(f, "code"),
            LinkKind::Doi => write!(f, "doi"),
            LinkKind::Live => write!(f, "live"),
            LinkKind::Repo => write!(f, "repo"),
        }
    }
}

/// Link kind -> URL. Absent kinds render as disabled affordances.
pub type LinkMap = BTreeMap<LinkKind, String>;

/// One link slot of a category schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSlot {
    pub kind: LinkKind,
    pub label: &'static str,
}

const PAPER_SLOTS: &[LinkSlot] = &[
    LinkSlot { kind: LinkKind::Pdf, label: "PDF" },
    LinkSlot { kind: LinkKind::Code, label: "Code" },
    LinkSlot { kind: LinkKind::Doi, label: "DOI" },
];

const PROJECT_SLOTS: &[LinkSlot] = &[
    LinkSlot { kind: LinkKind::Live, label: "Live" },
    LinkSlot { kind: LinkKind::Repo, label: "Repo" },
];

const DEMO_SLOTS: &[LinkSlot] = &[
    LinkSlot { kind: LinkKind::Live, label: "Open" },
    LinkSlot { kind: LinkKind::Repo, label: "Repo" },
];

/// Row category. Selects the fixed link schema of every card in the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Paper,
    Project,
    Demo,
    Experience,
}

impl Category {
    /// All categories in page order
    pub const ALL: [Category; 4] = [
        Category::Paper,
        Category::Project,
        Category::Demo,
        Category::Experience,
    ];

    /// Link slots shown on every card of this category, in display order.
    ///
    /// Experience has no link schema and shows no affordances.
    pub const fn link_schema(self) -> &'static [LinkSlot] {
        match self {
            Category::Paper => PAPER_SLOTS,
            Category::Project => PROJECT_SLOTS,
            Category::Demo => DEMO_SLOTS,
            Category::Experience => &[],
        }
    }

    /// In-page anchor id of the category's row
    pub fn anchor(self) -> &'static str {
        match self {
            Category::Paper => "papers",
            Category::Project => "projects",
            Category::Demo => "demos",
            Category::Experience => "experience",
        }
    }

    /// Label of the navigation link to the row
    pub fn nav_label(self) -> &'static str {
        match self {
            Category::Paper => "Papers",
            Category::Project => "Projects",
            Category::Demo => "Demos",
            Category::Experience => "Experience",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Paper => write!(f, "paper"),
            Category::Project => write!(f, "project"),
            Category::Demo => write!(f, "demo"),
            Category::Experience => write!(f, "experience"),
        }
    }
}

/// A paper, project, demo or experience entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Card title (required)
    pub title: String,

    /// One-line subtitle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blurb: Option<String>,

    /// External links by kind
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub links: LinkMap,
}

impl ContentRecord {
    /// Create a record with only a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the blurb
    pub fn with_blurb(mut self, blurb: impl Into<String>) -> Self {
        self.blurb = Some(blurb.into());
        self
    }

    /// Add a link
    pub fn with_link(mut self, kind: LinkKind, url: impl Into<String>) -> Self {
        self.links.insert(kind, url.into());
        self
    }

    /// Raw link value for a kind (may still be empty or a placeholder)
    pub fn link(&self, kind: LinkKind) -> Option<&str> {
        self.links.get(&kind).map(String::as_str)
    }

    /// Subtitle, if present and non-empty
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref().filter(|s| !s.is_empty())
    }

    /// Blurb, if present and non-empty
    pub fn blurb(&self) -> Option<&str> {
        self.blurb.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(category: Category) -> Vec<LinkKind> {
        category.link_schema().iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_paper_schema_order() {
        assert_eq!(
            kinds(Category::Paper),
            vec![LinkKind::Pdf, LinkKind::Code, LinkKind::Doi]
        );
    }

    #[test]
    fn test_project_and_demo_schema_order() {
        assert_eq!(kinds(Category::Project), vec![LinkKind::Live, LinkKind::Repo]);
        assert_eq!(kinds(Category::Demo), vec![LinkKind::Live, LinkKind::Repo]);

        // Demos label the live instance differently
        assert_eq!(Category::Project.link_schema()[0].label, "Live");
        assert_eq!(Category::Demo.link_schema()[0].label, "Open");
    }

    #[test]
    fn test_experience_has_no_links() {
        assert!(Category::Experience.link_schema().is_empty());
    }

    #[test]
    fn test_record_optional_fields() {
        let record = ContentRecord::new("Untitled")
            .with_subtitle("")
            .with_link(LinkKind::Repo, "https://example.com/repo");

        assert_eq!(record.subtitle(), None);
        assert_eq!(record.blurb(), None);
        assert_eq!(record.link(LinkKind::Repo), Some("https://example.com/repo"));
        assert_eq!(record.link(LinkKind::Live), None);
    }

    #[test]
    fn test_record_yaml_keys() {
        let yaml = r##"
title: Eval Dashboard
subtitle: RAG • Metrics
links:
  live: https://example.com/evals
  repo: "#"
"##;
        let record: ContentRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.title, "Eval Dashboard");
        assert_eq!(record.blurb, None);
        assert_eq!(record.link(LinkKind::Live), Some("https://example.com/evals"));
        assert_eq!(record.link(LinkKind::Repo), Some("#"));
    }
}
