//! The content registry: everything the page shows.
//!
//! The built-in registry is compiled in. A YAML file with the same shape can
//! replace it; such files are validated on load since a record without a
//! title is an authoring mistake, not something to render around.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;

use super::content::{Category, ContentRecord, LinkKind};
use super::icon::Icon;
use super::profile::{AboutContent, CallToAction, ContactMetadata, FeaturedItem, ProfileKind};
use super::row::Row;

/// Content authoring defects found while loading a registry
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("Contact metadata field '{0}' is empty")]
    EmptyMetaField(&'static str),

    #[error("Featured item has an empty title")]
    EmptyFeaturedTitle,

    #[error("Featured call-to-action #{index} has an empty label")]
    EmptyCtaLabel { index: usize },

    #[error("{category} #{index} has an empty title")]
    EmptyTitle { category: Category, index: usize },
}

/// All page content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    pub meta: ContactMetadata,
    pub featured: FeaturedItem,
    pub about: AboutContent,
    #[serde(default)]
    pub papers: Vec<ContentRecord>,
    #[serde(default)]
    pub projects: Vec<ContentRecord>,
    #[serde(default)]
    pub demos: Vec<ContentRecord>,
    #[serde(default)]
    pub experience: Vec<ContentRecord>,
}

impl Registry {
    /// Records for a category
    pub fn records(&self, category: Category) -> &[ContentRecord] {
        match category {
            Category::Paper => &self.papers,
            Category::Project => &self.projects,
            Category::Demo => &self.demos,
            Category::Experience => &self.experience,
        }
    }

    /// The four rows in page order
    pub fn rows(&self) -> [Row<'_>; 4] {
        Category::ALL.map(|category| Row::for_category(category, self.records(category)))
    }

    /// Check for authoring defects
    pub fn validate(&self) -> Result<(), ContentError> {
        let meta_fields = [
            ("brand", &self.meta.brand),
            ("name", &self.meta.name),
            ("email", &self.meta.email),
        ];
        for (field, value) in meta_fields {
            if value.trim().is_empty() {
                return Err(ContentError::EmptyMetaField(field));
            }
        }

        if self.featured.title.trim().is_empty() {
            return Err(ContentError::EmptyFeaturedTitle);
        }

        for (index, cta) in self.featured.ctas.iter().enumerate() {
            if cta.label.trim().is_empty() {
                return Err(ContentError::EmptyCtaLabel { index });
            }
        }

        for category in Category::ALL {
            for (index, record) in self.records(category).iter().enumerate() {
                if record.title.trim().is_empty() {
                    return Err(ContentError::EmptyTitle { category, index });
                }
            }
        }

        Ok(())
    }

    /// Parse and validate a registry from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        let registry: Registry =
            serde_yaml::from_str(content).context("Failed to parse content YAML")?;
        registry.validate()?;
        Ok(registry)
    }

    /// Load a registry from a YAML file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read content file: {}", path.display()))?;

        Self::from_yaml(&content)
            .with_context(|| format!("Invalid content file: {}", path.display()))
    }

    /// Load from a file when given, otherwise use the built-in content
    pub async fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path).await,
            None => Ok(Self::builtin()),
        }
    }

    /// The compiled-in portfolio content
    pub fn builtin() -> Self {
        let meta = ContactMetadata {
            brand: "Anurajflix".to_string(),
            name: "Anuraj Manish Sule".to_string(),
            title: "AI Engineer • NLP Researcher".to_string(),
            email: "suleanuraj@gmail.com".to_string(),
            profiles: BTreeMap::from([
                (ProfileKind::Github, "https://github.com/anuraj26".to_string()),
                (
                    ProfileKind::Linkedin,
                    "https://www.linkedin.com/in/anuraj-sule-ba34b5248/".to_string(),
                ),
            ]),
            resume: Some("/resume.pdf".to_string()),
        };

        let featured = FeaturedItem {
            tag: "FEATURED".to_string(),
            title: "Student Advising Automated System Using RAG: 3K+ PDFs, ChromaDB, LLaMA 3"
                .to_string(),
            description: "Production-grade Retrieval-Augmented Generation with metadata filters, \
                          vector add/delete, and RAGAS evaluation."
                .to_string(),
            ctas: vec![
                CallToAction::new("View Demo", Icon::Play, "#projects"),
                CallToAction::new("More Info", Icon::Info, "#about"),
            ],
        };

        let about = AboutContent {
            headline: "About Anuraj".to_string(),
            body: "AI/NLP engineer focused on retrieval, evaluation, and production systems. \
                   I build pragmatic pipelines that move from notebooks to CI/CD, with \
                   traceable metrics and observability."
                .to_string(),
            highlights: vec![
                "2 peer‑reviewed papers in NLP (2024–2025)".to_string(),
                "RAG system on 2K+ PDFs with metadata filters".to_string(),
                "Experience with PyTorch, Transformers, ChromaDB, Docker, FastAPI".to_string(),
            ],
        };

        let papers = vec![
            ContentRecord::new("Context-Aware Chunking for Domain RAG (2024)")
                .with_subtitle("Journal of Applied NLP • Short Paper")
                .with_blurb(
                    "Chunking strategy that improves retrieval precision on academic advising corpora.",
                )
                .with_link(LinkKind::Pdf, "https://example.com/paper1.pdf")
                .with_link(LinkKind::Code, "https://github.com/harsh-demo/paper1")
                .with_link(LinkKind::Doi, "https://doi.org/10.0001/demo.2024.12345"),
            ContentRecord::new("Lightweight Hallucination Evals with RAGAS (2025)")
                .with_subtitle("NLP Systems Conference • Proceedings")
                .with_blurb("Fast eval pipeline for faithfulness/answer relevancy in RAG systems.")
                .with_link(LinkKind::Pdf, "https://example.com/paper2.pdf")
                .with_link(LinkKind::Code, "https://github.com/harsh-demo/paper2")
                .with_link(LinkKind::Doi, "https://doi.org/10.0001/demo.2025.67890"),
        ];

        let projects = vec![
            ContentRecord::new("RAG System (Ollama + ChromaDB)")
                .with_subtitle("Full‑stack • Prod‑ready")
                .with_blurb(
                    "Chunking, embeddings, evals, and API. Supports cosine/dot‑product search \
                     and metadata filters.",
                )
                .with_link(LinkKind::Live, "https://demo.harshkoli.dev/rag")
                .with_link(LinkKind::Repo, "https://github.com/harsh-demo/rag-system"),
            ContentRecord::new("Portfolio Optimisation")
                .with_subtitle("Finance • CAPM + QP")
                .with_blurb(
                    "Efficient frontier with linear regression for returns and quadratic \
                     programming for weights.",
                )
                .with_link(LinkKind::Live, "https://demo.harshkoli.dev/finance")
                .with_link(LinkKind::Repo, "https://github.com/harsh-demo/portfolio-qp"),
            ContentRecord::new("NLP Utilities")
                .with_subtitle("Tooling • Reusable")
                .with_blurb("Text cleaning, chunking, prompts, and retrieval helpers.")
                .with_link(LinkKind::Live, "https://demo.harshkoli.dev/nlp-utils")
                .with_link(LinkKind::Repo, "https://github.com/harsh-demo/nlp-utils"),
        ];

        let demos = vec![
            ContentRecord::new("Prompt Playground")
                .with_subtitle("UI • Next.js")
                .with_blurb("Try prompts & compare outputs.")
                .with_link(LinkKind::Live, "https://demo.harshkoli.dev/playground")
                .with_link(LinkKind::Repo, "https://github.com/harsh-demo/prompt-playground"),
            ContentRecord::new("Eval Dashboard")
                .with_subtitle("RAG • Metrics")
                .with_blurb("Visualise accuracy & faithfulness.")
                .with_link(LinkKind::Live, "https://demo.harshkoli.dev/evals")
                .with_link(LinkKind::Repo, "https://github.com/harsh-demo/rag-evals"),
        ];

        Self {
            meta,
            featured,
            about,
            papers,
            projects,
            demos,
            experience: Vec::new(),
        }
    }
}
