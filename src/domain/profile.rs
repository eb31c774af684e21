//! Identity, featured item and about text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::icon::Icon;

/// External profile shown as an icon in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    /// Code hosting profile
    Github,

    /// Professional network profile
    Linkedin,
}

impl ProfileKind {
    /// All profiles in navigation order
    pub const ALL: [ProfileKind; 2] = [ProfileKind::Github, ProfileKind::Linkedin];

    /// Accessible label
    pub fn label(self) -> &'static str {
        match self {
            ProfileKind::Github => "GitHub",
            ProfileKind::Linkedin => "LinkedIn",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            ProfileKind::Github => Icon::Github,
            ProfileKind::Linkedin => Icon::Linkedin,
        }
    }
}

/// Who the portfolio belongs to and how to reach them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMetadata {
    /// Brand shown at the top left of the navigation bar
    pub brand: String,

    /// Display name
    pub name: String,

    /// Title / tagline
    pub title: String,

    /// Contact address for mailto actions
    pub email: String,

    /// External profile URLs
    #[serde(default)]
    pub profiles: BTreeMap<ProfileKind, String>,

    /// Resume document path (site-relative or absolute URL)
    #[serde(default)]
    pub resume: Option<String>,
}

impl ContactMetadata {
    /// Raw profile URL for a kind
    pub fn profile(&self, kind: ProfileKind) -> Option<&str> {
        self.profiles.get(&kind).map(String::as_str)
    }

    /// `mailto:` target for the contact address
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Call-to-action button in the hero banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub icon: Icon,
    /// Page anchor (`#projects`) or external URL
    pub href: String,
}

impl CallToAction {
    pub fn new(label: impl Into<String>, icon: Icon, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon,
            href: href.into(),
        }
    }

    /// Whether the target is an in-page anchor
    pub fn is_anchor(&self) -> bool {
        self.href.len() > 1 && self.href.starts_with('#')
    }
}

/// Hero banner content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedItem {
    pub tag: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub ctas: Vec<CallToAction>,
}

/// About section content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub headline: String,
    pub body: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cta_anchor_detection() {
        assert!(CallToAction::new("View Demo", Icon::Play, "#projects").is_anchor());
        assert!(!CallToAction::new("Docs", Icon::Info, "https://example.com").is_anchor());
        // A bare placeholder is not an anchor
        assert!(!CallToAction::new("Soon", Icon::Info, "#").is_anchor());
    }

    #[test]
    fn test_mailto() {
        let meta = ContactMetadata {
            brand: "Brand".to_string(),
            name: "Name".to_string(),
            title: "Title".to_string(),
            email: "me@example.com".to_string(),
            profiles: BTreeMap::new(),
            resume: None,
        };
        assert_eq!(meta.mailto(), "mailto:me@example.com");
        assert_eq!(meta.profile(ProfileKind::Github), None);
    }
}
