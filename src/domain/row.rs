//! Rows: titled sections of records sharing one category.

use super::content::{Category, ContentRecord};
use super::icon::Icon;

/// In-page anchor of the about section
pub const ABOUT_ANCHOR: &str = "about";

/// Section heading: text with an optional leading icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    pub text: &'static str,
    pub icon: Option<Icon>,
}

impl Heading {
    pub const fn plain(text: &'static str) -> Self {
        Self { text, icon: None }
    }

    pub const fn with_icon(text: &'static str, icon: Icon) -> Self {
        Self {
            text,
            icon: Some(icon),
        }
    }
}

/// A titled, horizontally scrolling section of cards
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    /// Anchor id the section registers under
    pub id: &'static str,
    pub heading: Heading,
    pub category: Category,
    pub items: &'a [ContentRecord],
}

impl<'a> Row<'a> {
    /// Build a row with the standard anchor and heading for a category
    pub fn for_category(category: Category, items: &'a [ContentRecord]) -> Self {
        let heading = match category {
            Category::Paper => Heading::with_icon("My Papers", Icon::Newspaper),
            Category::Project => Heading::with_icon("Projects", Icon::Rocket),
            Category::Demo => Heading::plain("Interactive Demos"),
            Category::Experience => Heading::plain("Experience"),
        };

        Self {
            id: category.anchor(),
            heading,
            category,
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_anchors() {
        let ids: Vec<&str> = Category::ALL
            .iter()
            .map(|c| Row::for_category(*c, &[]).id)
            .collect();
        assert_eq!(ids, vec!["papers", "projects", "demos", "experience"]);
    }

    #[test]
    fn test_headings() {
        let papers = Row::for_category(Category::Paper, &[]);
        assert_eq!(papers.heading.text, "My Papers");
        assert_eq!(papers.heading.icon, Some(Icon::Newspaper));

        let demos = Row::for_category(Category::Demo, &[]);
        assert_eq!(demos.heading, Heading::plain("Interactive Demos"));
        assert!(demos.is_empty());
    }
}
