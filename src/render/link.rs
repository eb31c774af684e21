//! Link resolution and the two link renderings.
//!
//! Every external link on the page (card links, profile icons, the resume)
//! goes through [`resolve`]. A missing link is an authoring fact, so there is
//! no error state: a value is either usable or shown as "coming soon".

use maud::{html, Markup};

use super::icons::icon;
use crate::domain::Icon;

/// Placeholder authors use for a link that does not exist yet
pub const PLACEHOLDER: &str = "#";

/// Render state of an optional link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState<'a> {
    /// Usable link; `href` is the authored value unchanged
    Active { href: &'a str },

    /// Missing, empty or placeholder link
    Disabled,
}

impl<'a> LinkState<'a> {
    pub fn is_active(&self) -> bool {
        matches!(self, LinkState::Active { .. })
    }

    pub fn href(&self) -> Option<&'a str> {
        match *self {
            LinkState::Active { href } => Some(href),
            LinkState::Disabled => None,
        }
    }
}

/// Decide whether an optional link value is usable
pub fn resolve(value: Option<&str>) -> LinkState<'_> {
    match value {
        Some(href) if !href.is_empty() && href != PLACEHOLDER => LinkState::Active { href },
        _ => LinkState::Disabled,
    }
}

fn coming_soon(label: &str) -> String {
    format!("{} (coming soon)", label)
}

/// Small labelled link button used on cards and in the footer
pub fn mini_link(label: &str, value: Option<&str>) -> Markup {
    match resolve(value) {
        LinkState::Active { href } => html! {
            a.mini-link href=(href) target="_blank" rel="noreferrer noopener" {
                (icon(Icon::ExternalLink, "icon-xs"))
                " " (label)
            }
        },
        LinkState::Disabled => html! {
            span.mini-link.is-disabled aria-disabled="true" aria-label=(coming_soon(label)) {
                (label)
            }
        },
    }
}

/// Icon-only link used for external profiles
pub fn icon_link(label: &str, symbol: Icon, value: Option<&str>) -> Markup {
    match resolve(value) {
        LinkState::Active { href } => html! {
            a.icon-link href=(href) target="_blank" rel="noreferrer noopener" aria-label=(label) {
                (icon(symbol, "icon-md"))
            }
        },
        LinkState::Disabled => html! {
            span.icon-link.is-disabled aria-disabled="true" aria-label=(coming_soon(label)) {
                (icon(symbol, "icon-md"))
            }
        },
    }
}

/// Plain text link (footer resume)
pub fn text_link(label: &str, value: Option<&str>) -> Markup {
    match resolve(value) {
        LinkState::Active { href } => html! {
            a.footer-link href=(href) target="_blank" rel="noreferrer noopener" { (label) }
        },
        LinkState::Disabled => html! {
            span.footer-link.is-disabled aria-disabled="true" aria-label=(coming_soon(label)) {
                (label)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_disabled_values() {
        assert_eq!(resolve(None), LinkState::Disabled);
        assert_eq!(resolve(Some("")), LinkState::Disabled);
        assert_eq!(resolve(Some("#")), LinkState::Disabled);
    }

    #[test]
    fn test_resolve_active_keeps_exact_value() {
        for value in ["https://example.com/a.pdf", "/resume.pdf", "#about", " ", "##"] {
            assert_eq!(resolve(Some(value)), LinkState::Active { href: value });
        }
    }

    #[test]
    fn test_active_mini_link_opens_new_context() {
        let html = mini_link("PDF", Some("https://example.com/p.pdf")).into_string();
        assert!(html.starts_with("<a "));
        assert!(html.contains(r#"href="https://example.com/p.pdf""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains("noreferrer"));
        assert!(html.contains("<svg"));
        assert!(html.contains("PDF"));
    }

    #[test]
    fn test_disabled_mini_link() {
        let html = mini_link("DOI", Some("#")).into_string();
        assert!(html.starts_with("<span"));
        assert!(!html.contains("href"));
        assert!(html.contains(r#"aria-disabled="true""#));
        assert!(html.contains(r#"aria-label="DOI (coming soon)""#));
    }

    #[test]
    fn test_icon_link_states() {
        let active = icon_link("GitHub", Icon::Github, Some("https://github.com/x")).into_string();
        assert!(active.contains(r#"aria-label="GitHub""#));
        assert!(active.contains(r#"rel="noreferrer noopener""#));

        let disabled = icon_link("LinkedIn", Icon::Linkedin, None).into_string();
        assert!(disabled.contains(r#"aria-label="LinkedIn (coming soon)""#));
        assert!(!disabled.contains("<a "));
    }

    #[test]
    fn test_href_is_escaped() {
        let html = text_link("Resume", Some(r#"/cv.pdf?a=1&b="2""#)).into_string();
        assert!(html.contains("&amp;"));
        assert!(html.contains("&quot;"));
    }
}
