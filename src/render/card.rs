//! Card tiles.
//!
//! A card is built in two steps: [`card_view`] picks the fields and link
//! affordances for a record under its category, [`render_card`] turns that
//! view into markup. The view is what tests and the link report inspect.

use maud::{html, Markup};

use super::link::{mini_link, resolve, LinkState};
use crate::domain::{Category, ContentRecord, LinkKind};

/// One link button on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordance<'a> {
    pub kind: LinkKind,
    pub label: &'static str,
    pub value: Option<&'a str>,
    pub state: LinkState<'a>,
}

/// Everything a tile displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView<'a> {
    pub category: Category,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub blurb: Option<&'a str>,
    pub affordances: Vec<Affordance<'a>>,
}

impl CardView<'_> {
    /// Number of affordances that resolved to a usable link
    pub fn active_count(&self) -> usize {
        self.affordances.iter().filter(|a| a.state.is_active()).count()
    }
}

/// Select what a record shows under a category.
///
/// Every slot of the category schema is present, active or not, so all cards
/// of a category carry the same buttons. Links of other kinds are ignored.
pub fn card_view(record: &ContentRecord, category: Category) -> CardView<'_> {
    let affordances = category
        .link_schema()
        .iter()
        .map(|slot| {
            let value = record.link(slot.kind);
            Affordance {
                kind: slot.kind,
                label: slot.label,
                value,
                state: resolve(value),
            }
        })
        .collect();

    CardView {
        category,
        title: &record.title,
        subtitle: record.subtitle(),
        blurb: record.blurb(),
        affordances,
    }
}

pub fn render_card(view: &CardView<'_>) -> Markup {
    html! {
        article.card data-category=(view.category.to_string()) {
            div.card-art aria-hidden="true" {}
            div.card-body {
                h3.card-title.clamp-2 { (view.title) }
                @if let Some(subtitle) = view.subtitle {
                    p.card-subtitle.clamp-1 { (subtitle) }
                }
                @if let Some(blurb) = view.blurb {
                    p.card-blurb.clamp-3 { (blurb) }
                }
                @if !view.affordances.is_empty() {
                    div.card-links {
                        @for affordance in &view.affordances {
                            (mini_link(affordance.label, affordance.value))
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(view: &CardView<'_>) -> Vec<&'static str> {
        view.affordances.iter().map(|a| a.label).collect()
    }

    #[test]
    fn test_paper_with_missing_doi() {
        let record = ContentRecord::new("Chunking")
            .with_link(LinkKind::Pdf, "https://example.com/p.pdf")
            .with_link(LinkKind::Code, "https://example.com/code");

        let view = card_view(&record, Category::Paper);

        assert_eq!(labels(&view), vec!["PDF", "Code", "DOI"]);
        assert_eq!(view.active_count(), 2);
        assert_eq!(view.affordances[2].state, LinkState::Disabled);
    }

    #[test]
    fn test_foreign_link_kinds_ignored() {
        let record = ContentRecord::new("Paper")
            .with_link(LinkKind::Live, "https://example.com/live")
            .with_link(LinkKind::Doi, "https://doi.org/x");

        let view = card_view(&record, Category::Paper);
        let kinds: Vec<LinkKind> = view.affordances.iter().map(|a| a.kind).collect();

        assert_eq!(kinds, vec![LinkKind::Pdf, LinkKind::Code, LinkKind::Doi]);
        assert_eq!(view.active_count(), 1);
    }

    #[test]
    fn test_demo_labels() {
        let record = ContentRecord::new("Demo");
        let view = card_view(&record, Category::Demo);
        assert_eq!(labels(&view), vec!["Open", "Repo"]);
        assert_eq!(view.active_count(), 0);
    }

    #[test]
    fn test_experience_card_has_no_links() {
        let record = ContentRecord::new("Intern").with_link(LinkKind::Repo, "https://x.dev");
        let view = card_view(&record, Category::Experience);
        assert!(view.affordances.is_empty());

        let html = render_card(&view).into_string();
        assert!(!html.contains("card-links"));
    }

    #[test]
    fn test_render_optional_fields() {
        let record = ContentRecord::new("Title only").with_blurb("");
        let html = render_card(&card_view(&record, Category::Project)).into_string();

        assert!(html.contains("Title only"));
        assert!(!html.contains("card-subtitle"));
        assert!(!html.contains("card-blurb"));
        assert!(html.contains(r#"data-category="project""#));
    }

    #[test]
    fn test_render_escapes_text() {
        let record = ContentRecord::new("<script>alert(1)</script>");
        let html = render_card(&card_view(&record, Category::Demo)).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
