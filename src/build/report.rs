//! Report of links that render as "coming soon".

use crate::domain::{ProfileKind, Registry};
use crate::render::{card_view, resolve};

/// A link slot that resolves disabled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisabledLink {
    /// Where it shows up: `nav`, `footer` or a row anchor
    pub section: String,
    /// Owning item (card title) or the page itself
    pub item: String,
    pub label: &'static str,
}

impl std::fmt::Display for DisabledLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.section, self.item, self.label)
    }
}

/// Every disabled link on the page, in page order
pub fn link_report(registry: &Registry) -> Vec<DisabledLink> {
    let meta = &registry.meta;
    let mut disabled = Vec::new();

    for kind in ProfileKind::ALL {
        if !resolve(meta.profile(kind)).is_active() {
            disabled.push(DisabledLink {
                section: "nav".to_string(),
                item: meta.brand.clone(),
                label: kind.label(),
            });
        }
    }

    for row in registry.rows() {
        for record in row.items {
            let view = card_view(record, row.category);
            for affordance in view.affordances.iter().filter(|a| !a.state.is_active()) {
                disabled.push(DisabledLink {
                    section: row.id.to_string(),
                    item: record.title.clone(),
                    label: affordance.label,
                });
            }
        }
    }

    if !resolve(meta.resume.as_deref()).is_active() {
        disabled.push(DisabledLink {
            section: "footer".to_string(),
            item: meta.name.clone(),
            label: "Resume",
        });
    }

    disabled
}
