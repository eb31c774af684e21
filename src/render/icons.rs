//! Inline SVG icons (24x24 stroke icons).

use maud::{html, Markup, PreEscaped};

use crate::domain::Icon;

fn paths(icon: Icon) -> &'static str {
    match icon {
        Icon::Github => concat!(
            r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>"#,
            r#"<path d="M9 18c-4.51 2-5-2-7-2"/>"#,
        ),
        Icon::Linkedin => concat!(
            r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>"#,
            r#"<rect width="4" height="12" x="2" y="9"/>"#,
            r#"<circle cx="4" cy="4" r="2"/>"#,
        ),
        Icon::Mail => concat!(
            r#"<rect width="20" height="16" x="2" y="4" rx="2"/>"#,
            r#"<path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
        ),
        Icon::Play => r#"<polygon points="6 3 20 12 6 21 6 3"/>"#,
        Icon::Info => concat!(
            r#"<circle cx="12" cy="12" r="10"/>"#,
            r#"<path d="M12 16v-4"/>"#,
            r#"<path d="M12 8h.01"/>"#,
        ),
        Icon::ExternalLink => concat!(
            r#"<path d="M15 3h6v6"/>"#,
            r#"<path d="M10 14 21 3"/>"#,
            r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#,
        ),
        Icon::Newspaper => concat!(
            r#"<path d="M4 22h16a2 2 0 0 0 2-2V4a2 2 0 0 0-2-2H8a2 2 0 0 0-2 2v16a2 2 0 0 1-2 2Zm0 0a2 2 0 0 1-2-2v-9c0-1.1.9-2 2-2h2"/>"#,
            r#"<path d="M18 14h-8"/>"#,
            r#"<path d="M15 18h-5"/>"#,
            r#"<path d="M10 6h8v4h-8V6Z"/>"#,
        ),
        Icon::Rocket => concat!(
            r#"<path d="M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z"/>"#,
            r#"<path d="m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z"/>"#,
            r#"<path d="M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0"/>"#,
            r#"<path d="M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5"/>"#,
        ),
        Icon::User => concat!(
            r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/>"#,
            r#"<circle cx="12" cy="7" r="4"/>"#,
        ),
    }
}

/// Render a decorative icon. `size` is one of the `icon-*` size classes.
pub fn icon(icon: Icon, size: &str) -> Markup {
    html! {
        svg class={ "icon " (size) } xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round"
            stroke-linejoin="round" aria-hidden="true" {
            (PreEscaped(paths(icon)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_is_hidden_from_assistive_tech() {
        let svg = icon(Icon::Mail, "icon-sm").into_string();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"class="icon icon-sm""#));
        assert!(svg.contains(r#"aria-hidden="true""#));
        assert!(svg.contains("<rect"));
    }
}
