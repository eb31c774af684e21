//! Full page composition.
//!
//! Order is fixed: navigation, hero, about, the four rows, footer.

use chrono::{Datelike, Local};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde::{Deserialize, Serialize};

use super::icons::icon;
use super::link::{icon_link, resolve, text_link, LinkState};
use super::row::render_row;
use super::STYLESHEET_PATH;
use crate::domain::{
    AboutContent, CallToAction, Category, ContactMetadata, FeaturedItem, Icon, ProfileKind,
    Registry, ABOUT_ANCHOR,
};

/// Document-level metadata (`<head>`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
    pub lang: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Anurajflix — Anuraj Manish Sule".to_string(),
            description: "Netflix-style AI/NLP portfolio".to_string(),
            lang: "en".to_string(),
        }
    }
}

/// The two semantic theme colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: String,
    pub foreground: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "hsl(0 0% 0%)".to_string(),
            foreground: "hsl(0 0% 98%)".to_string(),
        }
    }
}

impl Theme {
    /// CSS custom properties consumed by the stylesheet
    pub fn css_variables(&self) -> String {
        format!(
            ":root{{--background:{};--foreground:{};}}",
            self.background, self.foreground
        )
    }

    /// Reject values that could end the declaration or the `<style>` element
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("background", &self.background),
            ("foreground", &self.foreground),
        ] {
            if value.trim().is_empty() {
                anyhow::bail!("Theme {} is empty", name);
            }
            if let Some(c) = value
                .chars()
                .find(|&c| matches!(c, '{' | '}' | ';' | '<' | '>' | '\\'))
            {
                anyhow::bail!("Theme {} contains '{}': {}", name, c, value);
            }
        }
        Ok(())
    }
}

/// Theme variables for the inline `<style>`; `<style>` is raw text, so the
/// validated values are emitted unescaped
fn theme_style(theme: &Theme) -> Markup {
    match theme.validate() {
        Ok(()) => PreEscaped(theme.css_variables()),
        Err(e) => {
            tracing::warn!("{:#}, using the default theme", e);
            PreEscaped(Theme::default().css_variables())
        }
    }
}

/// Values fixed for the duration of one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Calendar year shown in the footer
    pub year: i32,
}

impl RenderContext {
    /// Context for a render happening now (local calendar year)
    pub fn now() -> Self {
        Self {
            year: Local::now().year(),
        }
    }

    pub fn for_year(year: i32) -> Self {
        Self { year }
    }
}

/// Render the complete HTML document
pub fn render_page(
    registry: &Registry,
    site: &SiteMeta,
    theme: &Theme,
    ctx: &RenderContext,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(site.lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (site.title) }
                meta name="description" content=(site.description);
                link rel="stylesheet" href=(STYLESHEET_PATH);
                style { (theme_style(theme)) }
            }
            body {
                div.page {
                    (render_nav(&registry.meta))
                    (render_hero(&registry.featured))
                    (render_about(&registry.about))
                    div.rows {
                        @for row in registry.rows() {
                            (render_row(&row))
                        }
                    }
                    (render_footer(&registry.meta, ctx))
                }
            }
        }
    }
}

/// Sticky navigation bar
pub fn render_nav(meta: &ContactMetadata) -> Markup {
    html! {
        header.nav {
            div.container.nav-inner {
                a.brand href="#" { (meta.brand) }
                nav.nav-anchors {
                    @for category in Category::ALL {
                        a href={ "#" (category.anchor()) } { (category.nav_label()) }
                    }
                }
                div.nav-actions {
                    @for kind in ProfileKind::ALL {
                        (icon_link(kind.label(), kind.icon(), meta.profile(kind)))
                    }
                    a.btn.btn-primary.btn-sm href=(meta.mailto()) { "Contact" }
                }
            }
        }
    }
}

/// Hero banner with the featured item
pub fn render_hero(featured: &FeaturedItem) -> Markup {
    html! {
        section.hero {
            div.container.hero-inner {
                span.hero-tag { (featured.tag) }
                h1.hero-title { (featured.title) }
                p.hero-description { (featured.description) }
                div.hero-actions {
                    @for (index, cta) in featured.ctas.iter().enumerate() {
                        (render_cta(cta, index == 0))
                    }
                }
            }
        }
    }
}

fn render_cta(cta: &CallToAction, primary: bool) -> Markup {
    let variant = if primary { "btn-primary" } else { "btn-secondary" };
    let content = html! {
        (icon(cta.icon, "icon-sm"))
        " " (cta.label)
    };

    if cta.is_anchor() {
        return html! {
            a class={ "btn " (variant) } href=(cta.href) { (content) }
        };
    }

    match resolve(Some(cta.href.as_str())) {
        LinkState::Active { href } => html! {
            a class={ "btn " (variant) } href=(href) target="_blank" rel="noreferrer noopener" {
                (content)
            }
        },
        LinkState::Disabled => html! {
            span class={ "btn " (variant) " is-disabled" } aria-disabled="true"
                aria-label={ (cta.label) " (coming soon)" } {
                (content)
            }
        },
    }
}

/// About card
pub fn render_about(about: &AboutContent) -> Markup {
    html! {
        section.about.container id=(ABOUT_ANCHOR) {
            div.about-card {
                div.about-heading {
                    (icon(Icon::User, "icon-lg"))
                    h2 { (about.headline) }
                }
                p.about-body { (about.body) }
                @if !about.highlights.is_empty() {
                    ul.about-highlights {
                        @for highlight in &about.highlights {
                            li { (highlight) }
                        }
                    }
                }
            }
        }
    }
}

/// Footer with copyright year, email and resume
pub fn render_footer(meta: &ContactMetadata, ctx: &RenderContext) -> Markup {
    html! {
        footer.footer {
            div.container.footer-inner {
                p.copyright { "© " (ctx.year) " " (meta.name) " · " (meta.title) }
                div.footer-links {
                    a.footer-link href=(meta.mailto()) {
                        (icon(Icon::Mail, "icon-sm"))
                        " Email"
                    }
                    (text_link("Resume", meta.resume.as_deref()))
                }
            }
        }
    }
}
