//! HTML rendering.
//!
//! Rendering is pure: registry plus site settings in, markup out. Composition
//! runs top-down, page -> rows -> cards -> links, and never mutates content.
//!
//! - `link`: The single resolver deciding active vs. disabled links
//! - `card`: Card tiles and their category-driven link affordances
//! - `row`: Titled, horizontally scrolling sections of cards
//! - `page`: Navigation, hero, about, rows and footer as one document

pub mod card;
pub mod icons;
pub mod link;
pub mod page;
pub mod row;

pub use card::{card_view, render_card, Affordance, CardView};
pub use link::{resolve, LinkState};
pub use page::{render_page, RenderContext, SiteMeta, Theme};
pub use row::render_row;

/// Stylesheet shipped next to the generated page
pub const STYLESHEET: &str = include_str!("../../assets/site.css");

/// Path the page links the stylesheet from
pub const STYLESHEET_PATH: &str = "style.css";
