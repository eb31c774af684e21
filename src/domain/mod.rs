//! Domain types for the portfolio.
//!
//! This module contains the content model:
//! - Content: Records, link kinds and the category link schema
//! - Profile: Contact metadata, featured item and about text
//! - Registry: The full set of page content plus validation
//! - Row: A titled section of records sharing one category

pub mod content;
pub mod icon;
pub mod profile;
pub mod registry;
pub mod row;

// Re-export commonly used types
pub use content::{Category, ContentRecord, LinkKind, LinkMap, LinkSlot};
pub use icon::Icon;
pub use profile::{AboutContent, CallToAction, ContactMetadata, FeaturedItem, ProfileKind};
pub use registry::{ContentError, Registry};
pub use row::{Heading, Row, ABOUT_ANCHOR};
