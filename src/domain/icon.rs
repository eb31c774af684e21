//! Icon identifiers used by the page.

use serde::{Deserialize, Serialize};

/// Symbol shown next to a label. The SVG for each lives in `render::icons`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Github,
    Linkedin,
    Mail,
    Play,
    Info,
    ExternalLink,
    Newspaper,
    Rocket,
    User,
}
