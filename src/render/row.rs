//! Row sections: a heading over a horizontally scrolling strip of cards.

use maud::{html, Markup};

use super::card::{card_view, render_card};
use super::icons::icon;
use crate::domain::Row;

/// Render a row. An empty row still renders its heading and an empty strip.
pub fn render_row(row: &Row<'_>) -> Markup {
    html! {
        section.row.container id=(row.id) {
            h2.row-title {
                @if let Some(symbol) = row.heading.icon {
                    (icon(symbol, "icon-lg"))
                }
                span { (row.heading.text) }
            }
            div.row-strip {
                @for record in row.items {
                    (render_card(&card_view(record, row.category)))
                }
            }
        }
    }
}
