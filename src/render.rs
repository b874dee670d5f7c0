//! Plain-text rendering of a [`CatalogView`]

use std::fmt::Write;

use crate::presenter::{CatalogView, ProductCard, ViewBody, NO_RESULTS_MESSAGE};

const SKELETON_ROW: &str = "  ░░░░░░░░░░░░░░░░  ░░░░░░  ░░░░";

pub fn render_view(view: &CatalogView) -> String {
    let mut out = String::new();

    let term = if view.query.term.is_empty() {
        "(none)"
    } else {
        view.query.term.as_str()
    };
    let category = view.query.category_param().unwrap_or("All");
    let _ = writeln!(out, "Search: {term}  |  Category: {category}");

    if !view.categories.is_empty() {
        let _ = writeln!(out, "Categories: All, {}", view.categories.join(", "));
    }
    out.push('\n');

    match &view.body {
        ViewBody::Loading { skeletons } => {
            for _ in 0..*skeletons {
                out.push_str(SKELETON_ROW);
                out.push('\n');
            }
        }
        ViewBody::Error { message } => {
            let _ = writeln!(out, "[!] {message}");
        }
        ViewBody::Empty => {
            let _ = writeln!(out, "{NO_RESULTS_MESSAGE}");
        }
        ViewBody::Grid(cards) => {
            for card in cards {
                render_card(&mut out, card);
            }
        }
    }

    out
}

fn render_card(out: &mut String, card: &ProductCard) {
    let _ = write!(out, "  {}  {}  [{}]", card.title, card.price, card.stock.label());
    if let Some(rating) = &card.rating {
        let _ = write!(out, "  {rating}");
    }
    if let Some(reviews) = &card.reviews {
        let _ = write!(out, " {reviews}");
    }
    if let Some(category) = &card.category {
        let _ = write!(out, "  <{category}>");
    }
    out.push('\n');
}
