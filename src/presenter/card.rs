//! Per-product display fields

use rust_decimal::prelude::*;

use crate::model::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockBadge {
    InStock,
    Out,
}

impl StockBadge {
    pub fn label(self) -> &'static str {
        match self {
            Self::InStock => "In stock",
            Self::Out => "Out",
        }
    }
}

/// Everything a renderer needs to paint one product card
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: String,
    pub title: String,
    pub price: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub stock: StockBadge,
    /// Present only when the product has a rating
    pub rating: Option<String>,
    pub reviews: Option<String>,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: format_price(product.price),
            category: product
                .category
                .as_ref()
                .filter(|c| !c.trim().is_empty())
                .cloned(),
            image_url: product.image_url.clone(),
            stock: if product.in_stock {
                StockBadge::InStock
            } else {
                StockBadge::Out
            },
            rating: product.rating.map(format_rating),
            reviews: product.reviews_count.map(format_reviews),
        }
    }
}

/// US-dollar price with grouping, e.g. `$1,234.50`.
///
/// Values `Decimal` cannot hold fall back to a plain `$<number>`.
pub fn format_price(price: f64) -> String {
    match Decimal::from_f64_retain(price) {
        Some(amount) => format_currency(amount),
        None => format!("${price}"),
    }
}

fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let fixed = format!("{rounded:.2}");
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{cents}")
}

fn format_rating(rating: f64) -> String {
    let clamped = if rating.is_finite() {
        rating.clamp(0.0, 5.0)
    } else {
        0.0
    };
    format!("★ {clamped:.1}")
}

fn format_reviews(count: u32) -> String {
    match count {
        1 => "(1 review)".to_string(),
        n => format!("({n} reviews)"),
    }
}
