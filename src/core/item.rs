// This file defines the item model - every kind of record the store can hold
// I model the five kinds as one closed enum instead of a class hierarchy, so the
// compiler forces every match site to handle a new kind if I ever add one

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// Canonical wire tags - these exact strings mark each record in the store file
pub const TAG_GROCERY: &str = "Grocery";
pub const TAG_ELECTRONICS: &str = "Electronics";
pub const TAG_CLOTHING: &str = "Clothing";
pub const TAG_BOOK: &str = "Book";
pub const TAG_TOY: &str = "Toy";

/// One catalog item. Every variant carries a name and a price plus exactly
/// one variant-specific field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Item {
    Grocery {
        name: String,
        price: f64,
        expiry: String,
    },
    Electronics {
        name: String,
        price: f64,
        warranty_years: i32,
    },
    Clothing {
        name: String,
        price: f64,
        size: String,
    },
    Book {
        name: String,
        price: f64,
        author: String,
    },
    Toy {
        name: String,
        price: f64,
        recommended_age: i32,
    },
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Grocery { name, .. }
            | Item::Electronics { name, .. }
            | Item::Clothing { name, .. }
            | Item::Book { name, .. }
            | Item::Toy { name, .. } => name,
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            Item::Grocery { price, .. }
            | Item::Electronics { price, .. }
            | Item::Clothing { price, .. }
            | Item::Book { price, .. }
            | Item::Toy { price, .. } => *price,
        }
    }

    // The tag is derived from the variant itself - it is never stored as state,
    // so an item can never claim to be a kind it is not
    pub fn type_tag(&self) -> &'static str {
        match self {
            Item::Grocery { .. } => TAG_GROCERY,
            Item::Electronics { .. } => TAG_ELECTRONICS,
            Item::Clothing { .. } => TAG_CLOTHING,
            Item::Book { .. } => TAG_BOOK,
            Item::Toy { .. } => TAG_TOY,
        }
    }

    /// One-line human readable summary, prefixed with the kind name.
    pub fn display_line(&self) -> String {
        match self {
            Item::Grocery {
                name,
                price,
                expiry,
            } => format!("Grocery - {name} (€{price}) Exp: {expiry}"),
            Item::Electronics {
                name,
                price,
                warranty_years,
            } => format!("Electronics - {name} (€{price}) Warranty: {warranty_years}y"),
            Item::Clothing { name, price, size } => {
                format!("Clothing - {name} (€{price}) Size: {size}")
            }
            Item::Book {
                name,
                price,
                author,
            } => format!("Book - {name} (€{price}) Author: {author}"),
            Item::Toy {
                name,
                price,
                recommended_age,
            } => format!("Toy - {name} (€{price}) Recommended Age: {recommended_age}+"),
        }
    }

    /// Total order on price alone. `total_cmp` keeps the ordering
    /// deterministic even for NaN or negative zero prices.
    pub fn cmp_by_price(&self, other: &Item) -> Ordering {
        self.price().total_cmp(&other.price())
    }
}
