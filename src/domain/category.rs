//! Spending categories and their display fallbacks.
//!
//! Transactions reference categories by name only. Deleting a category never
//! cascades into the ledger; entries that still name it render with
//! [`FALLBACK_COLOR`] and the generic icon.

use serde::{Deserialize, Serialize};

/// Color used for transactions whose category no longer exists.
pub const FALLBACK_COLOR: &str = "#636e72";

/// A user-defined spending category. Names are unique (case-insensitive).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub color: String,
}

/// The five categories seeded when no persisted set exists.
pub fn default_categories() -> Vec<Category> {
    [
        (1, "Alimento", "#e17055"),
        (2, "Transporte", "#0984e3"),
        (3, "Lazer", "#fdcb6e"),
        (4, "Carro", "#6c5ce7"),
        (5, "Outros", "#636e72"),
    ]
    .into_iter()
    .map(|(id, name, color)| Category {
        id,
        name: name.to_string(),
        color: color.to_string(),
    })
    .collect()
}

/// Icon name shown next to a category, for the rendering layer.
pub fn category_icon(name: &str) -> &'static str {
    match name {
        "Alimento" => "utensils",
        "Transporte" => "car",
        "Lazer" => "palmtree",
        "Carro" => "gauge",
        "Outros" => "package",
        _ => "circle",
    }
}
