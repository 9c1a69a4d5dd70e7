//! Category entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product category.
///
/// `product_count` is a denormalized mirror of the number of products
/// referencing this category; it is adjusted on the same transaction as
/// every product create/move/delete.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: i64,
    /// Unique category name.
    pub name: String,
    /// Denormalized live product count (never negative).
    pub product_count: i64,
}
