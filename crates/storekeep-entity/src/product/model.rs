//! Product entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product, read together with its category and owner context.
///
/// `colors` and `tags` are persisted as JSON-serialized text columns and
/// materialized as vectors on read; see [`super::text_list`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: i64,
    /// Product name.
    pub name: String,
    /// Integer price.
    pub price: i64,
    /// Color variants.
    pub colors: Vec<String>,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Owning category.
    pub category_id: i64,
    /// Owning category's name (joined on read).
    pub category_name: String,
    /// Creating user.
    pub user_id: i64,
    /// Creating user's email (joined on read).
    pub owner_email: String,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProduct {
    /// Product name.
    pub name: String,
    /// Integer price.
    pub price: i64,
    /// Color variants.
    pub colors: Vec<String>,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Target category.
    pub category_id: i64,
}

/// Full-replacement update payload for an existing product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProduct {
    /// New product name.
    pub name: String,
    /// New integer price.
    pub price: i64,
    /// New color variants.
    pub colors: Vec<String>,
    /// New tags.
    pub tags: Vec<String>,
    /// New owning category (a change adjusts both counters).
    pub category_id: i64,
}
