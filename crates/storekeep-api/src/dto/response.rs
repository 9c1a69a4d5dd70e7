//! Response DTOs. Field casing follows the established wire format:
//! snake_case for auth payloads, camelCase for catalog payloads.

use chrono::{DateTime, Utc};
use serde::Serialize;

use storekeep_entity::category::Category;
use storekeep_entity::product::Product;
use storekeep_entity::user::User;

/// Public view of a user.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            mobile: user.mobile,
            email: user.email,
            role: user.role.as_str().to_string(),
        }
    }
}

/// Successful login payload.
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

/// Category with its denormalized product count.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    #[serde(rename = "productCount")]
    pub product_count: i64,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            product_count: category.product_count,
        }
    }
}

/// Product with joined category and owner context.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub colors: Vec<String>,
    pub tags: Vec<String>,
    pub category_id: i64,
    pub category_name: String,
    pub user_id: i64,
    pub owner_email: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            colors: product.colors,
            tags: product.tags,
            category_id: product.category_id,
            category_name: product.category_name,
            user_id: product.user_id,
            owner_email: product.owner_email,
        }
    }
}

/// Generic message payload.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health probe payload.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub time: DateTime<Utc>,
}
