//! Application state shared across all handlers.

use std::sync::Arc;

use storekeep_auth::jwt::JwtDecoder;
use storekeep_core::config::AppConfig;
use storekeep_database::repositories::UserRepository;
use storekeep_service::{AccountService, CategoryService, ProductService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// User repository, used by the auth extractor to resolve claims
    pub user_repo: Arc<UserRepository>,
    /// Account service
    pub account_service: Arc<AccountService>,
    /// Category service
    pub category_service: Arc<CategoryService>,
    /// Product service
    pub product_service: Arc<ProductService>,
}
