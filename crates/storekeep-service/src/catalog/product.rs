//! Product management.
//!
//! Counter maintenance lives in the repository transaction; this layer
//! adds the existence, category, and authorization checks in the order
//! the API contract requires (404 before 403).

use std::sync::Arc;

use tracing::info;

use storekeep_core::error::AppError;
use storekeep_core::result::AppResult;
use storekeep_database::repositories::{CategoryRepository, ProductRepository};
use storekeep_entity::product::{CreateProduct, Product, UpdateProduct};

use crate::catalog::policy::{self, ProductAction};
use crate::context::RequestContext;

/// Handles product listing and owner-scoped mutation.
#[derive(Debug, Clone)]
pub struct ProductService {
    product_repo: Arc<ProductRepository>,
    category_repo: Arc<CategoryRepository>,
}

impl ProductService {
    /// Creates a new product service.
    pub fn new(product_repo: Arc<ProductRepository>, category_repo: Arc<CategoryRepository>) -> Self {
        Self {
            product_repo,
            category_repo,
        }
    }

    /// Lists all products with category and owner context.
    pub async fn list(&self) -> AppResult<Vec<Product>> {
        self.product_repo.find_all().await
    }

    /// Creates a product owned by the current user.
    pub async fn create(&self, ctx: &RequestContext, data: CreateProduct) -> AppResult<Product> {
        self.ensure_category_exists(data.category_id).await?;

        let id = self.product_repo.create(&data, ctx.user_id()).await?;

        info!(product_id = id, user_id = ctx.user_id(), "Product created");

        self.read_back(id).await
    }

    /// Replaces a product's fields (owner or admin only).
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        data: UpdateProduct,
    ) -> AppResult<Product> {
        let existing = self
            .product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))?;

        policy::ensure_owner_or_admin(ctx, &existing, ProductAction::Edit)?;
        self.ensure_category_exists(data.category_id).await?;

        self.product_repo
            .update(id, existing.category_id, &data)
            .await?;

        info!(product_id = id, user_id = ctx.user_id(), "Product updated");

        self.read_back(id).await
    }

    /// Deletes a product (owner or admin only).
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        let existing = self
            .product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))?;

        policy::ensure_owner_or_admin(ctx, &existing, ProductAction::Delete)?;

        self.product_repo.delete(id, existing.category_id).await?;

        info!(product_id = id, user_id = ctx.user_id(), "Product deleted");

        Ok(())
    }

    async fn ensure_category_exists(&self, category_id: i64) -> AppResult<()> {
        if self.category_repo.find_by_id(category_id).await?.is_none() {
            return Err(AppError::validation("Category not found"));
        }
        Ok(())
    }

    /// Re-reads a product for its joined representation after a write.
    async fn read_back(&self, id: i64) -> AppResult<Product> {
        self.product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))
    }
}
