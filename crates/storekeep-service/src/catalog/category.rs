//! Category management.

use std::sync::Arc;

use tracing::info;

use storekeep_core::error::AppError;
use storekeep_core::result::AppResult;
use storekeep_database::repositories::CategoryRepository;
use storekeep_entity::category::Category;

/// Handles category listing, creation, and deletion.
#[derive(Debug, Clone)]
pub struct CategoryService {
    category_repo: Arc<CategoryRepository>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(category_repo: Arc<CategoryRepository>) -> Self {
        Self { category_repo }
    }

    /// Lists all categories with their product counts.
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        self.category_repo.find_all().await
    }

    /// Creates a category with a zero product count.
    pub async fn create(&self, name: &str) -> AppResult<Category> {
        if self.category_repo.find_by_name(name).await?.is_some() {
            return Err(AppError::validation("Category already exists"));
        }

        let category = self.category_repo.create(name).await?;

        info!(category_id = category.id, "Category created");

        Ok(category)
    }

    /// Deletes a category; its products go with it via cascade.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.category_repo.delete(id).await? {
            return Err(AppError::not_found("Category not found"));
        }

        info!(category_id = id, "Category deleted");

        Ok(())
    }
}
