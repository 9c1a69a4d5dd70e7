//! Product repository implementation.
//!
//! Every mutation runs on a single transaction together with the
//! category counter adjustment so `product_count` can never drift from
//! the committed membership.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use storekeep_core::error::{AppError, ErrorKind};
use storekeep_core::result::AppResult;
use storekeep_entity::product::{
    decode_text_list, encode_text_list, CreateProduct, Product, UpdateProduct,
};

use super::counter;

/// Raw joined row; `colors`/`tags` still in their stored text form.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    price: i64,
    colors: String,
    tags: String,
    category_id: i64,
    category_name: String,
    user_id: i64,
    owner_email: String,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            colors: decode_text_list(&row.colors),
            tags: decode_text_list(&row.tags),
            category_id: row.category_id,
            category_name: row.category_name,
            user_id: row.user_id,
            owner_email: row.owner_email,
            created_at: row.created_at,
        }
    }
}

const SELECT_JOINED: &str = "SELECT p.id, p.name, p.price, p.colors, p.tags, p.category_id, \
     c.name AS category_name, p.user_id, u.email AS owner_email, p.created_at \
     FROM products p \
     JOIN categories c ON c.id = p.category_id \
     JOIN users u ON u.id = p.user_id";

/// Repository for product CRUD operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all products with category and owner context.
    pub async fn find_all(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!("{SELECT_JOINED} ORDER BY p.id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list products", e)
            })?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Find a product by primary key with category and owner context.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!("{SELECT_JOINED} WHERE p.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find product", e)
            })?;

        Ok(row.map(Product::from))
    }

    /// Insert a new product and increment its category's count atomically.
    ///
    /// Returns the new product id; callers re-read through
    /// [`Self::find_by_id`] for the joined representation.
    pub async fn create(&self, data: &CreateProduct, owner_id: i64) -> AppResult<i64> {
        let mut tx = self.begin().await?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO products (name, price, colors, tags, category_id, user_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(&data.name)
        .bind(data.price)
        .bind(encode_text_list(&data.colors))
        .bind(encode_text_list(&data.tags))
        .bind(data.category_id)
        .bind(owner_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create product", e))?;

        counter::apply(&mut tx, counter::transition(None, Some(data.category_id))).await?;

        self.commit(tx).await?;
        Ok(id)
    }

    /// Replace a product's fields and reconcile counters when the
    /// category assignment changed, all on one transaction.
    ///
    /// `prior_category_id` is the assignment read before authorization.
    pub async fn update(
        &self,
        id: i64,
        prior_category_id: i64,
        data: &UpdateProduct,
    ) -> AppResult<()> {
        let mut tx = self.begin().await?;

        let result = sqlx::query(
            "UPDATE products SET name = $1, price = $2, colors = $3, tags = $4, category_id = $5 \
             WHERE id = $6",
        )
        .bind(&data.name)
        .bind(data.price)
        .bind(encode_text_list(&data.colors))
        .bind(encode_text_list(&data.tags))
        .bind(data.category_id)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update product", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Product not found"));
        }

        counter::apply(
            &mut tx,
            counter::transition(Some(prior_category_id), Some(data.category_id)),
        )
        .await?;

        self.commit(tx).await?;
        Ok(())
    }

    /// Delete a product and decrement its category's count atomically.
    pub async fn delete(&self, id: i64, category_id: i64) -> AppResult<()> {
        let mut tx = self.begin().await?;

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete product", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Product not found"));
        }

        counter::apply(&mut tx, counter::transition(Some(category_id), None)).await?;

        self.commit(tx).await?;
        Ok(())
    }

    async fn begin(&self) -> AppResult<sqlx::Transaction<'static, sqlx::Postgres>> {
        self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })
    }

    async fn commit(&self, tx: sqlx::Transaction<'static, sqlx::Postgres>) -> AppResult<()> {
        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })
    }
}
