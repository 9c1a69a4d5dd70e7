//! Category product-count maintenance.
//!
//! A single transition function covers all three ways a product can
//! change category membership: create (`None -> Some`), move
//! (`Some -> Some`), and delete (`Some -> None`). The caller applies the
//! resulting deltas on the same transaction as the product write so the
//! counter and the membership commit atomically.

use sqlx::{Postgres, Transaction};

use storekeep_core::error::{AppError, ErrorKind};
use storekeep_core::result::AppResult;

/// Counter adjustments produced by a category membership transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterTransition {
    /// Category whose count decreases by one.
    pub decrement: Option<i64>,
    /// Category whose count increases by one.
    pub increment: Option<i64>,
}

impl CounterTransition {
    /// No counter change.
    pub const NONE: Self = Self {
        decrement: None,
        increment: None,
    };
}

/// Compute the counter deltas for a membership change from `old` to `new`.
///
/// An unchanged assignment produces no deltas.
pub fn transition(old: Option<i64>, new: Option<i64>) -> CounterTransition {
    if old == new {
        return CounterTransition::NONE;
    }
    CounterTransition {
        decrement: old,
        increment: new,
    }
}

/// Apply a transition's deltas within the caller's transaction.
///
/// The decrement clamps at zero. Correct sequencing should never hit the
/// clamp, but it is part of the counter's contract and is preserved as-is
/// rather than turned into an error.
pub async fn apply(
    tx: &mut Transaction<'_, Postgres>,
    transition: CounterTransition,
) -> AppResult<()> {
    if let Some(category_id) = transition.decrement {
        sqlx::query(
            "UPDATE categories SET product_count = GREATEST(product_count - 1, 0) WHERE id = $1",
        )
        .bind(category_id)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to decrement product count", e)
        })?;
    }

    if let Some(category_id) = transition.increment {
        sqlx::query("UPDATE categories SET product_count = product_count + 1 WHERE id = $1")
            .bind(category_id)
            .execute(&mut **tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to increment product count", e)
            })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_increments_target() {
        let t = transition(None, Some(5));
        assert_eq!(t.decrement, None);
        assert_eq!(t.increment, Some(5));
    }

    #[test]
    fn test_delete_decrements_source() {
        let t = transition(Some(4), None);
        assert_eq!(t.decrement, Some(4));
        assert_eq!(t.increment, None);
    }

    #[test]
    fn test_move_adjusts_both() {
        let t = transition(Some(1), Some(2));
        assert_eq!(t.decrement, Some(1));
        assert_eq!(t.increment, Some(2));
    }

    #[test]
    fn test_unchanged_assignment_is_noop() {
        assert_eq!(transition(Some(3), Some(3)), CounterTransition::NONE);
        assert_eq!(transition(None, None), CounterTransition::NONE);
    }

    // Needs a live Postgres (DATABASE_URL); run with `cargo test -- --ignored`.
    #[sqlx::test(migrations = "../../migrations")]
    #[ignore]
    async fn test_decrement_clamps_at_zero(pool: sqlx::PgPool) -> sqlx::Result<()> {
        let category_id: i64 =
            sqlx::query_scalar("INSERT INTO categories (name) VALUES ('empty') RETURNING id")
                .fetch_one(&pool)
                .await?;

        // Decrementing a category that is already at zero must floor at
        // zero, not error or go negative.
        let mut tx = pool.begin().await?;
        apply(&mut tx, transition(Some(category_id), None))
            .await
            .expect("decrement at zero floors instead of failing");
        tx.commit().await?;

        let count: i64 =
            sqlx::query_scalar("SELECT product_count FROM categories WHERE id = $1")
                .bind(category_id)
                .fetch_one(&pool)
                .await?;
        assert_eq!(count, 0);

        Ok(())
    }
}
