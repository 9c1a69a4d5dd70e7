//! Owner-or-admin authorization for product mutation.

use storekeep_core::error::AppError;
use storekeep_core::result::AppResult;
use storekeep_entity::product::Product;

use crate::context::RequestContext;

/// The mutation being authorized, used only for the denial message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductAction {
    Edit,
    Delete,
}

impl ProductAction {
    fn verb(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }
}

/// Permits the mutation iff the user owns the product or is an admin.
///
/// Callers must resolve the product first; a missing product is a 404
/// and never reaches this check.
pub fn ensure_owner_or_admin(
    ctx: &RequestContext,
    product: &Product,
    action: ProductAction,
) -> AppResult<()> {
    if product.user_id == ctx.user_id() || ctx.is_admin() {
        return Ok(());
    }

    Err(AppError::authorization(format!(
        "Not authorized to {} this product",
        action.verb()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use storekeep_core::error::ErrorKind;
    use storekeep_entity::user::{User, UserRole};

    fn user(id: i64, role: UserRole) -> User {
        User {
            id,
            name: "t".to_string(),
            mobile: "1".to_string(),
            email: format!("u{id}@x.com"),
            password_hash: "h".to_string(),
            role,
            created_at: Utc::now(),
        }
    }

    fn product(owner_id: i64) -> Product {
        Product {
            id: 1,
            name: "p".to_string(),
            price: 10,
            colors: vec![],
            tags: vec![],
            category_id: 1,
            category_name: "c".to_string(),
            user_id: owner_id,
            owner_email: "owner@x.com".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_owner_permitted() {
        let ctx = RequestContext::new(user(7, UserRole::User));
        assert!(ensure_owner_or_admin(&ctx, &product(7), ProductAction::Edit).is_ok());
    }

    #[test]
    fn test_admin_permitted_on_foreign_product() {
        let ctx = RequestContext::new(user(2, UserRole::Admin));
        assert!(ensure_owner_or_admin(&ctx, &product(7), ProductAction::Delete).is_ok());
    }

    #[test]
    fn test_other_user_denied() {
        let ctx = RequestContext::new(user(3, UserRole::User));

        let err = ensure_owner_or_admin(&ctx, &product(7), ProductAction::Edit).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
        assert_eq!(err.message, "Not authorized to edit this product");

        let err = ensure_owner_or_admin(&ctx, &product(7), ProductAction::Delete).unwrap_err();
        assert_eq!(err.message, "Not authorized to delete this product");
    }
}
