//! Product handlers.
//!
//! Listing is public; every mutation requires authentication and passes
//! through the owner-or-admin policy in the service layer.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use storekeep_core::error::AppError;
use storekeep_entity::product::{CreateProduct, UpdateProduct};

use crate::dto::request::ProductRequest;
use crate::dto::response::{MessageResponse, ProductResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.product_service.list().await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let product = state
        .product_service
        .create(
            auth.context(),
            CreateProduct {
                name: req.name,
                price: req.price,
                colors: req.colors,
                tags: req.tags,
                category_id: req.category_id,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// PUT /products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<ProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let product = state
        .product_service
        .update(
            auth.context(),
            id,
            UpdateProduct {
                name: req.name,
                price: req.price,
                colors: req.colors,
                tags: req.tags,
                category_id: req.category_id,
            },
        )
        .await?;

    Ok(Json(product.into()))
}

/// DELETE /products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.product_service.delete(auth.context(), id).await?;

    Ok(Json(MessageResponse::new("Product deleted")))
}
