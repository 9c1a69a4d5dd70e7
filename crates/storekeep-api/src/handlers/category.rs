//! Category handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use storekeep_core::error::AppError;

use crate::dto::request::CreateCategoryRequest;
use crate::dto::response::{CategoryResponse, MessageResponse};
use crate::state::AppState;

/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    let categories = state.category_service.list().await?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let category = state.category_service.create(&req.name).await?;

    Ok((StatusCode::CREATED, Json(category.into())))
}

/// DELETE /categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.category_service.delete(id).await?;

    Ok(Json(MessageResponse::new("Category deleted")))
}
