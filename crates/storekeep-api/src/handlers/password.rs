//! Password flows: OTP request, reset, and authenticated change.

use axum::extract::State;
use axum::Json;

use storekeep_core::error::AppError;

use crate::dto::request::{ChangePasswordRequest, RequestOtpRequest, ResetPasswordRequest};
use crate::dto::response::MessageResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /request-otp
pub async fn request_otp(
    State(state): State<AppState>,
    Json(req): Json<RequestOtpRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let email = req
        .email
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::validation("Email is required"))?;

    state.account_service.request_otp(&email).await?;

    Ok(Json(MessageResponse::new("OTP sent to email")))
}

/// POST /reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let (email, otp, new_password) = match (req.email, req.otp, req.new_password) {
        (Some(e), Some(o), Some(p)) if !e.is_empty() && !o.is_empty() && !p.is_empty() => {
            (e, o, p)
        }
        _ => {
            return Err(AppError::validation(
                "email, otp and new_password required",
            ))
        }
    };

    state
        .account_service
        .reset_password(&email, &otp, &new_password)
        .await?;

    Ok(Json(MessageResponse::new("Password reset successful")))
}

/// POST /change-password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let (old_password, new_password) = match (req.old_password, req.new_password) {
        (Some(o), Some(n)) if !o.is_empty() && !n.is_empty() => (o, n),
        _ => {
            return Err(AppError::validation(
                "old_password and new_password required",
            ))
        }
    };

    state
        .account_service
        .change_password(auth.context(), &old_password, &new_password)
        .await?;

    Ok(Json(MessageResponse::new("Password changed successfully")))
}
