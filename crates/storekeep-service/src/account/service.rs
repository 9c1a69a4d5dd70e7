//! Registration, login, and the password mutation flows.

use std::sync::Arc;

use tracing::{info, warn};

use storekeep_auth::jwt::JwtEncoder;
use storekeep_auth::otp::OtpLedger;
use storekeep_auth::password::PasswordHasher;
use storekeep_core::config::admin::AdminConfig;
use storekeep_core::error::AppError;
use storekeep_core::result::AppResult;
use storekeep_database::repositories::UserRepository;
use storekeep_entity::user::{CreateUser, User, UserRole};

use crate::context::RequestContext;
use crate::mail::Mailer;

/// Data for creating a new account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterAccount {
    /// Display name.
    pub name: String,
    /// Mobile number.
    pub mobile: String,
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Must equal `password`.
    pub confirm_password: String,
}

/// Handles registration, login, and password flows.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Access token signer.
    encoder: Arc<JwtEncoder>,
    /// Pending reset codes.
    otp_ledger: Arc<OtpLedger>,
    /// Outbound mail.
    mailer: Arc<Mailer>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        otp_ledger: Arc<OtpLedger>,
        mailer: Arc<Mailer>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
            otp_ledger,
            mailer,
        }
    }

    /// Registers a new user with the default role.
    pub async fn register(&self, req: RegisterAccount) -> AppResult<User> {
        if req.password != req.confirm_password {
            return Err(AppError::validation("Passwords do not match"));
        }

        if self.user_repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::validation("Email already registered"));
        }

        let password_hash = self.hasher.hash(&req.password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                name: req.name,
                mobile: req.mobile,
                email: req.email,
                password_hash,
                role: UserRole::User,
            })
            .await?;

        info!(user_id = user.id, "User registered");

        Ok(user)
    }

    /// Authenticates by email and password, returning a signed access
    /// token and the user.
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<(String, User)> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid credentials"))?;

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(AppError::authentication("Invalid credentials"));
        }

        let token = self.encoder.sign(&user.email, user.role)?;

        info!(user_id = user.id, "User logged in");

        Ok((token, user))
    }

    /// Changes the current user's password after verifying the old one.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        old_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        if !self.hasher.verify(old_password, &ctx.user.password_hash)? {
            return Err(AppError::authentication("Invalid old password"));
        }

        let new_hash = self.hasher.hash(new_password)?;
        self.user_repo.update_password(ctx.user_id(), &new_hash).await?;

        info!(user_id = ctx.user_id(), "Password changed");

        self.mailer
            .send_best_effort(
                &ctx.user.email,
                "Your password was changed",
                "Your account password was just changed. If this was not you, \
                 reset it immediately.",
            )
            .await;

        Ok(())
    }

    /// Issues a password-reset code for `email` and mails it.
    pub async fn request_otp(&self, email: &str) -> AppResult<()> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("Email not found"))?;

        let code = self.otp_ledger.issue(&user.email);

        info!(user_id = user.id, "Password reset code issued");

        self.mailer
            .send_best_effort(
                &user.email,
                "Your password reset code",
                &format!("Your one-time password reset code is {code}. It expires in 10 minutes."),
            )
            .await;

        Ok(())
    }

    /// Resets a password given a valid pending code.
    ///
    /// The code is consumed only on success; a failed attempt leaves it
    /// pending until expiry.
    pub async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> AppResult<()> {
        if !self.otp_ledger.verify(email, otp) {
            return Err(AppError::validation("Invalid or expired OTP"));
        }

        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let new_hash = self.hasher.hash(new_password)?;
        self.user_repo.update_password(user.id, &new_hash).await?;
        self.otp_ledger.consume(email);

        info!(user_id = user.id, "Password reset");

        self.mailer
            .send_best_effort(
                &user.email,
                "Your password was reset",
                "Your account password was just reset. If this was not you, \
                 contact support.",
            )
            .await;

        Ok(())
    }

    /// Creates the configured admin account at startup if it is absent.
    pub async fn seed_admin(&self, config: &AdminConfig) -> AppResult<()> {
        if config.email.is_empty() || config.password.is_empty() {
            warn!("Admin seed not configured, skipping");
            return Ok(());
        }

        if self.user_repo.find_by_email(&config.email).await?.is_some() {
            return Ok(());
        }

        let password_hash = self.hasher.hash(&config.password)?;
        let admin = self
            .user_repo
            .create(&CreateUser {
                name: "Admin".to_string(),
                mobile: "0000000000".to_string(),
                email: config.email.clone(),
                password_hash,
                role: UserRole::Admin,
            })
            .await?;

        info!(user_id = admin.id, "Admin account seeded");

        Ok(())
    }
}
