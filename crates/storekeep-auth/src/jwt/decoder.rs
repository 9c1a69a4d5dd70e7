//! JWT token validation.

use jsonwebtoken::{decode, DecodingKey, Validation};

use storekeep_core::config::auth::AuthConfig;
use storekeep_core::error::AppError;

use super::claims::Claims;
use super::encoder::parse_algorithm;

/// Validates JWT access tokens against the configured secret.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let mut validation = Validation::new(parse_algorithm(&config.jwt_algorithm)?);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        })
    }

    /// Decodes and validates an access token string.
    ///
    /// Every failure mode (bad signature, expiry, malformed payload,
    /// missing subject) surfaces as an authentication error; the caller
    /// maps all of them to 401.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    _ => AppError::authentication("Invalid token"),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use storekeep_core::config::auth::AuthConfig;
    use storekeep_entity::user::UserRole;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            jwt_algorithm: "HS256".to_string(),
            token_ttl_minutes: 60,
        }
    }

    #[test]
    fn test_roundtrip_preserves_identity() {
        let cfg = config("test-secret");
        let encoder = JwtEncoder::new(&cfg).unwrap();
        let decoder = JwtDecoder::new(&cfg).unwrap();

        let token = encoder.sign("a@x.com", UserRole::Admin).unwrap();
        let claims = decoder.decode(&token).unwrap();

        assert_eq!(claims.email(), "a@x.com");
        assert_eq!(claims.role, UserRole::Admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let encoder = JwtEncoder::new(&config("secret-a")).unwrap();
        let decoder = JwtDecoder::new(&config("secret-b")).unwrap();

        let token = encoder.sign("a@x.com", UserRole::User).unwrap();
        assert!(decoder.decode(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let decoder = JwtDecoder::new(&config("test-secret")).unwrap();
        assert!(decoder.decode("not-a-token").is_err());
    }
}
