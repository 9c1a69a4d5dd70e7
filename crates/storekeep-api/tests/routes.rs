//! Router-level tests that exercise the HTTP surface without a live
//! database. The pool is created lazily and never connected; every
//! request here either skips the database or is rejected before the
//! handler touches it.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use storekeep_api::{build_router, AppState};
use storekeep_auth::jwt::{JwtDecoder, JwtEncoder};
use storekeep_auth::otp::OtpLedger;
use storekeep_auth::password::PasswordHasher;
use storekeep_core::config::auth::AuthConfig;
use storekeep_core::config::database::DatabaseConfig;
use storekeep_core::config::AppConfig;
use storekeep_database::repositories::{CategoryRepository, ProductRepository, UserRepository};
use storekeep_service::{AccountService, CategoryService, Mailer, ProductService};

fn test_config() -> AppConfig {
    AppConfig {
        server: Default::default(),
        database: DatabaseConfig {
            url: "postgres://localhost/storekeep_test".to_string(),
            max_connections: 1,
            min_connections: 0,
            acquire_timeout_seconds: 1,
            idle_timeout_seconds: 1,
        },
        auth: AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_algorithm: "HS256".to_string(),
            token_ttl_minutes: 60,
        },
        mail: Default::default(),
        admin: Default::default(),
        logging: Default::default(),
    }
}

fn test_state() -> AppState {
    let config = test_config();

    // Lazy pool: no connection is attempted until a query runs.
    let pool = sqlx::PgPool::connect_lazy(&config.database.url).unwrap();

    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let category_repo = Arc::new(CategoryRepository::new(pool.clone()));
    let product_repo = Arc::new(ProductRepository::new(pool));

    let hasher = Arc::new(PasswordHasher::new());
    let encoder = Arc::new(JwtEncoder::new(&config.auth).unwrap());
    let decoder = Arc::new(JwtDecoder::new(&config.auth).unwrap());
    let ledger = Arc::new(OtpLedger::new());
    let mailer = Arc::new(Mailer::Log);

    let account_service = Arc::new(AccountService::new(
        user_repo.clone(),
        hasher,
        encoder,
        ledger,
        mailer,
    ));
    let category_service = Arc::new(CategoryService::new(category_repo.clone()));
    let product_service = Arc::new(ProductService::new(product_repo, category_repo));

    AppState {
        config: Arc::new(config),
        jwt_decoder: decoder,
        user_repo,
        account_service,
        category_service,
        product_service,
    }
}

#[tokio::test]
async fn test_health_responds_without_auth() {
    let app = build_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_root_responds_without_auth() {
    let app = build_router(test_state());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_product_mutation_requires_auth() {
    let app = build_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/products")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"name":"Chair","price":10,"categoryId":1}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_bearer_rejected() {
    for header in ["Bearer", "Bearer a b", "Basic abc", "token"] {
        let response = build_router(test_state())
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/products/1")
                    .header("authorization", header)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{header}");
    }
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = build_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/products/1")
                .header("authorization", "Bearer not.a.token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
