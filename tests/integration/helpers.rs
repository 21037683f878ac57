//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use clubforge_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let config = AppConfig::load_file("tests/fixtures/test_config")
            .expect("Failed to load test config");

        let db_pool = clubforge_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        clubforge_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let user_repo = Arc::new(clubforge_database::repositories::user::UserRepository::new(
            db_pool.clone(),
        ));
        let session_repo = Arc::new(
            clubforge_database::repositories::session::SessionRepository::new(db_pool.clone()),
        );
        let club_repo = Arc::new(clubforge_database::repositories::club::ClubRepository::new(
            db_pool.clone(),
        ));
        let membership_repo = Arc::new(
            clubforge_database::repositories::membership::MembershipRepository::new(
                db_pool.clone(),
            ),
        );
        let profile_repo = Arc::new(
            clubforge_database::repositories::profile::ProfileRepository::new(db_pool.clone()),
        );

        let password_hasher = Arc::new(clubforge_auth::password::hasher::PasswordHasher::new());
        let password_validator = Arc::new(
            clubforge_auth::password::validator::PasswordValidator::new(&config.auth),
        );
        let jwt_encoder = Arc::new(clubforge_auth::jwt::encoder::JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(clubforge_auth::jwt::decoder::JwtDecoder::new(&config.auth));
        let session_manager = Arc::new(clubforge_auth::session::manager::SessionManager::new(
            Arc::clone(&user_repo),
            Arc::clone(&session_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&jwt_encoder),
            &config.auth,
        ));

        let feed = clubforge_service::feed::ChangeFeed::default();

        let club_service = Arc::new(clubforge_service::club::ClubService::new(
            Arc::clone(&club_repo),
            Arc::clone(&membership_repo),
        ));
        let membership_service = Arc::new(clubforge_service::membership::MembershipService::new(
            Arc::clone(&membership_repo),
            Arc::clone(&club_repo),
            feed.clone(),
        ));
        let profile_service = Arc::new(clubforge_service::profile::ProfileService::new(
            Arc::clone(&profile_repo),
            feed.clone(),
        ));
        let account_service = Arc::new(clubforge_service::account::AccountService::new(
            Arc::clone(&user_repo),
            Arc::clone(&profile_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&password_validator),
            feed.clone(),
            &config.auth,
        ));

        let app_state = clubforge_api::state::AppState {
            config: Arc::new(config.clone()),
            db_pool: db_pool.clone(),
            feed,
            jwt_decoder,
            session_manager,
            user_repo,
            club_service,
            membership_service,
            profile_service,
            account_service,
        };

        let router = clubforge_api::router::build_router(app_state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Clean mutable test data; seeded clubs stay.
    async fn clean_database(pool: &PgPool) {
        let tables = ["club_memberships", "sessions", "profiles", "users"];

        for table in &tables {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Insert a confirmed user (and their profile row) directly, bypassing
    /// the sign-up flow. Returns the user ID.
    pub async fn create_confirmed_user(&self, email: &str, password: &str) -> Uuid {
        let hasher = clubforge_auth::password::hasher::PasswordHasher::new();
        let hash = hasher.hash_password(password).expect("Failed to hash password");
        let id = Uuid::new_v4();

        sqlx::query(
            r#"INSERT INTO users (id, email, password_hash, confirmed_at)
               VALUES ($1, $2, $3, NOW())"#,
        )
        .bind(id)
        .bind(email)
        .bind(&hash)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test user");

        sqlx::query("INSERT INTO profiles (id, display_name) VALUES ($1, $2)")
            .bind(id)
            .bind(email.split('@').next())
            .execute(&self.db_pool)
            .await
            .expect("Failed to create test profile");

        id
    }

    /// Sign in and return the JWT access token
    pub async fn signin(&self, email: &str, password: &str) -> String {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self
            .request("POST", "/api/auth/signin", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Sign-in failed: {:?}",
            response.body
        );

        response.body["data"]["access_token"]
            .as_str()
            .expect("No access_token in sign-in response")
            .to_string()
    }

    /// Read the outstanding confirmation token for an email, if any.
    pub async fn confirmation_token_for(&self, email: &str) -> Option<Uuid> {
        sqlx::query_scalar("SELECT confirmation_token FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(&self.db_pool)
            .await
            .expect("Failed to read confirmation token")
    }

    /// Resolve a seeded club's ID by slug.
    pub async fn club_id_by_slug(&self, slug: &str) -> Uuid {
        sqlx::query_scalar("SELECT id FROM clubs WHERE slug = $1")
            .bind(slug)
            .fetch_one(&self.db_pool)
            .await
            .expect("Seeded club missing")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
