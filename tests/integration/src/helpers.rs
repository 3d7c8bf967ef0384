//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! and seeding users straight into the database.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::Duration;

use anyhow::Result;
use orion_api::{create_app, create_app_state, serve};
use orion_common::{hash_password, AppConfig};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{unique_tag, AuthResponse, LoginRequest};

/// Counter for unique test ports
static PORT_COUNTER: AtomicU16 = AtomicU16::new(19000);

/// Password of every seeded user
pub const TEST_PASSWORD: &str = "Orion.Prueba.2024";

/// Get a unique port for testing
pub fn get_test_port() -> u16 {
    PORT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub pool: PgPool,
    _handle: JoinHandle<()>,
}

/// A user inserted by the test itself
#[derive(Debug, Clone)]
pub struct SeededUser {
    pub id: i32,
    pub email: String,
    pub password: String,
}

impl SeededUser {
    pub fn login_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let port = get_test_port();
        let addr = SocketAddr::from(([127, 0, 0, 1], port));

        // Create app state; migrations run here
        let state = create_app_state(config).await?;
        let pool = state.db_pool().clone();

        // Build application
        let app = create_app(state);

        // Bind to port
        let listener = TcpListener::bind(addr).await?;
        let actual_addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr: actual_addr,
            client,
            pool,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url(), path))
    }

    fn authed(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        self.request(method, path)
            .header("Authorization", format!("Bearer {}", token))
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.request(Method::GET, path).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self.authed(Method::GET, path, token).send().await?)
    }

    /// Make a GET request with an API key instead of a token
    pub async fn get_api_key(&self, path: &str, api_key: &str) -> Result<Response> {
        Ok(self
            .request(Method::GET, path)
            .header("X-Api-Key", api_key)
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.request(Method::POST, path).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self.authed(Method::POST, path, token).json(body).send().await?)
    }

    /// Make a POST request with auth token and no body
    pub async fn post_empty_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self.authed(Method::POST, path, token).send().await?)
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self.authed(Method::PATCH, path, token).json(body).send().await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self.authed(Method::DELETE, path, token).send().await?)
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self.authed(Method::PUT, path, token).json(body).send().await?)
    }

    // ========================================================================
    // Seeding
    // ========================================================================

    /// Insert an active user with [`TEST_PASSWORD`] and no roles
    pub async fn seed_user(&self) -> Result<SeededUser> {
        let email = format!("prueba.{}@orion.test", unique_tag());
        let contrasena = hash_password(TEST_PASSWORD)?;

        let id: i32 = sqlx::query_scalar(
            "INSERT INTO usuarios (email, nombres, apellido_paterno, puesto, contrasena) \
             VALUES ($1, 'PRUEBA', 'ORION', 'ANALISTA', $2) RETURNING id",
        )
        .bind(&email)
        .bind(&contrasena)
        .fetch_one(&self.pool)
        .await?;

        Ok(SeededUser {
            id,
            email,
            password: TEST_PASSWORD.to_string(),
        })
    }

    /// Insert a user whose role administers every module
    pub async fn seed_admin(&self) -> Result<SeededUser> {
        let usuario = self.seed_user().await?;
        let rol_nombre = format!("ADMINISTRADOR PRUEBA {}", usuario.id);

        let rol_id: i32 =
            sqlx::query_scalar("INSERT INTO roles (nombre) VALUES ($1) RETURNING id")
                .bind(&rol_nombre)
                .fetch_one(&self.pool)
                .await?;

        sqlx::query(
            "INSERT INTO permisos (rol_id, modulo_id, nombre, nivel) \
             SELECT $1, id, nombre || ' ' || $2, 4 FROM modulos",
        )
        .bind(rol_id)
        .bind(&rol_nombre)
        .execute(&self.pool)
        .await?;

        sqlx::query("INSERT INTO usuarios_roles (usuario_id, rol_id, descripcion) VALUES ($1, $2, $3)")
            .bind(usuario.id)
            .bind(rol_id)
            .bind(format!("{} en {}", usuario.email, rol_nombre))
            .execute(&self.pool)
            .await?;

        Ok(usuario)
    }

    /// Log a seeded user in
    pub async fn login(&self, usuario: &SeededUser) -> Result<AuthResponse> {
        let response = self
            .post("/api/v1/auth/login", &usuario.login_request())
            .await?;
        assert_json(response, StatusCode::OK).await
    }

    /// Seed an administrator and return their access token
    pub async fn admin_token(&self) -> Result<String> {
        let admin = self.seed_admin().await?;
        Ok(self.login(&admin).await?.access_token)
    }
}

/// Create a test configuration
///
/// Secrets get throwaway defaults; rate limiting is loosened so parallel
/// tests don't trip it.
pub fn test_config() -> Result<AppConfig> {
    // Load from environment or use defaults
    dotenvy::dotenv().ok();

    for (name, value) in [
        ("API_PORT", "0"),
        ("SALT", "orion-integration-salt"),
        ("JWT_SECRET", "orion-integration-secret-that-is-long-enough"),
    ] {
        if std::env::var(name).is_err() {
            std::env::set_var(name, value);
        }
    }

    let mut config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;
    config.rate_limit.requests_per_second = 1000;
    config.rate_limit.burst = 1000;
    config.storage.upload_dir = std::env::temp_dir()
        .join("orion-integration-uploads")
        .to_string_lossy()
        .into_owned();

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    if std::env::var("REDIS_URL").is_err() {
        eprintln!("Skipping test: REDIS_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
