use std::sync::Arc;

use reqwest::{Client, Response};
use serde_json::{json, Value};
use sqlx::AnyPool;
use test_context::AsyncTestContext;
use tokio::spawn;
use uuid::Uuid;

use chirpy::app_state::AppState;
use chirpy::domain::LoginResponse;
use chirpy::services::{
    HashmapSessionStore, SqlChirpStore, SqlUserStore, TokenService, TokenSettings,
};
use chirpy::utils::Config;
use chirpy::{get_db_pool, migrations, Application};

pub const TEST_JWT_SECRET: &str = "api-test-jwt-secret";
pub const TEST_POLKA_KEY: &str = "f271c81ff7084ee5b99a5091b42d486e";
pub const TEST_PASSWORD: &str = "04234-password";

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub state: AppState,
}

impl TestApp {
    /// Users and chirps in SQLite, sessions in memory.
    pub async fn new() -> Self {
        let config = test_config();
        let pool = test_pool(&config).await;

        let token_service = TokenService::new(
            TokenSettings::from_config(&config).expect("Invalid token settings"),
            Arc::new(HashmapSessionStore::default()),
        );
        let state = AppState::new(
            Arc::new(SqlUserStore::new(pool.clone())),
            Arc::new(SqlChirpStore::new(pool)),
            Arc::new(token_service),
            Arc::new(config),
        );

        Self::spawn(state).await
    }

    /// Every store on one SQLite pool, wired the way `main` wires them.
    pub async fn with_sql_stores() -> Self {
        let config = test_config();
        let pool = test_pool(&config).await;
        let state = AppState::with_sql_stores(pool, config).expect("Invalid token settings");

        Self::spawn(state).await
    }

    async fn spawn(state: AppState) -> Self {
        let app = Application::build(state.clone(), "127.0.0.1:0")
            .await
            .expect("Failed to build app");
        let address = app.address.clone();

        spawn(async move {
            if let Err(e) = app.run().await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
            state,
        }
    }

    pub async fn get(&self, path: &str) -> Response {
        self.http_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute GET request.")
    }

    pub async fn post_empty(&self, path: &str) -> Response {
        self.http_client
            .post(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute POST request.")
    }

    pub async fn create_user(&self, body: &Value) -> Response {
        self.http_client
            .post(format!("{}/api/users", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute create user request.")
    }

    pub async fn update_user(&self, body: &Value, authorization: Option<&str>) -> Response {
        let mut request = self
            .http_client
            .put(format!("{}/api/users", &self.address))
            .json(body);
        if let Some(value) = authorization {
            request = request.header("Authorization", value);
        }
        request
            .send()
            .await
            .expect("Failed to execute update user request.")
    }

    pub async fn login(&self, email: &str, password: &str) -> Response {
        self.http_client
            .post(format!("{}/api/login", &self.address))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute login request.")
    }

    pub async fn refresh(&self, refresh_token: &str) -> Response {
        self.http_client
            .post(format!("{}/api/refresh", &self.address))
            .json(&json!({ "refresh_token": refresh_token }))
            .send()
            .await
            .expect("Failed to execute refresh request.")
    }

    pub async fn revoke(&self, refresh_token: &str) -> Response {
        self.http_client
            .post(format!("{}/api/revoke", &self.address))
            .json(&json!({ "refresh_token": refresh_token }))
            .send()
            .await
            .expect("Failed to execute revoke request.")
    }

    pub async fn post_chirp(&self, body: &str, authorization: Option<&str>) -> Response {
        let mut request = self
            .http_client
            .post(format!("{}/api/chirps", &self.address))
            .json(&json!({ "body": body }));
        if let Some(value) = authorization {
            request = request.header("Authorization", value);
        }
        request
            .send()
            .await
            .expect("Failed to execute post chirp request.")
    }

    pub async fn polka_webhook(&self, body: &Value, authorization: Option<&str>) -> Response {
        let mut request = self
            .http_client
            .post(format!("{}/api/polka/webhooks", &self.address))
            .json(body);
        if let Some(value) = authorization {
            request = request.header("Authorization", value);
        }
        request
            .send()
            .await
            .expect("Failed to execute webhook request.")
    }

    /// Create an account with a random email and log into it.
    pub async fn signup_and_login(&self) -> LoginResponse {
        let email = get_random_email();
        let response = self
            .create_user(&json!({ "email": email, "password": TEST_PASSWORD }))
            .await;
        assert_eq!(response.status().as_u16(), 201);

        let response = self.login(&email, TEST_PASSWORD).await;
        assert_eq!(response.status().as_u16(), 200);
        response
            .json::<LoginResponse>()
            .await
            .expect("Could not deserialize login response")
    }
}

fn test_config() -> Config {
    Config::new(
        "sqlite::memory:".to_owned(),
        TEST_JWT_SECRET.to_owned(),
        TEST_POLKA_KEY.to_owned(),
    )
    .with_assets_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
}

async fn test_pool(config: &Config) -> AnyPool {
    let pool = get_db_pool(config.db_url(), config.db_max_connections())
        .await
        .expect("Failed to open test database");
    migrations::up(&pool)
        .await
        .expect("Failed to migrate test database");
    pool
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub struct TestContext {
    pub test_app: TestApp,
}

impl AsyncTestContext for TestContext {
    async fn setup() -> TestContext {
        TestContext {
            test_app: TestApp::new().await,
        }
    }
}
