use std::{error::Error, future::Future, future::IntoFuture, pin::Pin};

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use log::info;
use sqlx::{any::AnyPoolOptions, AnyPool};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use app_state::AppState;
use routes::{
    create_chirp, create_user, get_chirp, get_chirps, healthz, login, metrics, polka_webhook,
    refresh, reset, revoke, track_fileserver_hits, update_user,
};

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod migrations;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    let fileserver = Router::new()
        .fallback_service(ServeDir::new(app_state.config.assets_dir()))
        .layer(middleware::from_fn_with_state(
            app_state.fileserver_hits.clone(),
            track_fileserver_hits,
        ));

    Router::new()
        .nest("/app", fileserver)
        .route("/api/healthz", get(healthz))
        .route("/api/users", post(create_user).put(update_user))
        .route("/api/login", post(login))
        .route("/api/refresh", post(refresh))
        .route("/api/revoke", post(revoke))
        .route("/api/chirps", post(create_chirp).get(get_chirps))
        .route("/api/chirps/{chirp_id}", get(get_chirp))
        .route("/api/polka/webhooks", post(polka_webhook))
        .route("/admin/metrics", get(metrics))
        .route("/admin/reset", post(reset))
        .with_state(app_state)
}

/// Open the database pool. In-memory SQLite lives and dies with its
/// connection, so such URLs get exactly one connection that never recycles.
pub async fn get_db_pool(url: &str, max_connections: u32) -> Result<AnyPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    let options = if url.contains(":memory:") {
        AnyPoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        AnyPoolOptions::new().max_connections(max_connections)
    };
    options.connect(url).await
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let listener = TcpListener::bind(address).await?;
        let address = format!("http://{}", listener.local_addr()?);

        let router = app_router(app_state);
        let http_future = axum::serve(listener, router).into_future();

        Ok(Self {
            http_future: Box::pin(http_future),
            address,
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        info!("listening on {}", &self.address);
        self.http_future.await
    }
}
