use chirpy::app_state::AppState;
use chirpy::migrations;
use chirpy::utils::Config;
use chirpy::{get_db_pool, Application};

#[tokio::main]
async fn main() {
    env_logger::init();
    let config = Config::from_env().expect("Failed to load config");

    let pool = get_db_pool(config.db_url(), config.db_max_connections())
        .await
        .expect("Failed to connect to database");
    migrations::up(&pool)
        .await
        .expect("Failed to run migrations");

    let address = config.listen_address().to_owned();
    let app_state = AppState::with_sql_stores(pool, config).expect("Invalid token settings");
    let app = Application::build(app_state, &address)
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
