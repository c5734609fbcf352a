use log::debug;
use sqlx::AnyPool;

mod create_table_chirps;
mod create_table_refresh_tokens;
mod create_table_users;

pub struct MigrationStep {
    name: &'static str,
    sql: &'static str,
}

impl MigrationStep {
    pub(super) fn new(name: &'static str, sql: &'static str) -> Self {
        Self { name, sql }
    }
}

type MigrationFn = fn() -> MigrationStep;

/// Apply every step in order. Steps are idempotent, so running this on an
/// up-to-date database is a no-op.
pub async fn up(pool: &AnyPool) -> Result<(), sqlx::Error> {
    let list: Vec<MigrationFn> = vec![
        create_table_users::step,
        create_table_chirps::step,
        create_table_refresh_tokens::step,
    ];
    for step in list {
        let step = step();
        debug!("applying migration {}", step.name);
        sqlx::query(step.sql).execute(pool).await?;
    }
    Ok(())
}
