use super::MigrationStep;

pub(super) fn step() -> MigrationStep {
    MigrationStep::new(
        "create_table_users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            hashed_password TEXT NOT NULL,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL,
            is_chirpy_red BIGINT NOT NULL DEFAULT 0
        )
        "#,
    )
}
