use super::MigrationStep;

pub(super) fn step() -> MigrationStep {
    MigrationStep::new(
        "create_table_chirps",
        r#"
        CREATE TABLE IF NOT EXISTS chirps (
            id TEXT PRIMARY KEY,
            body TEXT NOT NULL,
            user_id TEXT NOT NULL REFERENCES users (id) ON DELETE CASCADE,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL
        )
        "#,
    )
}
