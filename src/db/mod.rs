pub mod connection;
pub mod findings;
pub mod hosts;
pub mod schema;
pub mod seed;

pub use connection::{Database, Row};
pub use seed::SeedReport;

#[cfg(test)]
pub(crate) fn temp_database() -> (tempfile::TempDir, Database) {
    let dir = tempfile::TempDir::new().unwrap();
    let db = Database::new(dir.path().join("data").join("test.db"));
    db.init_schema().unwrap();
    (dir, db)
}
