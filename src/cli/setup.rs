use std::io::Write;

use tracing::info;

use crate::db::Database;
use crate::errors::SectrackError;

pub fn handle_init_db(db: &Database, out: &mut dyn Write) -> Result<(), SectrackError> {
    db.init_schema()?;
    info!(path = %db.path().display(), "Database schema initialized");
    writeln!(out, "OK: database schema initialized.")?;
    Ok(())
}

pub fn handle_seed(db: &Database, out: &mut dyn Write) -> Result<(), SectrackError> {
    db.seed_sample_data()?;
    writeln!(out, "OK: seeded sample data into {}", db.path().display())?;
    Ok(())
}
