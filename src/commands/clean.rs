
use {
    crate::Anyhow,
    feedbag::Database,
};

/// Destroys both tables and recreates them empty.
pub(crate)
async fn clean(db: &Database) -> Anyhow<()> {
    db.drop_tables()?;
    db.init_tables()?;
    println!("Cleaned feed database");
    Ok(())
}
