
use {
    crate::Anyhow,
    feedbag::Database,
};

pub(crate)
async fn ls(db: &Database) -> Anyhow<()> {
    let feeds = db.feeds()?;
    if feeds.is_empty() {
        eprintln!("No feeds. You can add one by passing its URL.");
        return Ok(());
    }

    for feed in feeds {
        let count = db.entry_count(&feed)?;
        println!("{}: {} (Checked: {}) - {}", feed.id, feed.name, feed.last_checked, count);
    }

    Ok(())
}
