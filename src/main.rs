
#![forbid(unsafe_code)]

mod commands;
mod fetch;
mod options;

use {
    crate::options::Options,
    chrono::prelude::*,
    feedbag::Database,
};

pub(crate) use anyhow::Result as Anyhow;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Anyhow<()> {
    let now = Utc::now();

    let opts = Options::load();

    let mut db = Database::open(&opts.database_path)?;
    eprintln!("Using {} for the feed database", opts.database_path.display());

    if opts.clean {
        commands::clean(&db).await?;
        return Ok(());
    }

    db.init_tables()?;

    if opts.list {
        commands::ls(&db).await?;
        return Ok(());
    }

    let client = reqwest::Client::new();
    if opts.feeds.is_empty() {
        commands::scan(&mut db, &client).await?;
    }
    else {
        for link in &opts.feeds {
            commands::add(&mut db, &client, link, now).await?;
        }
    }

    Ok(())
}
