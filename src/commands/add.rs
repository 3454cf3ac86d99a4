
use {
    crate::{fetch, Anyhow},
    chrono::prelude::*,
    feedbag::{models, unix_epoch, Database},
    url::Url,
};

pub(crate)
async fn add(db: &mut Database, client: &reqwest::Client, link: &Url, now: DateTime<Utc>)
    -> Anyhow<()>
{
    if let Some(feed) = db.find_feed(link.as_str())? {
        println!("Feed entitled '{}' already exists for {}", feed.name, link);
        return Ok(());
    }

    println!("Creating new feed for {}", link);

    // Fetch before inserting, so a dead URL never leaves a half-initialized
    // row behind.
    let channel = fetch::fetch_channel(client, link.as_str()).await?;

    let feed = models::NewFeed {
        name:         &channel.title,
        url:          link.as_str(),
        last_checked: unix_epoch(),
        created:      now.naive_utc(),
    };
    db.add_feed(&feed)?;

    println!("\tThe new feed is called '{}'", channel.title);
    Ok(())
}
