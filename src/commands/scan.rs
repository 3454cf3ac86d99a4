
use {
    crate::{fetch, Anyhow},
    feedbag::{models, Database},
    std::io::Write as _,
};

pub(crate)
async fn scan(db: &mut Database, client: &reqwest::Client) -> Anyhow<()> {
    let feeds = db.feeds()?;
    if feeds.is_empty() {
        eprintln!("No feeds. You can add one by passing its URL.");
        return Ok(());
    }

    for feed in feeds {
        println!("\nScanning {}", feed.name);
        let channel = fetch::fetch_channel(client, &feed.url).await?;
        archive_items(db, &feed, &channel.items)?;
        db.advance(&feed)?;
    }

    Ok(())
}

/// Persists every item dated strictly after the feed's watermark, printing
/// its title; prints a `.` for each item skipped.
fn archive_items(db: &mut Database, feed: &models::Feed, items: &[fetch::Item])
    -> Anyhow<usize>
{
    let mut archived = 0;
    for item in items {
        let time = item.time.naive_utc();
        if time > feed.last_checked {
            println!("\t{}", item.title);
            let entry = models::NewEntry {
                url:     &item.url,
                title:   &item.title,
                content: &item.content,
                // redundant when identical to the content
                description: item.description.as_deref()
                    .filter(|description| *description != item.content),
                time,
                feed_id: feed.id,
            };
            db.insert_entry(&entry)?;
            archived += 1;
        }
        else {
            print!(".");
        }
    }
    std::io::stdout().flush()?;

    Ok(archived)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
    use feedbag::unix_epoch;

    fn test_database() -> Database {
        let db = Database::open(std::path::Path::new(":memory:")).unwrap();
        db.init_tables().unwrap();
        db
    }

    fn day(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, day, 0, 0, 0).unwrap()
    }

    fn feed_checked_at(db: &mut Database, last_checked: NaiveDateTime) -> models::Feed {
        let feed = models::NewFeed {
            name:         "Example Feed",
            url:          "https://example.com/feed.xml",
            last_checked,
            created:      last_checked,
        };
        db.add_feed(&feed).unwrap()
    }

    fn item(url: &str, time: DateTime<Utc>) -> fetch::Item {
        fetch::Item {
            url:         url.to_owned(),
            title:       format!("Item {}", url),
            content:     "Some content".to_owned(),
            description: None,
            time,
        }
    }

    #[test]
    fn archives_only_items_past_the_watermark() {
        let mut db = test_database();
        let feed = feed_checked_at(&mut db, day(1).naive_utc());

        let items = [
            item("https://example.com/1", day(1)),
            item("https://example.com/3", day(3)),
            item("https://example.com/2", day(2)),
        ];
        let archived = archive_items(&mut db, &feed, &items).unwrap();
        assert_eq!(archived, 2);

        let mut urls: Vec<_> = db.entries_of(&feed).unwrap()
            .into_iter()
            .map(|entry| entry.url)
            .collect();
        urls.sort();
        assert_eq!(urls, vec!["https://example.com/2", "https://example.com/3"]);

        // the watermark lands on the newest time, not the insertion order
        let watermark = db.advance(&feed).unwrap();
        assert_eq!(watermark, day(3).naive_utc());
    }

    #[test]
    fn rescanning_archives_nothing_new() {
        let mut db = test_database();
        let feed = feed_checked_at(&mut db, unix_epoch());

        let items = [
            item("https://example.com/1", day(1)),
            item("https://example.com/2", day(2)),
        ];
        assert_eq!(archive_items(&mut db, &feed, &items).unwrap(), 2);
        db.advance(&feed).unwrap();

        let feed = db.find_feed(&feed.url).unwrap().unwrap();
        assert_eq!(archive_items(&mut db, &feed, &items).unwrap(), 0);
        assert_eq!(db.entry_count(&feed).unwrap(), 2);
    }

    #[test]
    fn drops_descriptions_that_repeat_the_content() {
        let mut db = test_database();
        let feed = feed_checked_at(&mut db, unix_epoch());

        let mut repeated = item("https://example.com/repeated", day(1));
        repeated.description = Some("Some content".to_owned());
        let mut distinct = item("https://example.com/distinct", day(2));
        distinct.description = Some("A shorter blurb".to_owned());

        archive_items(&mut db, &feed, &[repeated, distinct]).unwrap();

        for entry in db.entries_of(&feed).unwrap() {
            match entry.url.as_str() {
                "https://example.com/repeated" => assert_eq!(entry.description, None),
                "https://example.com/distinct" => {
                    assert_eq!(entry.description.as_deref(), Some("A shorter blurb"));
                }
                other => panic!("unexpected entry {}", other),
            }
        }
    }
}
