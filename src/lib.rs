
#[macro_use]
extern crate diesel;

use {
    chrono::{NaiveDate, NaiveDateTime},
    thiserror::Error,
};

pub mod models;
pub mod schema;

/// Watermark sentinel for a feed that has never been scanned, so that a
/// first scan considers every dated item new.
pub fn unix_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1970, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("the epoch is a representable timestamp")
}

pub struct Database {
    conn: diesel::sqlite::SqliteConnection,
}

#[derive(Debug, Error)]
pub enum OpenDatabaseError {
    #[error("invalid database path")]
    InvalidPath,
    #[error("creating database directory")]
    CreateDirectory(std::io::Error),
    #[error(transparent)]
    Diesel(#[from] diesel::result::ConnectionError),
}

impl Database {
    pub fn open(path: &std::path::Path) -> Result<Database, OpenDatabaseError> {
        let dir = path.parent().ok_or(OpenDatabaseError::InvalidPath)?;
        std::fs::create_dir_all(dir).map_err(OpenDatabaseError::CreateDirectory)?;

        let path = path.to_str().ok_or(OpenDatabaseError::InvalidPath)?;
        use diesel::prelude::*;
        let conn = SqliteConnection::establish(path)?;

        let db = Database{conn};
        Ok(db)
    }
}

impl Database {
    /// Creates both tables if they are missing. Safe to call on every
    /// startup; there is no migration support beyond this.
    pub fn init_tables(&self) -> diesel::QueryResult<()> {
        use diesel::connection::SimpleConnection as _;
        self.conn.batch_execute(
            "CREATE TABLE IF NOT EXISTS feeds (
                 id           INTEGER PRIMARY KEY NOT NULL,
                 name         TEXT NOT NULL,
                 url          TEXT NOT NULL,
                 last_checked TIMESTAMP NOT NULL,
                 created      TIMESTAMP NOT NULL
             );

             CREATE TABLE IF NOT EXISTS entries (
                 id          INTEGER PRIMARY KEY NOT NULL,
                 url         TEXT NOT NULL,
                 title       TEXT NOT NULL,
                 content     TEXT NOT NULL,
                 description TEXT,
                 time        TIMESTAMP NOT NULL,
                 feed_id     INTEGER NOT NULL REFERENCES feeds (id)
             );

             CREATE INDEX IF NOT EXISTS entries_url ON entries (url);")
    }

    /// Drops both tables, entries before feeds to respect the foreign key.
    pub fn drop_tables(&self) -> diesel::QueryResult<()> {
        use diesel::connection::SimpleConnection as _;
        self.conn.batch_execute(
            "DROP TABLE IF EXISTS entries;
             DROP TABLE IF EXISTS feeds;")
    }
}

#[derive(Debug, Error)]
pub enum AddFeedError {
    #[error("a feed for {0} is already in the database")]
    UrlTaken(String),
    #[error(transparent)]
    Database(#[from] diesel::result::Error),
}

impl Database {
    /// Inserts a fully-populated feed row. Uniqueness of the URL is
    /// enforced here by a pre-insert lookup, not by the schema. The caller
    /// is expected to have fetched the feed already; nothing in the
    /// library touches the network.
    pub fn add_feed(&mut self, feed: &models::NewFeed<'_>)
        -> Result<models::Feed, AddFeedError>
    {
        use diesel::prelude::*;

        if self.find_feed(feed.url)?.is_some() {
            return Err(AddFeedError::UrlTaken(feed.url.to_owned()));
        }

        diesel::insert_into(schema::feeds::table)
            .values(feed)
            .execute(&self.conn)?;

        let stored = self.find_feed(feed.url)?
            .ok_or(diesel::result::Error::NotFound)?;
        Ok(stored)
    }

    pub fn find_feed(&self, url: &str) -> diesel::QueryResult<Option<models::Feed>> {
        use {diesel::prelude::*, schema::feeds::dsl};
        dsl::feeds.filter(dsl::url.eq(url))
            .first::<models::Feed>(&self.conn)
            .optional()
    }

    pub fn feeds(&self) -> diesel::QueryResult<Vec<models::Feed>> {
        use {diesel::prelude::*, schema::feeds::dsl};
        dsl::feeds.order(dsl::id.asc())
            .load::<models::Feed>(&self.conn)
    }
}

impl Database {
    pub fn entries_of(&self, feed: &models::Feed) -> diesel::QueryResult<Vec<models::Entry>> {
        use {diesel::prelude::*, schema::entries::dsl};
        dsl::entries.filter(dsl::feed_id.eq(feed.id))
            .load::<models::Entry>(&self.conn)
    }

    pub fn entry_count(&self, feed: &models::Feed) -> diesel::QueryResult<i64> {
        use {diesel::prelude::*, schema::entries::dsl};
        dsl::entries.filter(dsl::feed_id.eq(feed.id))
            .count()
            .get_result(&self.conn)
    }

    pub fn insert_entry(&mut self, entry: &models::NewEntry<'_>) -> diesel::QueryResult<()> {
        use diesel::prelude::*;
        diesel::insert_into(schema::entries::table)
            .values(entry)
            .execute(&self.conn)?;
        Ok(())
    }

    /// Timestamp of the newest archived entry, or the feed's watermark when
    /// nothing has been archived yet.
    pub fn last_entry_time(&self, feed: &models::Feed) -> diesel::QueryResult<NaiveDateTime> {
        use {diesel::dsl::max, diesel::prelude::*, schema::entries::dsl};
        let latest = dsl::entries.filter(dsl::feed_id.eq(feed.id))
            .select(max(dsl::time))
            .first::<Option<NaiveDateTime>>(&self.conn)?;
        Ok(latest.unwrap_or(feed.last_checked))
    }

    /// Moves the feed's watermark up to its newest entry and persists it.
    /// The watermark never regresses.
    pub fn advance(&mut self, feed: &models::Feed) -> diesel::QueryResult<NaiveDateTime> {
        use {diesel::prelude::*, schema::feeds::dsl};
        let watermark = self.last_entry_time(feed)?.max(feed.last_checked);
        diesel::update(dsl::feeds.filter(dsl::id.eq(feed.id)))
            .set(dsl::last_checked.eq(watermark))
            .execute(&self.conn)?;
        Ok(watermark)
    }
}
