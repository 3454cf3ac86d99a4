
use {
    crate::schema::*,
    chrono::NaiveDateTime,
};

/// A subscribed feed. `last_checked` is the watermark separating
/// already-archived items from new ones; it only ever advances.
#[derive(Queryable, Clone, Debug, PartialEq)]
pub struct Feed {
    pub id:           i32,
    pub name:         String,
    pub url:          String,
    pub last_checked: NaiveDateTime,
    pub created:      NaiveDateTime,
}

#[derive(Insertable)]
#[table_name="feeds"]
pub struct NewFeed<'a> {
    pub name:         &'a str,
    pub url:          &'a str,
    pub last_checked: NaiveDateTime,
    pub created:      NaiveDateTime,
}

/// One archived item. `description` is only stored when it differs from
/// `content`.
#[derive(Queryable, Clone, Debug, PartialEq)]
pub struct Entry {
    pub id:          i32,
    pub url:         String,
    pub title:       String,
    pub content:     String,
    pub description: Option<String>,
    pub time:        NaiveDateTime,
    pub feed_id:     i32,
}

#[derive(Insertable)]
#[table_name="entries"]
pub struct NewEntry<'a> {
    pub url:         &'a str,
    pub title:       &'a str,
    pub content:     &'a str,
    pub description: Option<&'a str>,
    pub time:        NaiveDateTime,
    pub feed_id:     i32,
}
