table! {
    feeds (id) {
        id -> Integer,
        name -> Text,
        url -> Text,
        last_checked -> Timestamp,
        created -> Timestamp,
    }
}

table! {
    entries (id) {
        id -> Integer,
        url -> Text,
        title -> Text,
        content -> Text,
        description -> Nullable<Text>,
        time -> Timestamp,
        feed_id -> Integer,
    }
}

joinable!(entries -> feeds (feed_id));

allow_tables_to_appear_in_same_query!(
    feeds,
    entries,
);
