
use {
    crate::Anyhow,
    anyhow::Context as _,
    chrono::{DateTime, Utc},
};

/// A fetched feed, flattened to the fields the archive cares about.
pub(crate) struct Channel {
    pub title: String,
    pub items: Vec<Item>,
}

pub(crate) struct Item {
    pub url:         String,
    pub title:       String,
    pub content:     String,
    pub description: Option<String>,
    pub time:        DateTime<Utc>,
}

pub(crate) async fn fetch_channel(client: &reqwest::Client, url: &str) -> Anyhow<Channel> {
    let response = client.get(url)
        .send().await
        .and_then(|response| response.error_for_status())
        .with_context(|| format!("fetching {}", url))?;
    let body = response.bytes().await?;

    let channel = feed_rs::parser::parse(&body[..])
        .with_context(|| format!("parsing feed at {}", url))?;

    Ok(flatten(channel, url))
}

/// Items with no publish date are dropped here; they cannot be compared
/// against a feed's watermark. Items with no link are likewise useless to
/// the archive.
fn flatten(channel: feed_rs::model::Feed, url: &str) -> Channel {
    let title = channel.title
        .map(|title| title.content)
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| url.to_owned());

    let items = channel.entries.into_iter()
        .filter_map(|item| {
            let time = item.published?;
            let url = item.links.get(0)?.href.clone();
            let title = item.title.map(|title| title.content).unwrap_or_default();
            let description = item.summary.map(|summary| summary.content);
            // RSS feeds often carry only a description; treat it as the
            // content when no content body is present.
            let content = item.content
                .and_then(|content| content.body)
                .or_else(|| description.clone())
                .unwrap_or_default();
            Some(Item{url, title, content, description, time})
        })
        .collect();

    Channel{title, items}
}
