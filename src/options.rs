
use {
    clap::Parser,
    url::Url,
};

#[derive(Parser)]
#[clap(about, version)]
pub struct Options {
    /// Path to the feed database file
    #[clap(short = 'd', long = "db", default_value = "feedbag.db",
           env = "FEEDBAG_DATABASE_PATH")]
    pub database_path: std::path::PathBuf,

    /// List feeds and their entry counts, then exit
    #[clap(short = 'l', long = "list")]
    pub list: bool,

    /// Wipe the database and rebuild an empty schema (be careful!)
    #[clap(short = 'C', long = "clean")]
    pub clean: bool,

    /// Feed URLs to add
    ///
    /// With no URLs (and no mode switch), every feed already in the
    /// database is scanned for new items instead.
    pub feeds: Vec<Url>,
}

impl Options {
    pub fn load() -> Self {
        Self::parse()
    }
}
