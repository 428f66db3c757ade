#[derive(Debug, Clone)]
pub struct FeedRef {
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct Episode {
    pub feed_title: String,
    pub title: String,
    pub published_at: chrono::DateTime<chrono::Local>,
    pub enclosure_url: String,
    /// Declared MIME type of the enclosure; empty when the feed declares none.
    pub mime_type: String,
}

pub trait FetchingBackend {
    fn fetch_feed(&self, url: &str) -> Result<Vec<Episode>, anyhow::Error>;
}
