use chrono::Local;
use podnab_api::*;

pub const FETCHING_BACKEND: &dyn FetchingBackend = &RssAtom {};

struct RssAtom {}

impl FetchingBackend for RssAtom {
    fn fetch_feed(&self, url: &str) -> Result<Vec<Episode>, anyhow::Error> {
        let response = minreq::get(url).send()?;
        let feed = feed_rs::parser::parse_with_uri(response.as_bytes(), Some(url))?;
        Ok(episodes_from_feed(feed))
    }
}

fn episodes_from_feed(feed: feed_rs::model::Feed) -> Vec<Episode> {
    let feed_title = feed
        .title
        .map_or_else(|| "".to_string(), |title| title.content);
    let mut eps: Vec<Episode> = feed
        .entries
        .into_iter()
        .filter_map(|entry| {
            let published_at = entry
                .published
                .map_or_else(Local::now, |dt| dt.with_timezone(&Local));
            let title = entry
                .title
                .map_or_else(|| feed_title.clone(), |title| title.content);
            // entries without an enclosure have nothing to download
            let enclosure = entry
                .media
                .iter()
                .flat_map(|media| media.content.iter())
                .find(|content| content.url.is_some())?;
            let url = enclosure.url.as_ref()?;
            Some(Episode {
                feed_title: feed_title.clone(),
                title,
                published_at,
                enclosure_url: url.to_string(),
                mime_type: enclosure
                    .content_type
                    .as_ref()
                    .map_or_else(String::new, |mime| mime.essence_str().to_string()),
            })
        })
        .collect();
    eps.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    eps
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Show A</title>
    <item>
      <title>Ep1</title>
      <pubDate>Wed, 01 May 2013 00:00:00 GMT</pubDate>
      <enclosure url="http://x/ep1.mp3" length="10" type="audio/mpeg"/>
    </item>
    <item>
      <title>Ep2</title>
      <pubDate>Thu, 02 May 2013 00:00:00 GMT</pubDate>
      <enclosure url="http://x/ep2.mp3" length="10" type="audio/mpeg"/>
    </item>
    <item>
      <title>Shownotes only</title>
      <pubDate>Fri, 03 May 2013 00:00:00 GMT</pubDate>
    </item>
  </channel>
</rss>"#;

    fn parse(xml: &str) -> feed_rs::model::Feed {
        feed_rs::parser::parse(xml.as_bytes()).expect("feed should parse")
    }

    #[test]
    fn extracts_enclosures_newest_first() {
        let eps = episodes_from_feed(parse(FEED));
        assert_eq!(eps.len(), 2);
        assert_eq!(eps[0].title, "Ep2");
        assert_eq!(eps[0].enclosure_url, "http://x/ep2.mp3");
        assert_eq!(eps[1].title, "Ep1");
        assert_eq!(eps[1].enclosure_url, "http://x/ep1.mp3");
        for ep in &eps {
            assert_eq!(ep.feed_title, "Show A");
            assert_eq!(ep.mime_type, "audio/mpeg");
        }
    }

    #[test]
    fn skips_entries_without_enclosure() {
        let eps = episodes_from_feed(parse(FEED));
        assert!(eps.iter().all(|ep| ep.title != "Shownotes only"));
    }

    #[test]
    fn missing_mime_type_defaults_to_empty() {
        let feed = parse(
            r#"<rss version="2.0"><channel><title>B</title>
            <item>
              <title>Ep</title>
              <pubDate>Wed, 01 May 2013 00:00:00 GMT</pubDate>
              <enclosure url="http://x/ep.mp3" length="1"/>
            </item>
            </channel></rss>"#,
        );
        let eps = episodes_from_feed(feed);
        assert_eq!(eps.len(), 1);
        assert_eq!(eps[0].mime_type, "");
    }
}
