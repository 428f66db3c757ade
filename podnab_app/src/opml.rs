use anyhow::Context;
use podnab_api::FeedRef;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs;
use std::path::Path;

pub fn import_feeds(path: impl AsRef<Path>) -> anyhow::Result<Vec<FeedRef>> {
    let xml = fs::read_to_string(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    parse_opml(&xml)
}

// every outline element carrying an xmlUrl attribute, in document order
fn parse_opml(xml: &str) -> anyhow::Result<Vec<FeedRef>> {
    let mut reader = Reader::from_str(xml);
    let mut feeds = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(outline)) | Ok(Event::Empty(outline))
                if outline.name().as_ref() == b"outline" =>
            {
                let Some(url) = outline.try_get_attribute("xmlUrl")? else {
                    continue;
                };
                let title = match outline.try_get_attribute("title")? {
                    Some(attr) => attr.unescape_value()?.into_owned(),
                    None => String::new(),
                };
                feeds.push(FeedRef {
                    url: url.unescape_value()?.into_owned(),
                    title,
                });
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(err).context("malformed opml"),
        }
    }
    Ok(feeds)
}
