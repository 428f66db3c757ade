use anyhow::Context;
use chrono::Datelike;
use id3::{Tag, TagLike, Version};
use podnab_api::Episode;
use std::path::Path;

pub fn update_tag(target: &Path, episode: &Episode) -> anyhow::Result<()> {
    let date = episode.published_at;
    let mut tag = match Tag::read_from_path(target) {
        Ok(tag) => tag,
        Err(err) if matches!(err.kind, id3::ErrorKind::NoTag) => Tag::new(),
        Err(err) => {
            return Err(err).with_context(|| format!("reading tag from {}", target.display()))
        }
    };
    tag.set_artist(episode.feed_title.as_str());
    tag.set_album(episode.feed_title.as_str());
    tag.set_title(episode.title.as_str());
    tag.set_date_released(id3::Timestamp {
        year: date.year(),
        month: Some(date.month() as u8),
        day: Some(date.day() as u8),
        hour: None,
        minute: None,
        second: None,
    });
    tag.set_genre("Podcast");
    tag.write_to_path(target, Version::Id3v24)
        .with_context(|| format!("writing tag to {}", target.display()))?;
    Ok(())
}
