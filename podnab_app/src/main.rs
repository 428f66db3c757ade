use anyhow::Context;
use podnab_api::{Episode, FeedRef, FetchingBackend};
use std::fs;
use std::path::Path;

mod download;
mod opml;
mod paths;
mod tag;
mod ui;

const OPML_FILE: &str = "subscriptions.opml";
const DOWNLOAD_EPISODES_COUNT: usize = 1;

fn init_log() -> anyhow::Result<flexi_logger::LoggerHandle> {
    let handle = flexi_logger::Logger::try_with_env_or_str("info")?
        .log_to_file(
            flexi_logger::FileSpec::default()
                .basename("podnab")
                .suppress_timestamp(),
        )
        .start()?;
    Ok(handle)
}

fn process_feed(
    feed: &FeedRef,
    line: usize,
    backend: &dyn FetchingBackend,
    screen: &mut ui::StatusScreen,
) {
    let episodes = match backend.fetch_feed(&feed.url) {
        Ok(episodes) => episodes,
        Err(err) => {
            log::warn!("fetching {} failed: {:#}", feed.url, err);
            screen.mark_failed(line);
            return;
        }
    };
    for episode in episodes.into_iter().take(DOWNLOAD_EPISODES_COUNT) {
        if let Err(err) = process_episode(&episode, line, screen) {
            log::warn!(
                "episode {:?} of {:?} failed: {:#}",
                episode.title,
                episode.feed_title,
                err
            );
            screen.mark_failed(line);
        }
    }
}

fn process_episode(
    episode: &Episode,
    line: usize,
    screen: &mut ui::StatusScreen,
) -> anyhow::Result<()> {
    let directory = paths::generate_dirname(episode);
    let filename = paths::generate_filename(episode);
    let target = Path::new(&directory).join(filename);
    fs::create_dir_all(&directory)
        .with_context(|| format!("creating directory {}", directory))?;
    if !target.exists() {
        screen.show_episode(line, episode);
        download::download_episode(episode, &target, &mut |received, block_size, total| {
            screen.show_progress(line, received, block_size, total);
        })?;
        if let Err(err) = tag::update_tag(&target, episode) {
            log::warn!("tagging {} failed: {:#}", target.display(), err);
            screen.mark_untagged(line, episode);
            return Ok(());
        }
    }
    screen.mark_complete(line, episode);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let _logger = init_log()?;
    let feeds = opml::import_feeds(OPML_FILE)
        .with_context(|| format!("reading subscriptions from {}", OPML_FILE))?;
    let backend = podnab_rss::FETCHING_BACKEND;
    let mut screen = ui::StatusScreen::new(&feeds);
    for (line, feed) in feeds.iter().enumerate() {
        process_feed(feed, line, backend, &mut screen);
    }
    Ok(())
}
