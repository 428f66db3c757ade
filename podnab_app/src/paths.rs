use chrono::Datelike;
use podnab_api::Episode;

pub fn generate_dirname(episode: &Episode) -> String {
    let joined = episode
        .feed_title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    clean_string(&joined)
}

pub fn generate_filename(episode: &Episode) -> String {
    let date = episode.published_at;
    format!(
        "{:04}{:02}{:02}_{}.mp3",
        date.year(),
        date.month(),
        date.day(),
        generate_dirname(episode)
    )
}

fn clean_string(input: &str) -> String {
    let replaced: String = input
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    // two passes collapse up to four consecutive underscores
    let collapsed = replaced.replace("__", "_").replace("__", "_");
    collapsed.trim_matches('_').to_string()
}
