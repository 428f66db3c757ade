use cursive::traits::Resizable;
use cursive::views::{LinearLayout, TextContent, TextView};
use cursive::{CursiveRunnable, CursiveRunner};
use podnab_api::{Episode, FeedRef};

const LABEL_WIDTH: usize = 60;
const MARK_COLUMN: usize = 70;

// owns the terminal for the whole run; dropping it restores the terminal,
// including on error paths
pub struct StatusScreen {
    runner: CursiveRunner<CursiveRunnable>,
    labels: Vec<TextContent>,
    marks: Vec<TextContent>,
}

impl StatusScreen {
    pub fn new(feeds: &[FeedRef]) -> StatusScreen {
        let mut labels = Vec::with_capacity(feeds.len());
        let mut marks = Vec::with_capacity(feeds.len());
        let mut rows = LinearLayout::vertical();
        for feed in feeds {
            let label = TextContent::new(truncate(&feed.title));
            let mark = TextContent::new("");
            rows.add_child(
                LinearLayout::horizontal()
                    .child(TextView::new_with_content(label.clone()).fixed_width(MARK_COLUMN))
                    .child(TextView::new_with_content(mark.clone())),
            );
            labels.push(label);
            marks.push(mark);
        }
        let mut runner = cursive::default().into_runner();
        runner.add_fullscreen_layer(rows);
        runner.refresh();
        StatusScreen {
            runner,
            labels,
            marks,
        }
    }

    pub fn show_episode(&mut self, line: usize, episode: &Episode) {
        self.labels[line].set_content(label_for(episode));
        self.runner.refresh();
    }

    pub fn show_progress(&mut self, line: usize, received: u64, block_size: u64, total: u64) {
        let percent = percent_complete(received, block_size, total);
        self.marks[line].set_content(format!("{}%", percent));
        self.runner.refresh();
    }

    pub fn mark_complete(&mut self, line: usize, episode: &Episode) {
        self.labels[line].set_content(label_for(episode));
        self.marks[line].set_content("OK");
        self.runner.refresh();
    }

    pub fn mark_untagged(&mut self, line: usize, episode: &Episode) {
        self.labels[line].set_content(label_for(episode));
        self.marks[line].set_content("TAG!");
        self.runner.refresh();
    }

    pub fn mark_failed(&mut self, line: usize) {
        self.marks[line].set_content("FAIL");
        self.runner.refresh();
    }
}

fn label_for(episode: &Episode) -> String {
    truncate(&format!("{}: {}", episode.feed_title, episode.title))
}

fn truncate(text: &str) -> String {
    text.chars().take(LABEL_WIDTH).collect()
}

fn percent_complete(received: u64, block_size: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    let total_blocks = total.div_ceil(block_size);
    (received.div_ceil(block_size) * 100 / total_blocks).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_clamped() {
        assert_eq!(percent_complete(0, 8192, 100_000), 0);
        assert_eq!(percent_complete(50_000, 8192, 100_000), 53);
        assert_eq!(percent_complete(100_000, 8192, 100_000), 100);
        assert_eq!(percent_complete(150_000, 8192, 100_000), 100);
    }

    #[test]
    fn unknown_total_reads_as_zero() {
        assert_eq!(percent_complete(12_345, 8192, 0), 0);
    }

    #[test]
    fn labels_are_truncated_to_width() {
        let long = "x".repeat(200);
        assert_eq!(truncate(&long).chars().count(), LABEL_WIDTH);
        assert_eq!(truncate("short"), "short");
    }
}
