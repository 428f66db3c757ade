use anyhow::{bail, Context};
use podnab_api::Episode;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub const BLOCK_SIZE: u64 = 8192;

pub fn download_episode(
    episode: &Episode,
    target: &Path,
    progress: &mut dyn FnMut(u64, u64, u64),
) -> anyhow::Result<()> {
    let response = minreq::get(episode.enclosure_url.as_str())
        .send_lazy()
        .with_context(|| format!("requesting {}", episode.enclosure_url))?;
    if !(200..300).contains(&response.status_code) {
        bail!(
            "{} returned {} {}",
            episode.enclosure_url,
            response.status_code,
            response.reason_phrase
        );
    }
    let total = response
        .headers
        .get("content-length")
        .and_then(|value| value.parse().ok())
        .unwrap_or(0);
    // partial transfers stay in a .part file; the target only appears on completion
    let part = target.with_extension("part");
    let file = File::create(&part).with_context(|| format!("creating {}", part.display()))?;
    let mut out = BufWriter::new(file);
    let mut received = 0u64;
    let mut next_report = BLOCK_SIZE;
    progress(0, BLOCK_SIZE, total);
    for byte in response {
        let (byte, _) =
            byte.with_context(|| format!("transfer from {}", episode.enclosure_url))?;
        out.write_all(&[byte])?;
        received += 1;
        if received >= next_report {
            progress(received, BLOCK_SIZE, total);
            next_report = received + BLOCK_SIZE;
        }
    }
    out.flush()?;
    drop(out);
    fs::rename(&part, target)
        .with_context(|| format!("moving {} into place", part.display()))?;
    progress(received, BLOCK_SIZE, received.max(total));
    Ok(())
}
