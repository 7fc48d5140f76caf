//! The two steps of a run: listing page to talk set JSON, talk set JSON to feed.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use summit_core::TalkSet;
use summit_engine::{
    decode_page, load_talk_set, render_feed, save_talk_set, write_atomically, ExtractSettings,
    SummitPageExtractor, TalkExtractor,
};
use summit_logging::summit_info;

use crate::config::AppConfig;

pub fn extract_page(
    html_path: &Path,
    talks_path: &Path,
    config: &AppConfig,
) -> anyhow::Result<TalkSet> {
    let bytes =
        fs::read(html_path).with_context(|| format!("reading page {}", html_path.display()))?;
    let html = decode_page(&bytes)
        .with_context(|| format!("decoding page {}", html_path.display()))?;

    let extractor = SummitPageExtractor::new(ExtractSettings {
        site_origin: config.site_origin.clone(),
    })?;
    let talk_set = extractor
        .extract(&html)
        .with_context(|| format!("parsing page {}", html_path.display()))?;

    save_talk_set(talks_path, &talk_set)
        .with_context(|| format!("saving talks to {}", talks_path.display()))?;
    Ok(talk_set)
}

pub fn render_talks(
    talks_path: &Path,
    feed_path: &Path,
    config: &AppConfig,
) -> anyhow::Result<PathBuf> {
    let talk_set = load_talk_set(talks_path)
        .with_context(|| format!("loading talks from {}", talks_path.display()))?;
    let xml = render_feed(&talk_set, &config.feed)?;
    let written = write_atomically(feed_path, xml.as_bytes())
        .with_context(|| format!("writing feed to {}", feed_path.display()))?;
    summit_info!("Podcast feed generated: {}", written.display());
    Ok(written)
}
