//! M3U playlist rendering
//!
//! The whole playlist is built in memory and written in one shot, so an
//! interrupted run never leaves a half-written file behind.

use crate::models::ResolvedChannel;
use std::fs;
use std::path::Path;

/// Render the full playlist document.
///
/// Header first, then one entry per channel: an `#EXTINF` metadata line,
/// the manifest URL and a blank separator line.
pub fn render(channels: &[ResolvedChannel]) -> String {
    let mut playlist = String::from("#EXTM3U\n");

    for channel in channels {
        playlist.push_str(&format!(
            "#EXTINF:-1 tvg-id=\"{id}\" tvg-name=\"{name}\" group-title=\"{group}\", {name}\n\
             {url}\n\n",
            id = channel.id,
            name = channel.name,
            group = channel.category,
            url = channel.manifest_url,
        ));
    }

    playlist
}

/// Render and write the playlist file.
pub fn write(path: &Path, channels: &[ResolvedChannel]) -> Result<(), String> {
    fs::write(path, render(channels))
        .map_err(|e| format!("failed to write {}: {}", path.display(), e))
}
