//! Run control flow
//!
//! Sequential, single-threaded: read the channel list, resolve each URL
//! under the grouping line that precedes it, then write the playlist
//! and the guide once at the end. Per-channel failures are logged and
//! skipped; only a missing input file, a malformed grouping line or an
//! invalid timezone abort the run.

use chrono::Utc;
use chrono_tz::Tz;
use std::fs;

use crate::channel_list::{self, Entry};
use crate::config::Config;
use crate::console;
use crate::epg;
use crate::models::{ChannelGroup, ResolvedChannel};
use crate::playlist;
use crate::probe;
use crate::resolver::StreamResolver;

/// Counts for the completion summary.
#[derive(Debug, Default, PartialEq)]
pub struct RunReport {
    /// URL lines processed
    pub attempted: usize,
    /// Channels that made it into both output files
    pub resolved: usize,
    /// URL lines skipped after a resolution or probe failure
    pub skipped: usize,
}

/// Execute one full run against the configured paths.
///
/// Fatal errors are reported before either output file is touched; a
/// run where every channel fails still succeeds and still writes both
/// files (entry-less).
pub fn run<R: StreamResolver>(config: &Config, resolver: &R) -> Result<RunReport, String> {
    let tz: Tz = config
        .timezone
        .parse()
        .map_err(|e| format!("invalid timezone '{}': {}", config.timezone, e))?;

    let content = fs::read_to_string(&config.channel_list).map_err(|e| {
        format!("cannot read {}: {}", config.channel_list.display(), e)
    })?;

    let entries = channel_list::parse(&content)?;

    // grouping context is loop-local; a URL before any grouping line
    // runs with the empty default identity
    let mut group = ChannelGroup::default();
    let mut channels: Vec<ResolvedChannel> = Vec::new();
    let mut report = RunReport::default();

    for entry in entries {
        match entry {
            Entry::Group(next) => group = next,
            Entry::Url(url) => {
                report.attempted += 1;
                console::status(&format!("Checking {url}"));

                let stream = match resolver.resolve(&url) {
                    Ok(stream) => stream,
                    Err(e) => {
                        console::warn(&format!("skipping {url}: {e}"));
                        report.skipped += 1;
                        continue;
                    }
                };

                if config.verify_streams {
                    if let Err(e) = probe::check_manifest(&stream.manifest_url, &config.user_agent)
                    {
                        console::warn(&format!("skipping {url}: {e}"));
                        report.skipped += 1;
                        continue;
                    }
                }

                console::status(&format!("{}: {}", group.name, stream.manifest_url));
                channels.push(ResolvedChannel {
                    name: group.name.clone(),
                    id: group.id.clone(),
                    category: group.category.clone(),
                    manifest_url: stream.manifest_url,
                    title: stream.title,
                    description: stream.description,
                    thumbnail: stream.thumbnail,
                });
                report.resolved += 1;
            }
        }
    }

    playlist::write(&config.playlist_out, &channels)?;

    let xml = epg::build_xmltv(
        &channels,
        Utc::now(),
        tz,
        config.programme_blocks,
        config.block_hours,
    )?;
    fs::write(&config.epg_out, xml)
        .map_err(|e| format!("failed to write {}: {}", config.epg_out.display(), e))?;

    Ok(report)
}
