//! yt2m3u8 - YouTube live channels to HLS playlist and XMLTV guide
//!
//! Reads a curated channel list, resolves each live-stream URL to its
//! HLS manifest through yt-dlp and publishes an M3U playlist plus a
//! placeholder programme guide.

use std::process::ExitCode;

mod channel_list;
mod config;
mod console;
mod epg;
mod models;
mod pipeline;
mod playlist;
mod probe;
mod resolver;

use config::Config;
use resolver::YtDlp;

fn main() -> ExitCode {
    let config = Config::load();

    if !YtDlp::is_available() {
        console::error("yt-dlp not found on PATH");
        return ExitCode::FAILURE;
    }

    let cookies = config
        .cookies_file
        .exists()
        .then(|| config.cookies_file.clone());
    if let Some(path) = &cookies {
        console::status(&format!("using cookies from {}", path.display()));
    }
    let resolver = YtDlp::new(cookies);

    match pipeline::run(&config, &resolver) {
        Ok(report) => {
            console::status(&format!(
                "Playlist and EPG generated: {} resolved, {} skipped of {} URL(s)",
                report.resolved, report.skipped, report.attempted
            ));
            ExitCode::SUCCESS
        }
        Err(message) => {
            console::error(&message);
            ExitCode::FAILURE
        }
    }
}
