//! Configuration management

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Run configuration.
///
/// Every field has a default that reproduces the tool's stock behavior,
/// so a config file is never required. An optional `config.json` in the
/// working directory overrides individual fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Channel list input file
    #[serde(default = "default_channel_list")]
    pub channel_list: PathBuf,
    /// Cookies file handed to the extractor when present
    #[serde(default = "default_cookies_file")]
    pub cookies_file: PathBuf,
    /// M3U playlist output file
    #[serde(default = "default_playlist_out")]
    pub playlist_out: PathBuf,
    /// XMLTV guide output file
    #[serde(default = "default_epg_out")]
    pub epg_out: PathBuf,
    /// IANA timezone for programme timestamps
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Number of placeholder programme blocks per channel
    #[serde(default = "default_programme_blocks")]
    pub programme_blocks: usize,
    /// Length of each programme block in hours
    #[serde(default = "default_block_hours")]
    pub block_hours: i64,
    /// Probe each resolved manifest over HTTP before accepting it
    #[serde(default)]
    pub verify_streams: bool,
    /// User-Agent for the manifest probe
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_channel_list() -> PathBuf { PathBuf::from("youtubeLink.txt") }
fn default_cookies_file() -> PathBuf { PathBuf::from("cookies.txt") }
fn default_playlist_out() -> PathBuf { PathBuf::from("playlist.m3u8") }
fn default_epg_out() -> PathBuf { PathBuf::from("epg.xml") }
fn default_timezone() -> String { "Europe/London".to_string() }
fn default_programme_blocks() -> usize { 8 }
fn default_block_hours() -> i64 { 3 }
fn default_user_agent() -> String {
    format!("yt2m3u8/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel_list: default_channel_list(),
            cookies_file: default_cookies_file(),
            playlist_out: default_playlist_out(),
            epg_out: default_epg_out(),
            timezone: default_timezone(),
            programme_blocks: default_programme_blocks(),
            block_hours: default_block_hours(),
            verify_streams: false,
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Load `config.json` from the working directory, falling back to
    /// defaults when the file is absent or unparsable.
    pub fn load() -> Self {
        Self::load_from(Path::new("config.json"))
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = fs::read_to_string(path) {
                if let Ok(config) = serde_json::from_str(&content) {
                    return config;
                }
            }
        }

        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_behavior() {
        let config = Config::default();
        assert_eq!(config.channel_list, PathBuf::from("youtubeLink.txt"));
        assert_eq!(config.playlist_out, PathBuf::from("playlist.m3u8"));
        assert_eq!(config.epg_out, PathBuf::from("epg.xml"));
        assert_eq!(config.timezone, "Europe/London");
        assert_eq!(config.programme_blocks, 8);
        assert_eq!(config.block_hours, 3);
        assert!(!config.verify_streams);
    }

    #[test]
    fn test_partial_config_file_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"channel_list": "channels.txt", "verify_streams": true}"#)
                .unwrap();
        assert_eq!(config.channel_list, PathBuf::from("channels.txt"));
        assert!(config.verify_streams);
        assert_eq!(config.programme_blocks, 8);
        assert_eq!(config.timezone, "Europe/London");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load_from(Path::new("no-such-config.json"));
        assert_eq!(config.playlist_out, PathBuf::from("playlist.m3u8"));
    }
}
