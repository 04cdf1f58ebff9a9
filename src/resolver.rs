//! Stream resolution via the external yt-dlp extractor
//!
//! yt-dlp owns the mechanics of turning a live-stream page into a
//! manifest URL; this module only launches it, reads its JSON metadata
//! and validates that an HLS manifest actually came back.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::process::Command;

/// Substring a resolved URL must contain to count as an HLS manifest
pub const MANIFEST_MARKER: &str = ".m3u8";

/// Successful resolution of one stream URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStream {
    pub manifest_url: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
}

/// Why a stream URL could not be resolved.
///
/// Every kind is a per-channel skip for the caller, never a run abort.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// The extractor process could not be started at all
    Launch(String),
    /// The extractor ran and failed (network error, unsupported URL, ...)
    Extraction(String),
    /// The extractor output was not usable metadata JSON
    Metadata(String),
    /// Extraction succeeded but returned no HLS manifest URL
    NoManifest(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Launch(msg) => write!(f, "extractor launch failed: {msg}"),
            ResolveError::Extraction(msg) => write!(f, "extraction failed: {msg}"),
            ResolveError::Metadata(msg) => write!(f, "bad extractor metadata: {msg}"),
            ResolveError::NoManifest(url) => write!(f, "no HLS manifest for {url}"),
        }
    }
}

/// Seam between the run loop and the external extractor.
pub trait StreamResolver {
    fn resolve(&self, url: &str) -> Result<ResolvedStream, ResolveError>;
}

/// Metadata subset of yt-dlp's `--dump-json` output.
///
/// yt-dlp emits `null` for absent description/thumbnail on some
/// extractors, so every field is optional.
#[derive(Debug, Clone, Deserialize)]
struct ExtractorInfo {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    thumbnail: Option<String>,
}

fn stream_from_info(info: ExtractorInfo, source_url: &str) -> Result<ResolvedStream, ResolveError> {
    let manifest_url = info.url.unwrap_or_default();

    if !manifest_url.contains(MANIFEST_MARKER) {
        return Err(ResolveError::NoManifest(source_url.to_string()));
    }

    Ok(ResolvedStream {
        manifest_url,
        title: info.title.unwrap_or_default(),
        description: info.description.unwrap_or_default(),
        thumbnail: info.thumbnail.unwrap_or_default(),
    })
}

/// Resolver backed by the `yt-dlp` executable on PATH.
pub struct YtDlp {
    cookies: Option<PathBuf>,
}

impl YtDlp {
    /// Create a resolver; `cookies` is forwarded via `--cookies` when set.
    pub fn new(cookies: Option<PathBuf>) -> Self {
        Self { cookies }
    }

    /// Check whether yt-dlp can be launched at all.
    pub fn is_available() -> bool {
        Command::new("yt-dlp")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl StreamResolver for YtDlp {
    fn resolve(&self, url: &str) -> Result<ResolvedStream, ResolveError> {
        let mut cmd = Command::new("yt-dlp");
        cmd.args([
            "--quiet",
            "--no-warnings",
            "--skip-download",
            "--no-playlist",
            "-f",
            "best[ext=m3u8]/best",
            "--dump-json",
        ]);

        if let Some(cookies) = &self.cookies {
            cmd.arg("--cookies").arg(cookies);
        }
        cmd.arg(url);

        let output = cmd
            .output()
            .map_err(|e| ResolveError::Launch(format!("failed to run yt-dlp: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ResolveError::Extraction(stderr.trim().to_string()));
        }

        let info: ExtractorInfo = serde_json::from_slice(&output.stdout)
            .map_err(|e| ResolveError::Metadata(e.to_string()))?;

        stream_from_info(info, url)
    }
}
