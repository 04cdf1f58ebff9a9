//! Manifest reachability probe
//!
//! Optional post-resolution check (`verify_streams` in the config):
//! fetch the resolved URL and confirm it actually serves an HLS
//! playlist before it is published.

use std::time::Duration;

/// Fetch a resolved manifest URL and require a 200 response whose body
/// starts with the `#EXTM3U` playlist header.
pub fn check_manifest(url: &str, user_agent: &str) -> Result<(), String> {
    let agent = ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(30)))
        .timeout_connect(Some(Duration::from_secs(10)))
        .build()
        .new_agent();

    let mut response = agent
        .get(url)
        .header("User-Agent", user_agent)
        .call()
        .map_err(|e| format!("request failed: {e}"))?;

    if response.status() != 200 {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| format!("read failed: {e}"))?;

    if !body.trim_start().starts_with("#EXTM3U") {
        return Err("response is not an HLS playlist".to_string());
    }

    Ok(())
}
