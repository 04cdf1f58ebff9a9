//! Console status reporting
//!
//! Human-readable progress lines, not a structured log stream. Every
//! line carries a `[HH:MM:SS]` prefix.

/// Get current time as HH:MM:SS (UTC)
pub fn timestamp_now() -> String {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let secs = now % 86400;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Progress/status line
pub fn status(message: &str) {
    println!("[{}] {}", timestamp_now(), message);
}

/// Per-channel skip warning; the run continues
pub fn warn(message: &str) {
    println!("[{}] WARN: {}", timestamp_now(), message);
}

/// Fatal error line, written to stderr
pub fn error(message: &str) {
    eprintln!("[{}] ERROR: {}", timestamp_now(), message);
}
