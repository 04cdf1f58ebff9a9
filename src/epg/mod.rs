//! EPG (Electronic Program Guide) module
//!
//! Builds the placeholder XMLTV guide for the resolved channels.

mod builder;

// Re-export public types
pub use builder::{build_xmltv, generate_windows, TimeWindow};

/// XMLTV timestamp layout, e.g. `20240115100000 +0000`
pub const XMLTV_DT_FORMAT: &str = "%Y%m%d%H%M%S %z";
