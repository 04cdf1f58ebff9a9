//! Data models for the channel resolution run

/// Channel identity active while URL lines are being processed.
///
/// Set by each `name||id||category` grouping line and applied to every
/// URL line that follows until the next grouping line. A URL line seen
/// before any grouping line runs with the empty default identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelGroup {
    /// Display name shown in players
    pub name: String,
    /// Unique channel id (tvg-id / XMLTV channel id)
    pub id: String,
    /// Group/category label
    pub category: String,
}

/// A channel whose live manifest URL was successfully resolved.
///
/// Created once per resolved URL and never mutated afterwards; the
/// ordered collection of these feeds both the playlist renderer and
/// the EPG builder at the end of the run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedChannel {
    pub name: String,
    pub id: String,
    pub category: String,
    /// Resolved HLS manifest URL
    pub manifest_url: String,
    /// Stream title reported by the extractor (may be empty)
    pub title: String,
    /// Stream description reported by the extractor (may be empty)
    pub description: String,
    /// Thumbnail URL reported by the extractor (may be empty)
    pub thumbnail: String,
}
