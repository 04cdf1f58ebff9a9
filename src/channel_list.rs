//! Channel list parser
//!
//! Line grammar: blank lines and `##` comments are skipped, lines
//! starting with `https:` are stream URLs, everything else is a
//! `name||id||category` grouping line that sets the identity for the
//! URL lines that follow it.

use crate::models::ChannelGroup;

/// One meaningful line of the channel list, in file order.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// Grouping line: identity applied to subsequent URLs
    Group(ChannelGroup),
    /// Stream URL to resolve under the current identity
    Url(String),
}

/// Parse the full channel list up front.
///
/// Returns entries in file order, or an error naming the offending
/// line when a grouping line does not have exactly three `||`-delimited
/// fields. Failing here means nothing has been resolved or written yet.
pub fn parse(content: &str) -> Result<Vec<Entry>, String> {
    let mut entries = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();

        if line.is_empty() || line.starts_with("##") {
            continue;
        }

        if line.starts_with("https:") {
            entries.push(Entry::Url(line.to_string()));
            continue;
        }

        entries.push(Entry::Group(parse_group_line(line, idx + 1)?));
    }

    Ok(entries)
}

fn parse_group_line(line: &str, line_no: usize) -> Result<ChannelGroup, String> {
    let fields: Vec<&str> = line.split("||").map(str::trim).collect();

    if fields.len() != 3 {
        return Err(format!(
            "line {}: expected 'name||id||category', got {} field(s): {:?}",
            line_no,
            fields.len(),
            line
        ));
    }

    Ok(ChannelGroup {
        name: fields[0].to_string(),
        id: fields[1].to_string(),
        category: fields[2].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_groups_and_urls() {
        let content = "\
## curated channels
Sky News||skynews||News
https://www.youtube.com/watch?v=abc

Al Jazeera || aljazeera || News
https://www.youtube.com/watch?v=def
";
        let entries = parse(content).unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(
            entries[0],
            Entry::Group(ChannelGroup {
                name: "Sky News".to_string(),
                id: "skynews".to_string(),
                category: "News".to_string(),
            })
        );
        assert_eq!(
            entries[1],
            Entry::Url("https://www.youtube.com/watch?v=abc".to_string())
        );
        // fields are trimmed
        assert_eq!(
            entries[2],
            Entry::Group(ChannelGroup {
                name: "Al Jazeera".to_string(),
                id: "aljazeera".to_string(),
                category: "News".to_string(),
            })
        );
    }

    #[test]
    fn test_skips_blanks_and_comments() {
        let content = "\n\n## a comment\n   \n## another\n";
        assert!(parse(content).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_group_line_is_fatal() {
        let content = "Sky News||skynews||News\nBroken|line\n";
        let err = parse(content).unwrap_err();
        assert!(err.contains("line 2"), "unexpected message: {err}");
        assert!(err.contains("name||id||category"));
    }

    #[test]
    fn test_too_many_fields_is_fatal() {
        let err = parse("a||b||c||d\n").unwrap_err();
        assert!(err.contains("4 field(s)"));
    }

    #[test]
    fn test_url_detection_requires_https_prefix() {
        // an http: line is not a URL line, so it must parse as a group
        let err = parse("http://example.com/stream\n").unwrap_err();
        assert!(err.contains("line 1"));
    }
}
