//! XMLTV guide builder
//!
//! Pure batch transform: given the resolved channel list and a
//! generation instant, emit a guide where every channel carries a run
//! of placeholder programme blocks tiling the next 24 hours. The
//! instant is a parameter so tests can pin it.

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::XMLTV_DT_FORMAT;
use crate::models::ResolvedChannel;

const GENERATOR_NAME: &str = "youtube-live-epg";
const GENERATOR_URL: &str = "https://github.com/atone77721/yt2m3u8";
const FALLBACK_DESCRIPTION: &str = "No description provided";

/// One programme slot: a (start, end) pair of zone-aware timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeWindow {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

/// Truncate an instant to the top of its hour in `tz`.
fn truncate_to_hour(instant: DateTime<Utc>, tz: Tz) -> DateTime<Tz> {
    let local = instant.with_timezone(&tz);
    tz.with_ymd_and_hms(local.year(), local.month(), local.day(), local.hour(), 0, 0)
        .earliest()
        .unwrap_or(local)
}

/// Generate `count` sequential windows of `block_hours` each, anchored
/// at `instant` truncated to the hour in `tz`. Windows are contiguous,
/// so with the stock 8 x 3h they tile exactly 24 hours.
pub fn generate_windows(
    instant: DateTime<Utc>,
    tz: Tz,
    count: usize,
    block_hours: i64,
) -> Vec<TimeWindow> {
    let mut anchors = Vec::with_capacity(count + 1);
    let mut anchor = truncate_to_hour(instant, tz);
    for _ in 0..=count {
        anchors.push(anchor);
        anchor += Duration::hours(block_hours);
    }

    anchors
        .windows(2)
        .map(|pair| TimeWindow {
            start: pair[0],
            end: pair[1],
        })
        .collect()
}

/// Serialize the full XMLTV document, pretty-printed and UTF-8 encoded.
///
/// Each channel contributes one `<channel>` declaration followed by its
/// programme run, in input order.
pub fn build_xmltv(
    channels: &[ResolvedChannel],
    instant: DateTime<Utc>,
    tz: Tz,
    blocks: usize,
    block_hours: i64,
) -> Result<Vec<u8>, String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(xml_err)?;

    let mut tv = BytesStart::new("tv");
    tv.push_attribute(("generator-info-name", GENERATOR_NAME));
    tv.push_attribute(("generator-info-url", GENERATOR_URL));
    writer.write_event(Event::Start(tv)).map_err(xml_err)?;

    for channel in channels {
        write_channel(&mut writer, channel)?;
        for window in generate_windows(instant, tz, blocks, block_hours) {
            write_programme(&mut writer, channel, &window)?;
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new("tv")))
        .map_err(xml_err)?;

    let mut xml = writer.into_inner();
    xml.push(b'\n');
    Ok(xml)
}

fn write_channel(writer: &mut Writer<Vec<u8>>, channel: &ResolvedChannel) -> Result<(), String> {
    let mut el = BytesStart::new("channel");
    el.push_attribute(("id", channel.id.as_str()));
    writer.write_event(Event::Start(el)).map_err(xml_err)?;

    write_text_element(writer, "display-name", &channel.name)?;

    writer
        .write_event(Event::End(BytesEnd::new("channel")))
        .map_err(xml_err)
}

fn write_programme(
    writer: &mut Writer<Vec<u8>>,
    channel: &ResolvedChannel,
    window: &TimeWindow,
) -> Result<(), String> {
    let start = window.start.format(XMLTV_DT_FORMAT).to_string();
    let stop = window.end.format(XMLTV_DT_FORMAT).to_string();

    let mut programme = BytesStart::new("programme");
    programme.push_attribute(("channel", channel.id.as_str()));
    programme.push_attribute(("start", start.as_str()));
    programme.push_attribute(("stop", stop.as_str()));
    writer.write_event(Event::Start(programme)).map_err(xml_err)?;

    let title = if channel.title.is_empty() {
        format!("LIVE: {}", channel.name)
    } else {
        channel.title.clone()
    };
    write_text_element(writer, "title", &title)?;

    let desc = if channel.description.is_empty() {
        FALLBACK_DESCRIPTION
    } else {
        &channel.description
    };
    write_text_element(writer, "desc", desc)?;

    // icon carries the thumbnail URL, present even when empty
    let mut icon = BytesStart::new("icon");
    icon.push_attribute(("src", channel.thumbnail.as_str()));
    writer.write_event(Event::Empty(icon)).map_err(xml_err)?;

    writer
        .write_event(Event::End(BytesEnd::new("programme")))
        .map_err(xml_err)
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), String> {
    let mut el = BytesStart::new(name);
    el.push_attribute(("lang", "en"));
    writer.write_event(Event::Start(el)).map_err(xml_err)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_err)
}

fn xml_err(e: impl std::fmt::Display) -> String {
    format!("xml write failed: {e}")
}
