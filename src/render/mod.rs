use std::io::Write;

use crate::domain::Feed;
use crate::errors::FinderResult;

pub const SEPARATOR: &str = "----------------------------------------";
pub const NO_TITLE: &str = "No title available";
pub const NO_LINK: &str = "No link available";
pub const NO_SUMMARY: &str = "No summary available";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Fallback display for an optional field.
pub fn display_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => fallback,
    }
}

pub fn render_feed<W: Write>(feed: &Feed, out: &mut W, format: OutputFormat) -> FinderResult<()> {
    match format {
        OutputFormat::Text => render_text(feed, out),
        OutputFormat::Json => render_json(feed, out),
    }
}

/// Human-readable rendering: a count header, then one block per entry.
/// A feed with zero entries produces no output at all.
/// TODO: print a diagnostic for zero-entry feeds so an empty feed is
/// distinguishable from a fetch that never ran.
fn render_text<W: Write>(feed: &Feed, out: &mut W) -> FinderResult<()> {
    if feed.is_empty() {
        return Ok(());
    }

    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Found: {} entries", feed.len())?;
    writeln!(out, "{}", SEPARATOR)?;

    for entry in &feed.entries {
        writeln!(out, "Title: {}", display_or(entry.title.as_deref(), NO_TITLE))?;
        writeln!(out, "Link: {}", display_or(entry.link.as_deref(), NO_LINK))?;
        writeln!(
            out,
            "Description: {}",
            display_or(entry.summary.as_deref(), NO_SUMMARY)
        )?;
        writeln!(out, "{}", SEPARATOR)?;
    }

    Ok(())
}

fn render_json<W: Write>(feed: &Feed, out: &mut W) -> FinderResult<()> {
    serde_json::to_writer_pretty(&mut *out, feed)?;
    writeln!(out)?;
    Ok(())
}
