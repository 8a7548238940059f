//! Text rendering of a log record.
//!
//! Layout, with `[...]` present only when an errno is attached:
//!
//! ```text
//! <TAG>: <file>:<line>: <function>:
//!   <message>[: <errno description>]
//! ```
//!
//! Only the tag is colored, and only while escape codes are enabled.

use std::fmt::Write;

use crossterm::style::{Attribute, ContentStyle};

use super::{stream, Record, Severity};

/// Render `record` honoring the process-wide escape-code mode.
pub fn render(record: &Record<'_>) -> String {
    let escape_codes = stream::lock().escape_codes();
    render_with(record, escape_codes)
}

/// Render `record` with escape codes explicitly on or off.
pub fn render_with(record: &Record<'_>, escape_codes: bool) -> String {
    let mut out = String::with_capacity(128);
    // Writing into a String cannot fail
    let _ = write_record(&mut out, record, escape_codes);
    out
}

fn write_record(out: &mut String, record: &Record<'_>, escape_codes: bool) -> std::fmt::Result {
    write_tag(out, record.severity, escape_codes)?;
    writeln!(
        out,
        ": {}: {}:",
        record.site.position(),
        record.site.function()
    )?;

    write!(out, "  {}", record.message)?;
    if let Some(errno) = record.errno {
        write!(out, ": {}", errno.description())?;
    }
    out.push('\n');
    Ok(())
}

fn write_tag(out: &mut String, severity: Severity, escape_codes: bool) -> std::fmt::Result {
    if !escape_codes {
        out.push_str(severity.tag());
        return Ok(());
    }

    let mut style = ContentStyle::new();
    style.foreground_color = Some(severity.color());
    if severity.is_bold() {
        style.attributes.set(Attribute::Bold);
    }
    write!(out, "{}", style.apply(severity.tag()))
}
