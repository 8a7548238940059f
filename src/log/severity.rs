//! Severity levels of a diagnostic line.

use std::fmt;

use crossterm::style::Color;

/// How serious a log call is.
///
/// Ordered by escalation: `Info < Warning < Error < Fatal`. Only [`Severity::Fatal`]
/// turns a log call into an error value; everything below it is printed and
/// forgotten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    /// All severities, lowest first
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Tag printed at the start of a rendered line
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Foreground color of the tag when escape codes are enabled
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error | Self::Fatal => Color::Red,
        }
    }

    /// Whether the tag is additionally printed in bold
    pub const fn is_bold(self) -> bool {
        matches!(self, Self::Fatal)
    }

    /// Whether a log call at this severity escalates into an error
    pub const fn escalates(self) -> bool {
        matches!(self, Self::Fatal)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
