//! System error codes attached to a diagnostic line.

use std::fmt;
use std::io;

/// A raw OS error code (`errno` on unix, `GetLastError` on Windows).
///
/// Absence of a code is expressed as `Option<Errno>::None`, so every `i32`,
/// including 0, is a valid code to decorate a line with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Errno(pub i32);

impl Errno {
    /// The calling thread's most recent OS error.
    ///
    /// Must be read before anything else that might clobber it, which is why
    /// the `*_errno!` macros evaluate this first.
    pub fn last() -> Self {
        Self(io::Error::last_os_error().raw_os_error().unwrap_or(0))
    }

    /// The OS code carried by `err`, if it came from the OS at all
    pub fn from_io(err: &io::Error) -> Option<Self> {
        err.raw_os_error().map(Self)
    }

    pub const fn code(self) -> i32 {
        self.0
    }

    /// Human-readable platform description, e.g. "Resource temporarily unavailable"
    pub fn description(self) -> String {
        let text = io::Error::from_raw_os_error(self.0).to_string();
        // std appends " (os error N)" to strerror(N)
        let suffix = format!(" (os error {})", self.0);
        match text.strip_suffix(&suffix) {
            Some(description) => description.to_string(),
            None => text,
        }
    }
}

impl From<i32> for Errno {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_has_no_code_suffix() {
        let errno = Errno(2);
        let description = errno.description();
        assert!(!description.is_empty());
        assert!(!description.contains("os error"));
    }

    #[test]
    fn test_description_matches_std() {
        let errno = Errno(13);
        let full = io::Error::from_raw_os_error(13).to_string();
        assert!(full.starts_with(&errno.description()));
    }

    #[test]
    fn test_zero_is_a_code() {
        // 0 still decorates, it is not the "no code" marker
        assert!(!Errno(0).description().is_empty());
    }

    #[test]
    fn test_from_io_error() {
        let err = io::Error::from_raw_os_error(5);
        assert_eq!(Errno::from_io(&err), Some(Errno(5)));

        let err = io::Error::new(io::ErrorKind::Other, "synthetic");
        assert_eq!(Errno::from_io(&err), None);
    }
}
