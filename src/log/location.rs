//! Call-site capture.
//!
//! The logging macros expand [`call_site!`](crate::call_site) where they are
//! written, so `file!()`, `line!()` and the enclosing function name always
//! describe the caller and never this crate.

use std::fmt;
use std::panic::Location;

/// Where a log call was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    column: u32,
    function: &'static str,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32, column: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            column,
            function,
        }
    }

    /// Build from a `#[track_caller]` location, for wrappers that cannot use
    /// the macros. The function name is not known to `Location`.
    pub fn from_location(location: &'static Location<'static>, function: &'static str) -> Self {
        Self::new(location.file(), location.line(), location.column(), function)
    }

    pub const fn file(&self) -> &'static str {
        self.file
    }

    pub const fn line(&self) -> u32 {
        self.line
    }

    pub const fn column(&self) -> u32 {
        self.column
    }

    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// First location field: `<file>:<line>`
    pub fn position(&self) -> Position<'_> {
        Position(self)
    }
}

/// Display adapter for the `<file>:<line>` field
pub struct Position<'a>(&'a CallSite);

impl fmt::Display for Position<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.0.file, self.0.line)
    }
}

/// Strip the helper item path added by [`function_name!`](crate::function_name).
#[doc(hidden)]
pub fn trim_function_name(raw: &'static str) -> &'static str {
    let mut name = raw.strip_suffix("::__here").unwrap_or(raw);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

/// Path of the function this macro is expanded in, e.g. `tcp::connect`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::log::location::trim_function_name(__type_name_of(__here))
    }};
}

/// [`CallSite`] of the place this macro is expanded in.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::log::CallSite::new(
            ::core::file!(),
            ::core::line!(),
            ::core::column!(),
            $crate::function_name!(),
        )
    };
}
