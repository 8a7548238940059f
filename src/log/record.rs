//! A single log call, as handed from the macros to the escalator.

use std::fmt;

use super::{CallSite, Errno, Severity};

/// Everything a log call carries. Built on the stack for one call and
/// consumed straight away; never stored.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub severity: Severity,
    pub errno: Option<Errno>,
    pub site: CallSite,
    pub message: fmt::Arguments<'a>,
}

impl<'a> Record<'a> {
    pub fn new(
        severity: Severity,
        errno: Option<Errno>,
        site: CallSite,
        message: fmt::Arguments<'a>,
    ) -> Self {
        Self {
            severity,
            errno,
            site,
            message,
        }
    }
}
