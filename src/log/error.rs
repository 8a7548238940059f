//! Error types a facade can escalate into.

use std::io;

use thiserror::Error;

/// An error that can be built from a rendered diagnostic.
///
/// This is the only thing a subsystem's error type needs in order to be
/// bound to a [`Logger`](super::Logger).
pub trait FromMessage {
    fn from_message(message: String) -> Self;
}

/// Generic runtime failure, the default binding of a facade.
///
/// `Display` yields the rendered diagnostic unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RuntimeError {
    message: String,
}

impl RuntimeError {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

impl FromMessage for RuntimeError {
    fn from_message(message: String) -> Self {
        Self { message }
    }
}

impl FromMessage for String {
    fn from_message(message: String) -> Self {
        message
    }
}

impl FromMessage for io::Error {
    fn from_message(message: String) -> Self {
        io::Error::new(io::ErrorKind::Other, message)
    }
}

impl FromMessage for anyhow::Error {
    fn from_message(message: String) -> Self {
        anyhow::Error::msg(message)
    }
}
