//! Call-site aware diagnostics with fatal error escalation.
//!
//! - **severity**: the INFO/WARN/ERROR/FATAL levels and their colors
//! - **errno**: OS error codes and their descriptions
//! - **location**: call-site capture (`call_site!`, `function_name!`)
//! - **record**: one log call in flight
//! - **render**: the textual line format
//! - **stream**: the shared diagnostic stream and escape-code mode
//! - **escalate**: `Logger<E>` facades and fatal escalation
//! - **error**: error types a facade can be bound to
//!
//! # Line format
//!
//! ```text
//! WARN: src/tcp.rs:88: tcp::read_reply:
//!   Running low on buffer space: Resource temporarily unavailable
//! ```
//!
//! Non-fatal lines go to standard error (or a redirected sink). A fatal call
//! writes nothing and hands the same text back as the bound error instead.

pub mod errno;
pub mod error;
pub mod escalate;
pub mod location;
mod macros;
pub mod record;
pub mod render;
pub mod severity;
pub mod stream;

pub use errno::Errno;
pub use error::{FromMessage, RuntimeError};
pub use escalate::{escalate, Logger, RUNTIME};
pub use location::CallSite;
pub use record::Record;
pub use render::{render, render_with};
pub use severity::Severity;
pub use stream::{disable_escape_codes, escape_codes_enabled, redirect_stream, StreamGuard};
