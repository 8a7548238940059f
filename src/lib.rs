//! escalog - call-site aware diagnostics for small system tools
//!
//! Subsystems log through a [`Logger`](log::Logger) facade bound to their own
//! error type. Observations are printed to standard error; fatal calls return
//! the rendered line as an error for the caller to propagate.
//!
//! # Quick Start
//!
//! ```
//! use escalog::{log_info, log_warn_errno};
//!
//! log_info!("listener starting on port {}", 8080);
//! log_warn_errno!(errno: 11, "Running low on buffer space");
//! ```
//!
//! ```text
//! INFO: src/main.rs:4: demo::main:
//!   listener starting on port 8080
//! WARN: src/main.rs:5: demo::main:
//!   Running low on buffer space: Resource temporarily unavailable
//! ```

pub mod config;
pub mod log;

pub use log::{
    disable_escape_codes, escape_codes_enabled, FromMessage, Logger, RuntimeError, Severity,
};
