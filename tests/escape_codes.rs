//! Escape-code mode starts enabled and stays off once disabled.
//!
//! Kept in its own test binary: disabling is process-wide and one-way.

mod common;

use escalog::{log_error, log_fatal, log_info, RuntimeError};

fn fatal() -> Result<(), RuntimeError> {
    log_fatal!("Couldn't create the socket");
}

#[test]
fn test_escape_code_lifecycle() {
    let out = common::capture();
    assert!(escalog::escape_codes_enabled());

    log_info!("colored");
    let colored = out.contents();
    assert!(colored.contains('\x1b'), "{colored:?}");
    assert!(colored.contains("INFO"));
    assert!(colored.ends_with(":\n  colored\n"));

    let err = fatal().unwrap_err();
    assert!(err.message().contains('\x1b'));

    escalog::disable_escape_codes();
    assert!(!escalog::escape_codes_enabled());

    out.clear();
    log_error!("plain");
    let plain = out.contents();
    assert!(!plain.contains('\x1b'), "{plain:?}");
    assert!(common::line_regex("ERROR", "plain").is_match(&plain));

    let err = fatal().unwrap_err();
    assert!(!err.message().contains('\x1b'));
    assert!(common::line_regex("FATAL", "Couldn't create the socket").is_match(err.message()));

    // Disabling twice is harmless, there is no toggle
    escalog::disable_escape_codes();
    assert!(!escalog::escape_codes_enabled());
}
