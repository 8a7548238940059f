//! Call-site macros.
//!
//! Every macro takes `format_args!` style arguments and, optionally, a leading
//! `logger: <facade>,` selecting the [`Logger`](crate::log::Logger) to go
//! through. Without it the [`RUNTIME`](crate::log::RUNTIME) facade is used.
//!
//! The `*_errno!` forms append the description of an OS error code. They read
//! the calling thread's last OS error before evaluating anything else, or take
//! an explicit `errno: <i32>,` after the optional `logger:`.
//!
//! `log_fatal!` and `log_fatal_errno!` do not evaluate to a value: they return
//! `Err(From::from(e))` from the enclosing function, like `anyhow::bail!`.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_observe {
    ($logger:expr, $severity:expr, $errno:expr, $($arg:tt)+) => {
        $logger.observe($crate::log::Record::new(
            $severity,
            $errno,
            $crate::call_site!(),
            ::core::format_args!($($arg)+),
        ))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_raise {
    ($logger:expr, $errno:expr, $($arg:tt)+) => {
        return ::core::result::Result::Err(::core::convert::From::from($logger.fatal(
            $crate::log::Record::new(
                $crate::log::Severity::Fatal,
                $errno,
                $crate::call_site!(),
                ::core::format_args!($($arg)+),
            ),
        )))
    };
}

/// Log at a severity chosen at run time. Evaluates to `Result<(), E>`, `Err`
/// only for [`Severity::Fatal`](crate::log::Severity::Fatal).
#[macro_export]
macro_rules! log_at {
    (logger: $logger:expr, $severity:expr, errno: $errno:expr, $($arg:tt)+) => {
        $logger.log($crate::log::Record::new(
            $severity,
            ::core::option::Option::Some($crate::log::Errno::from($errno)),
            $crate::call_site!(),
            ::core::format_args!($($arg)+),
        ))
    };
    (logger: $logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($crate::log::Record::new(
            $severity,
            ::core::option::Option::None,
            $crate::call_site!(),
            ::core::format_args!($($arg)+),
        ))
    };
    ($severity:expr, errno: $errno:expr, $($arg:tt)+) => {
        $crate::log_at!(logger: $crate::log::RUNTIME, $severity, errno: $errno, $($arg)+)
    };
    ($severity:expr, $($arg:tt)+) => {
        $crate::log_at!(logger: $crate::log::RUNTIME, $severity, $($arg)+)
    };
}

/// Print an INFO line
#[macro_export]
macro_rules! log_info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__log_observe!(
            $logger,
            $crate::log::Severity::Info,
            ::core::option::Option::None,
            $($arg)+
        )
    };
    ($($arg:tt)+) => {
        $crate::log_info!(logger: $crate::log::RUNTIME, $($arg)+)
    };
}

/// Print an INFO line decorated with an OS error
#[macro_export]
macro_rules! log_info_errno {
    (logger: $logger:expr, errno: $errno:expr, $($arg:tt)+) => {
        $crate::__log_observe!(
            $logger,
            $crate::log::Severity::Info,
            ::core::option::Option::Some($crate::log::Errno::from($errno)),
            $($arg)+
        )
    };
    (logger: $logger:expr, $($arg:tt)+) => {{
        let __errno = $crate::log::Errno::last();
        $crate::log_info_errno!(logger: $logger, errno: __errno, $($arg)+)
    }};
    (errno: $errno:expr, $($arg:tt)+) => {
        $crate::log_info_errno!(logger: $crate::log::RUNTIME, errno: $errno, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_info_errno!(logger: $crate::log::RUNTIME, $($arg)+)
    };
}

/// Print a WARN line
#[macro_export]
macro_rules! log_warn {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__log_observe!(
            $logger,
            $crate::log::Severity::Warning,
            ::core::option::Option::None,
            $($arg)+
        )
    };
    ($($arg:tt)+) => {
        $crate::log_warn!(logger: $crate::log::RUNTIME, $($arg)+)
    };
}

/// Print a WARN line decorated with an OS error
#[macro_export]
macro_rules! log_warn_errno {
    (logger: $logger:expr, errno: $errno:expr, $($arg:tt)+) => {
        $crate::__log_observe!(
            $logger,
            $crate::log::Severity::Warning,
            ::core::option::Option::Some($crate::log::Errno::from($errno)),
            $($arg)+
        )
    };
    (logger: $logger:expr, $($arg:tt)+) => {{
        let __errno = $crate::log::Errno::last();
        $crate::log_warn_errno!(logger: $logger, errno: __errno, $($arg)+)
    }};
    (errno: $errno:expr, $($arg:tt)+) => {
        $crate::log_warn_errno!(logger: $crate::log::RUNTIME, errno: $errno, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_warn_errno!(logger: $crate::log::RUNTIME, $($arg)+)
    };
}

/// Print an ERROR line
#[macro_export]
macro_rules! log_error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__log_observe!(
            $logger,
            $crate::log::Severity::Error,
            ::core::option::Option::None,
            $($arg)+
        )
    };
    ($($arg:tt)+) => {
        $crate::log_error!(logger: $crate::log::RUNTIME, $($arg)+)
    };
}

/// Print an ERROR line decorated with an OS error
#[macro_export]
macro_rules! log_error_errno {
    (logger: $logger:expr, errno: $errno:expr, $($arg:tt)+) => {
        $crate::__log_observe!(
            $logger,
            $crate::log::Severity::Error,
            ::core::option::Option::Some($crate::log::Errno::from($errno)),
            $($arg)+
        )
    };
    (logger: $logger:expr, $($arg:tt)+) => {{
        let __errno = $crate::log::Errno::last();
        $crate::log_error_errno!(logger: $logger, errno: __errno, $($arg)+)
    }};
    (errno: $errno:expr, $($arg:tt)+) => {
        $crate::log_error_errno!(logger: $crate::log::RUNTIME, errno: $errno, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_error_errno!(logger: $crate::log::RUNTIME, $($arg)+)
    };
}

/// Return a FATAL error from the enclosing function
#[macro_export]
macro_rules! log_fatal {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__log_raise!($logger, ::core::option::Option::None, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_fatal!(logger: $crate::log::RUNTIME, $($arg)+)
    };
}

/// Return a FATAL error decorated with an OS error from the enclosing function
#[macro_export]
macro_rules! log_fatal_errno {
    (logger: $logger:expr, errno: $errno:expr, $($arg:tt)+) => {
        $crate::__log_raise!(
            $logger,
            ::core::option::Option::Some($crate::log::Errno::from($errno)),
            $($arg)+
        )
    };
    (logger: $logger:expr, $($arg:tt)+) => {{
        let __errno = $crate::log::Errno::last();
        $crate::log_fatal_errno!(logger: $logger, errno: __errno, $($arg)+)
    }};
    (errno: $errno:expr, $($arg:tt)+) => {
        $crate::log_fatal_errno!(logger: $crate::log::RUNTIME, errno: $errno, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_fatal_errno!(logger: $crate::log::RUNTIME, $($arg)+)
    };
}
