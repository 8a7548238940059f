//! Escalation: printing observations, turning fatal calls into errors.

use std::fmt;
use std::marker::PhantomData;

use super::{render, stream, Errno, FromMessage, Record, RuntimeError, Severity};

/// Logging facade bound to one error type.
///
/// Declare one per subsystem; the binding is fixed at compile time and
/// every fatal call through the facade produces exactly an `E`.
///
/// ```
/// use escalog::log::{Logger, RuntimeError};
///
/// static LOG: Logger<RuntimeError> = Logger::new();
///
/// fn open(path: &str) -> Result<(), RuntimeError> {
///     escalog::log_info!(logger: LOG, "opening {}", path);
///     if path.is_empty() {
///         escalog::log_fatal!(logger: LOG, "empty path");
///     }
///     Ok(())
/// }
///
/// let err = open("").unwrap_err();
/// assert!(err.message().contains("empty path"));
/// ```
pub struct Logger<E = RuntimeError> {
    quiet: bool,
    _binding: PhantomData<fn() -> E>,
}

/// Facade bound to [`RuntimeError`], used by the macros when no `logger:` is given
pub static RUNTIME: Logger<RuntimeError> = Logger::new();

impl<E> Logger<E> {
    pub const fn new() -> Self {
        Self {
            quiet: false,
            _binding: PhantomData,
        }
    }

    /// A facade that drops INFO, WARN and ERROR lines instead of printing
    /// them. Fatal calls still escalate.
    ///
    /// Dropped lines are still mirrored into `tracing`.
    pub const fn quiet() -> Self {
        Self {
            quiet: true,
            _binding: PhantomData,
        }
    }

    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl<E: FromMessage> Logger<E> {
    /// Log `record`, escalating if it is fatal.
    pub fn log(&self, record: Record<'_>) -> Result<(), E> {
        if self.quiet && !record.severity.escalates() {
            trace(&record);
            return Ok(());
        }
        escalate(record)
    }

    /// Print a non-fatal `record`. Used by the `log_info!` family; fatal
    /// records must go through [`Logger::fatal`].
    ///
    /// # Panics
    ///
    /// If `record` is [`Severity::Fatal`].
    #[doc(hidden)]
    pub fn observe(&self, record: Record<'_>) {
        assert!(
            !record.severity.escalates(),
            "fatal records escalate, they cannot be observed"
        );
        trace(&record);
        if !self.quiet {
            write(&record);
        }
    }

    /// Build the error a fatal `record` escalates into.
    pub fn fatal(&self, record: Record<'_>) -> E {
        trace(&record);
        E::from_message(render::render(&record))
    }
}

impl<E> Default for Logger<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Logger<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Logger<E> {}

impl<E> fmt::Debug for Logger<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("binding", &std::any::type_name::<E>())
            .field("quiet", &self.quiet)
            .finish()
    }
}

/// Render `record` and either print it or, for [`Severity::Fatal`], return it
/// as an `E`.
///
/// A fatal record is not printed: the error's message is the rendered line
/// and reporting it is up to whoever handles the error.
pub fn escalate<E: FromMessage>(record: Record<'_>) -> Result<(), E> {
    trace(&record);
    if record.severity.escalates() {
        return Err(E::from_message(render::render(&record)));
    }
    write(&record);
    Ok(())
}

fn write(record: &Record<'_>) {
    // Format the caller's arguments before locking: a `Display` impl may log
    let body = record.message.to_string();
    let result = write_formatted(&Record {
        message: format_args!("{}", body),
        ..*record
    });

    if let Err(err) = result {
        tracing::warn!(error = %err, "failed to write diagnostic line");
    }
}

fn write_formatted(record: &Record<'_>) -> std::io::Result<()> {
    let mut diagnostics = stream::lock();
    let line = render::render_with(record, diagnostics.escape_codes());
    diagnostics.write_line(&line)
}

/// Mirror a record into `tracing`
fn trace(record: &Record<'_>) {
    let site = &record.site;
    let errno = record.errno.map(Errno::code);
    match record.severity {
        Severity::Info => tracing::info!(
            file = site.file(),
            line = site.line(),
            function = site.function(),
            errno,
            "{}",
            record.message
        ),
        Severity::Warning => tracing::warn!(
            file = site.file(),
            line = site.line(),
            function = site.function(),
            errno,
            "{}",
            record.message
        ),
        Severity::Error => tracing::error!(
            file = site.file(),
            line = site.line(),
            function = site.function(),
            errno,
            "{}",
            record.message
        ),
        Severity::Fatal => tracing::error!(
            file = site.file(),
            line = site.line(),
            function = site.function(),
            errno,
            fatal = true,
            "{}",
            record.message
        ),
    }
}
