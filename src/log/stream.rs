//! Process-wide diagnostic stream and escape-code mode.
//!
//! Both live behind a single mutex. Messages are formatted before it is
//! taken; a finished line is then colored and written while it is held, so
//! concurrent log calls cannot tear each other's lines and the escape-code
//! flag is never read mid-update.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A redirected sink and the id of the guard that owns it
struct Redirect {
    id: u64,
    writer: Box<dyn Write + Send>,
}

pub(crate) struct Diagnostics {
    escape_codes: bool,
    /// Active redirections, innermost last. Empty means standard error.
    redirects: Vec<Redirect>,
    next_id: u64,
}

impl Diagnostics {
    pub(crate) fn escape_codes(&self) -> bool {
        self.escape_codes
    }

    pub(crate) fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self.redirects.last_mut() {
            Some(redirect) => {
                redirect.writer.write_all(line.as_bytes())?;
                redirect.writer.flush()
            }
            None => {
                let mut stderr = io::stderr().lock();
                stderr.write_all(line.as_bytes())?;
                stderr.flush()
            }
        }
    }
}

static DIAGNOSTICS: Mutex<Diagnostics> = Mutex::new(Diagnostics {
    escape_codes: true,
    redirects: Vec::new(),
    next_id: 0,
});

/// Lock the shared state. A panic while holding the lock must not silence
/// every later diagnostic, so poisoning is ignored.
pub(crate) fn lock() -> MutexGuard<'static, Diagnostics> {
    DIAGNOSTICS.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Stop emitting ANSI escape sequences for the rest of the process.
///
/// There is no matching enable: color is on at startup and a caller that
/// turns it off (typically a test fixture capturing the stream) owns that
/// decision from then on.
pub fn disable_escape_codes() {
    lock().escape_codes = false;
}

/// Whether rendered lines currently carry color escape sequences
pub fn escape_codes_enabled() -> bool {
    lock().escape_codes
}

/// Send non-fatal diagnostics to `writer` until the returned guard is dropped.
///
/// Redirections stack: the newest live one receives the lines. Dropping a
/// guard removes only its own writer, so guards may be dropped in any order
/// and once all are gone the stream is back on standard error.
pub fn redirect_stream<W>(writer: W) -> StreamGuard
where
    W: Write + Send + 'static,
{
    let mut diagnostics = lock();
    let id = diagnostics.next_id;
    diagnostics.next_id += 1;
    diagnostics.redirects.push(Redirect {
        id,
        writer: Box::new(writer),
    });
    StreamGuard { id }
}

/// Removes its redirection on drop
#[must_use = "the redirection ends as soon as the guard is dropped"]
pub struct StreamGuard {
    id: u64,
}

impl Drop for StreamGuard {
    fn drop(&mut self) {
        let removed = {
            let mut diagnostics = lock();
            let position = diagnostics.redirects.iter().rposition(|r| r.id == self.id);
            position.map(|index| diagnostics.redirects.remove(index))
        };
        // The writer is dropped outside the lock
        drop(removed);
    }
}
