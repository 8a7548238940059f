//! Shared fixture: capture the diagnostic stream of this test binary.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use escalog::log::{redirect_stream, StreamGuard};

/// The stream is process-wide, tests that capture it run one at a time
static STREAM_LOCK: Mutex<()> = Mutex::new(());

#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub struct Capture {
    pub buffer: SharedBuffer,
    _stream: StreamGuard,
    _lock: MutexGuard<'static, ()>,
}

impl Capture {
    pub fn contents(&self) -> String {
        self.buffer.contents()
    }

    pub fn clear(&self) {
        self.buffer.clear();
    }
}

/// Redirect the diagnostic stream into a buffer until the capture is dropped
pub fn capture() -> Capture {
    let lock = STREAM_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let buffer = SharedBuffer::default();
    let stream = redirect_stream(buffer.clone());
    Capture {
        buffer,
        _stream: stream,
        _lock: lock,
    }
}

/// Full-match pattern of one rendered line
pub fn line_regex(tag: &str, message: &str) -> regex::Regex {
    let pattern = format!(
        r"\A{}:\s.+:\s.+:\n\s\s{}(:\s.+)?\n?\z",
        tag,
        regex::escape(message)
    );
    regex::Regex::new(&pattern).unwrap()
}
