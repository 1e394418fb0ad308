//! Browser console sink for `tracing`.
//!
//! The library crates log through `tracing`; this installs a `fmt` subscriber
//! whose writer forwards each formatted event to the matching
//! `console.*` method, so their events show up in the browser too.

use std::io::{self, Write};
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Error,
    Warn,
    Info,
    Debug,
}

pub fn console_level(level: &Level) -> ConsoleLevel {
    match *level {
        Level::ERROR => ConsoleLevel::Error,
        Level::WARN => ConsoleLevel::Warn,
        Level::INFO => ConsoleLevel::Info,
        _ => ConsoleLevel::Debug,
    }
}

/// Buffers one formatted event and emits it on drop.
pub struct ConsoleWriter {
    level: ConsoleLevel,
    buf: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf).trim_end().to_owned();
        match self.level {
            ConsoleLevel::Error => gloo_console::error!(line),
            ConsoleLevel::Warn => gloo_console::warn!(line),
            ConsoleLevel::Info => gloo_console::info!(line),
            ConsoleLevel::Debug => gloo_console::debug!(line),
        }
    }
}

pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> ConsoleWriter {
        ConsoleWriter {
            level: ConsoleLevel::Info,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> ConsoleWriter {
        ConsoleWriter {
            level: console_level(meta.level()),
            buf: Vec::new(),
        }
    }
}

/// Install the console subscriber. Safe to call more than once.
pub fn init() {
    let max_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_max_level(max_level)
        .try_init();
}
