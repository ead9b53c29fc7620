//! `tracing` output for the browser.
//!
//! `pf-core` reports its state transitions through `tracing`. This installs a
//! `tracing_subscriber::fmt` subscriber whose writer hands every formatted
//! event to the console method matching its level.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

const DEFAULT_FILTER: &str = "debug";

/// Builds the subscriber used by the page. Timestamps are left out: the
/// console stamps lines itself and `SystemTime` is unavailable in wasm.
pub fn subscriber<W>(make_writer: W) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
        .with_writer(make_writer)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish()
}

pub fn init() {
    if tracing::subscriber::set_global_default(subscriber(ConsoleMakeWriter)).is_err() {
        gloo_console::warn!("portfolio: a tracing subscriber is already installed");
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one event and emits it as a single console line when dropped.
pub struct ConsoleWriter {
    level: Level,
    line: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            line: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.line.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.line);
        let line = text.trim_end().to_owned();
        if line.is_empty() {
            return;
        }
        if self.level == Level::ERROR {
            gloo_console::error!(line);
        } else if self.level == Level::WARN {
            gloo_console::warn!(line);
        } else if self.level == Level::INFO {
            gloo_console::info!(line);
        } else {
            gloo_console::debug!(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use pf_core::nav::NavTracker;
    use pf_core::{MemoryStore, theme::ThemeController};

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn dropped_nav_link_warning_is_written() {
        let captured = Captured::default();
        tracing::subscriber::with_default(subscriber(captured.clone()), || {
            let links = vec![
                ("#about".to_owned(), Some("About".to_owned())),
                ("#missing".to_owned(), None),
            ];
            NavTracker::resolve(links, |id| id == "about");
        });

        let output = captured.text();
        let warnings: Vec<&str> = output.lines().filter(|line| line.contains("WARN")).collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("#missing"));
    }

    #[test]
    fn debug_transitions_pass_the_filter() {
        let captured = Captured::default();
        tracing::subscriber::with_default(subscriber(captured.clone()), || {
            let store = MemoryStore::default();
            let mut theme = ThemeController::load(&store);
            theme.toggle(&store);
        });

        assert!(captured.text().contains("DEBUG"));
    }
}
