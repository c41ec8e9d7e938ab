//! Loading word lists from disk or any other source, in the foreground or on a
//! worker thread.
//!
//! A failed load never stops play: it is logged and the engine keeps running
//! with `Lexicon::Unavailable`.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use tracing::{info, instrument, warn};

use super::oracle::{Lexicon, WordList};

impl Lexicon {
    /// Read a newline-delimited word list.
    ///
    /// Any I/O failure degrades to `Unavailable`.
    #[instrument]
    pub fn load_file(path: &Path) -> Lexicon {
        Self::from_source(std::fs::read_to_string(path))
    }

    /// Parse the text a word-list source produced, degrading on failure.
    fn from_source(source: io::Result<String>) -> Lexicon {
        match source {
            Ok(text) => {
                let words = WordList::parse(&text);
                info!(count = words.len(), "lexicon loaded");
                Lexicon::ready(words)
            }
            Err(e) => {
                warn!(error = %e, "failed to load lexicon, continuing without validation");
                Lexicon::Unavailable
            }
        }
    }
}

/// A lexicon being loaded in the background.
///
/// Poll with `try_take` between intents; it never blocks.
///
/// ```no_run
/// use rust_peel::lexicon::PendingLexicon;
///
/// let mut pending = PendingLexicon::spawn("words.txt");
/// // ... keep playing ...
/// if let Some(lexicon) = pending.try_take() {
///     println!("lexicon ready: {}", lexicon.is_ready());
/// }
/// ```
#[derive(Debug)]
pub struct PendingLexicon {
    rx: Option<Receiver<Lexicon>>,
}

impl PendingLexicon {
    /// Start reading `path` on a worker thread.
    pub fn spawn(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::run(move || Lexicon::load_file(&path))
    }

    /// Start fetching a word list from any source on a worker thread.
    ///
    /// `source` returns the newline-delimited list, e.g. from an HTTP
    /// client. An `Err` degrades to `Unavailable` like a failed file load.
    ///
    /// ```
    /// use rust_peel::lexicon::{PendingLexicon, Validity};
    ///
    /// let pending = PendingLexicon::spawn_with(|| Ok("qi\nza\n".to_string()));
    /// assert_eq!(pending.wait().validity("QI"), Validity::Valid);
    /// ```
    pub fn spawn_with<F>(source: F) -> Self
    where
        F: FnOnce() -> io::Result<String> + Send + 'static,
    {
        Self::run(move || Lexicon::from_source(source()))
    }

    fn run<F>(load: F) -> Self
    where
        F: FnOnce() -> Lexicon + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // Receiver may be gone if the game was dropped first
            let _ = tx.send(load());
        });
        Self { rx: Some(rx) }
    }

    /// Whether the result has already been taken.
    #[must_use]
    pub fn is_taken(&self) -> bool {
        self.rx.is_none()
    }

    /// Take the finished lexicon, if the load has completed.
    ///
    /// Returns `Some` exactly once. A worker that died without reporting
    /// yields `Unavailable`.
    pub fn try_take(&mut self) -> Option<Lexicon> {
        let rx = self.rx.as_ref()?;
        let result = match rx.try_recv() {
            Ok(lexicon) => lexicon,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                warn!("lexicon loader exited without a result");
                Lexicon::Unavailable
            }
        };
        self.rx = None;
        Some(result)
    }

    /// Block until the load finishes. For tests and command-line tools.
    pub fn wait(mut self) -> Lexicon {
        self.rx
            .take()
            .and_then(|rx| rx.recv().ok())
            .unwrap_or(Lexicon::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Validity;
    use std::io::Write;

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cat\ndog\n  bird  ").unwrap();

        let lexicon = Lexicon::load_file(file.path());
        assert_eq!(lexicon.validity("BIRD"), Validity::Valid);
        assert_eq!(lexicon.validity("FISH"), Validity::Invalid);
    }

    #[test]
    fn test_missing_file_degrades() {
        let lexicon = Lexicon::load_file(Path::new("/definitely/not/a/word/list.txt"));
        assert!(!lexicon.is_ready());
        assert_eq!(lexicon.validity("CAT"), Validity::Unknown);
    }

    #[test]
    fn test_pending_wait() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "qi").unwrap();

        let pending = PendingLexicon::spawn(file.path());
        let lexicon = pending.wait();
        assert_eq!(lexicon.validity("QI"), Validity::Valid);
    }

    #[test]
    fn test_pending_try_take_once() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "za").unwrap();

        let mut pending = PendingLexicon::spawn(file.path());
        let lexicon = loop {
            if let Some(lexicon) = pending.try_take() {
                break lexicon;
            }
            thread::yield_now();
        };

        assert!(lexicon.is_ready());
        assert!(pending.is_taken());
        assert!(pending.try_take().is_none());
    }

    #[test]
    fn test_spawn_with_custom_source() {
        let mut pending = PendingLexicon::spawn_with(|| Ok("cat\n\n DOG \n".to_string()));
        let lexicon = loop {
            if let Some(lexicon) = pending.try_take() {
                break lexicon;
            }
            thread::yield_now();
        };

        assert_eq!(lexicon.validity("dog"), Validity::Valid);
        assert_eq!(lexicon.validity("COW"), Validity::Invalid);
    }

    #[test]
    fn test_spawn_with_failing_source() {
        let pending = PendingLexicon::spawn_with(|| {
            Err(io::Error::new(io::ErrorKind::ConnectionRefused, "offline"))
        });
        let lexicon = pending.wait();

        assert!(!lexicon.is_ready());
        assert_eq!(lexicon.validity("CAT"), Validity::Unknown);
    }
}
