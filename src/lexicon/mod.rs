//! Lexicon oracle: word membership supplied after startup.
//!
//! ## Key Types
//!
//! - `WordList`: Uppercase word set with case-insensitive lookup
//! - `Lexicon`: `Unavailable` until a `WordList` is installed, then `Ready`
//! - `Validity`: `Valid` / `Invalid` / `Unknown` annotation on a word
//! - `PendingLexicon`: Background load handle, polled without blocking

pub mod oracle;
pub mod loader;

pub use oracle::{Lexicon, Validity, WordList};
pub use loader::PendingLexicon;
