use lasso::{Spur, ThreadedRodeo};
use std::sync::OnceLock;

static WORDS: OnceLock<ThreadedRodeo> = OnceLock::new();

fn words() -> &'static ThreadedRodeo {
    WORDS.get_or_init(ThreadedRodeo::new)
}

/// Handle to a name fragment stored in the process-wide word table.
///
/// Names are built from a small vocabulary that repeats across a whole
/// distribution, so fragments are stored once and names hold handles.
pub type Word = Spur;

/// Stores `word` in the word table and returns its handle.
pub fn intern(word: &str) -> Word {
    words().get_or_intern(word)
}

/// Looks up the text behind a handle.
pub fn resolve(word: Word) -> &'static str {
    words().resolve(&word)
}
