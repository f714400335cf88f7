//! Journal of game events, exportable as Markdown, text, or JSON.

pub mod entry;
pub mod log;

pub use entry::JournalEntry;
pub use log::Journal;
