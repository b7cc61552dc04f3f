//! Command handlers
//!
//! Each stage of a run lives in its own module: opening the session and
//! translating, playing pronunciations, adding words to the dictionary, and
//! printing shell completions.

mod add;
mod completions;
mod sound;
mod translate;

pub use add::handle_add;
pub use completions::handle_completions;
pub use sound::handle_sound;
pub use translate::{failure_count, handle_translate, open_session};
