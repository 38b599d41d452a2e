//! Notes domain module

mod content;
mod note;
pub mod search;

pub use content::NoteContent;
pub use note::{Note, NoteId};
