//! Grade notes submitted by students.

mod store;

pub use store::{Note, NoteStore};
