mod identity;
mod reference;

pub use identity::{Identity, Role};
pub use reference::{Course, Student, Teacher};
