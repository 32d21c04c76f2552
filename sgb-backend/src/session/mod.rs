//! Login sessions: one current student and one current teacher per process.

mod gate;
mod store;
pub mod token;

pub use store::{ActiveSession, SessionStore};
