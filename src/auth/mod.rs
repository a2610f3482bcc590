//! Authentication
//!
//! Client-side half of the session: the password digest sent on the wire
//! and the bearer token held in local storage.

pub mod digest;
pub mod session;

pub use digest::password_digest;
