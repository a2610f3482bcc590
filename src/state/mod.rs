//! State Management
//!
//! Cross-screen signals and the per-screen lifetime guard.

pub mod global;
pub mod scope;

pub use global::{provide_global_state, GlobalState};
pub use scope::ScopeGuard;
