//! Screen Lifetime Guard
//!
//! A response can arrive after the user has navigated away from the screen
//! that requested it. Each screen owns one guard; async continuations
//! re-check it before writing to signals, so late results are dropped
//! instead of updating a discarded view.

use std::cell::Cell;
use std::rc::Rc;

use leptos::on_cleanup;

#[derive(Clone)]
pub struct ScopeGuard {
    active: Rc<Cell<bool>>,
}

impl ScopeGuard {
    /// Create a guard tied to the current component scope; it flips
    /// inactive when the scope is cleaned up.
    pub fn new() -> Self {
        let guard = Self {
            active: Rc::new(Cell::new(true)),
        };
        let active = Rc::clone(&guard.active);
        on_cleanup(move || active.set(false));
        guard
    }

    pub fn active(&self) -> bool {
        self.active.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let guard = ScopeGuard {
            active: Rc::new(Cell::new(true)),
        };
        let held_by_async_block = guard.clone();
        assert!(held_by_async_block.active());

        // What on_cleanup does when the screen unmounts
        guard.active.set(false);
        assert!(!held_by_async_block.active());
    }
}
