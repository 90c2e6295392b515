//! Text watcher state machine.
//!
//! The watcher tracks whether the content is empty and guards against
//! re-entrant notification. It is installed on a field at most once, the first
//! time a feature needs it.

use crate::field::prefix_chars;

/// Span of a single edit, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextEdit {
    /// Index where the edit starts
    pub start: usize,
    /// Characters removed at `start`
    pub removed: usize,
    /// Characters inserted at `start`
    pub inserted: usize,
}

impl TextEdit {
    /// An insertion of `inserted` characters at `start`.
    #[must_use]
    pub const fn insert(start: usize, inserted: usize) -> Self {
        Self {
            start,
            removed: 0,
            inserted,
        }
    }

    /// A removal of `removed` characters at `start`.
    #[must_use]
    pub const fn remove(start: usize, removed: usize) -> Self {
        Self {
            start,
            removed,
            inserted: 0,
        }
    }

    /// Replacement of a whole `old_len`-character content by `new_len` characters.
    #[must_use]
    pub const fn replace_all(old_len: usize, new_len: usize) -> Self {
        Self {
            start: 0,
            removed: old_len,
            inserted: new_len,
        }
    }
}

/// Emptiness of the watched content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emptiness {
    /// No characters
    Empty,
    /// At least one character
    NonEmpty,
}

impl Emptiness {
    /// Classify `content`.
    #[must_use]
    pub fn of(content: &str) -> Self {
        if content.is_empty() {
            Self::Empty
        } else {
            Self::NonEmpty
        }
    }

    /// Whether this is [`Emptiness::Empty`].
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Per-field watcher state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextWatcher {
    state: Emptiness,
    dispatching: bool,
    limit_reached: bool,
}

impl TextWatcher {
    /// Start watching content that currently reads `initial`.
    #[must_use]
    pub fn new(initial: &str) -> Self {
        Self {
            state: Emptiness::of(initial),
            dispatching: false,
            limit_reached: false,
        }
    }

    /// Current emptiness state.
    #[must_use]
    pub const fn state(&self) -> Emptiness {
        self.state
    }

    /// Record new content; returns the new state only on a transition.
    pub fn observe(&mut self, content: &str) -> Option<Emptiness> {
        let next = Emptiness::of(content);
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }

    /// Record that the length limit was exceeded.
    ///
    /// Returns `true` only the first time since the content last dropped
    /// below the limit.
    pub fn reach_limit(&mut self) -> bool {
        !std::mem::replace(&mut self.limit_reached, true)
    }

    /// Re-arm the limit notification.
    pub fn release_limit(&mut self) {
        self.limit_reached = false;
    }

    /// Enter a notification pass. Returns `false` if one is already running.
    pub fn enter(&mut self) -> bool {
        if self.dispatching {
            return false;
        }
        self.dispatching = true;
        true
    }

    /// Leave the notification pass.
    pub fn leave(&mut self) {
        self.dispatching = false;
    }

    /// Whether a notification pass is running.
    #[must_use]
    pub const fn is_dispatching(&self) -> bool {
        self.dispatching
    }
}

/// The first `max` characters of `content` if it is longer than `max`.
///
/// A `max` of zero means unlimited.
#[must_use]
pub fn truncate_to(content: &str, max: usize) -> Option<&str> {
    if max == 0 || content.chars().count() <= max {
        return None;
    }
    Some(prefix_chars(content, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_watcher_initial_state() {
        assert_eq!(TextWatcher::new("").state(), Emptiness::Empty);
        assert_eq!(TextWatcher::new("x").state(), Emptiness::NonEmpty);
    }

    #[test]
    fn test_watcher_transitions_once() {
        let mut watcher = TextWatcher::new("");
        assert_eq!(watcher.observe("a"), Some(Emptiness::NonEmpty));
        assert_eq!(watcher.observe("ab"), None);
        assert_eq!(watcher.observe("a"), None);
        assert_eq!(watcher.observe(""), Some(Emptiness::Empty));
        assert_eq!(watcher.observe(""), None);
    }

    #[test]
    fn test_watcher_reentrancy_guard() {
        let mut watcher = TextWatcher::new("");
        assert!(watcher.enter());
        assert!(watcher.is_dispatching());
        assert!(!watcher.enter());
        watcher.leave();
        assert!(!watcher.is_dispatching());
        assert!(watcher.enter());
    }

    #[test]
    fn test_watcher_limit_latch() {
        let mut watcher = TextWatcher::new("hello");
        assert!(watcher.reach_limit());
        assert!(!watcher.reach_limit());
        watcher.release_limit();
        assert!(watcher.reach_limit());
    }

    #[test]
    fn test_truncate_to() {
        assert_eq!(truncate_to("hello world", 5), Some("hello"));
        assert_eq!(truncate_to("hello", 5), None);
        assert_eq!(truncate_to("hello", 0), None);
        assert_eq!(truncate_to("ñandú!", 5), Some("ñandú"));
    }

    #[test]
    fn test_text_edit_constructors() {
        assert_eq!(
            TextEdit::insert(2, 1),
            TextEdit {
                start: 2,
                removed: 0,
                inserted: 1
            }
        );
        assert_eq!(TextEdit::remove(1, 1).removed, 1);
        assert_eq!(TextEdit::replace_all(7, 0).start, 0);
    }

    proptest! {
        #[test]
        fn prop_truncate_keeps_prefix(s in "\\PC{0,40}", max in 1usize..20) {
            match truncate_to(&s, max) {
                Some(t) => {
                    prop_assert_eq!(t.chars().count(), max);
                    prop_assert!(s.starts_with(t));
                }
                None => prop_assert!(s.chars().count() <= max),
            }
        }

        #[test]
        fn prop_observe_reports_only_transitions(contents in proptest::collection::vec("[a-c]{0,2}", 1..30)) {
            let mut watcher = TextWatcher::new("");
            let mut previous = Emptiness::Empty;
            for content in &contents {
                let now = Emptiness::of(content);
                let reported = watcher.observe(content);
                if now == previous {
                    prop_assert_eq!(reported, None);
                } else {
                    prop_assert_eq!(reported, Some(now));
                }
                previous = now;
            }
        }
    }
}
