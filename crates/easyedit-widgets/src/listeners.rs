//! Single-slot listener storage.

use crate::watcher::TextEdit;

/// Called with the old content and the edit about to be applied.
pub type BeforeChangeListener = Box<dyn FnMut(&str, &TextEdit) + Send + Sync>;
/// Called with the new content.
pub type TextChangedListener = Box<dyn FnMut(&str) + Send + Sync>;
/// Called with the limit and the alert text.
pub type MaxExceededListener = Box<dyn FnMut(usize, &str) + Send + Sync>;
/// Called with the new emptiness on a transition.
pub type EmptyChangedListener = Box<dyn FnMut(bool) + Send + Sync>;
/// Called with the final content and its character count.
pub type ContentChangedListener = Box<dyn FnMut(&str, usize) + Send + Sync>;

/// Listener slots of one field. Registering a listener replaces the previous one.
#[derive(Default)]
pub struct Listeners {
    pub(crate) before_change: Option<BeforeChangeListener>,
    pub(crate) text_changed: Option<TextChangedListener>,
    pub(crate) max_exceeded: Option<MaxExceededListener>,
    pub(crate) empty_changed: Option<EmptyChangedListener>,
    pub(crate) content_changed: Option<ContentChangedListener>,
}

impl Listeners {
    /// Number of occupied slots.
    #[must_use]
    pub fn registered(&self) -> usize {
        [
            self.before_change.is_some(),
            self.text_changed.is_some(),
            self.max_exceeded.is_some(),
            self.empty_changed.is_some(),
            self.content_changed.is_some(),
        ]
        .into_iter()
        .filter(|&set| set)
        .count()
    }

    /// Drop every listener.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("before_change", &self.before_change.is_some())
            .field("text_changed", &self.text_changed.is_some())
            .field("max_exceeded", &self.max_exceeded.is_some())
            .field("empty_changed", &self.empty_changed.is_some())
            .field("content_changed", &self.content_changed.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listeners_default_empty() {
        assert_eq!(Listeners::default().registered(), 0);
    }

    #[test]
    fn test_listeners_clear() {
        let mut listeners = Listeners {
            text_changed: Some(Box::new(|_| {})),
            empty_changed: Some(Box::new(|_| {})),
            ..Listeners::default()
        };
        assert_eq!(listeners.registered(), 2);
        listeners.clear();
        assert_eq!(listeners.registered(), 0);
    }

    #[test]
    fn test_listeners_debug_hides_closures() {
        let listeners = Listeners {
            max_exceeded: Some(Box::new(|_, _| {})),
            ..Listeners::default()
        };
        let debug = format!("{listeners:?}");
        assert!(debug.contains("max_exceeded: true"));
        assert!(debug.contains("text_changed: false"));
    }
}
