//! Widget lifecycle phases.
//!
//! A host calls [`Widget::lifecycle`](crate::Widget::lifecycle) when a widget
//! is placed on a screen and again when it leaves it. Widgets holding
//! host-supplied callbacks drop them on [`LifecyclePhase::Detached`] so the
//! host is not kept alive by its own widgets.

use serde::{Deserialize, Serialize};

/// Lifecycle phase for widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecyclePhase {
    /// Widget was attached to a screen.
    Attached,
    /// Widget was removed from its screen.
    Detached,
}

impl LifecyclePhase {
    /// Whether the widget is on screen after this phase.
    #[must_use]
    pub const fn is_attached(self) -> bool {
        matches!(self, Self::Attached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_attached() {
        assert!(LifecyclePhase::Attached.is_attached());
        assert!(!LifecyclePhase::Detached.is_attached());
    }
}
