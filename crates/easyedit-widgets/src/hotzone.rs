//! Trailing-edge touch region.
//!
//! Releases inside the last [`HOTZONE_WIDTH`] units of a field act on the
//! trailing icon instead of placing the cursor. The width is fixed, not
//! scaled by display density.

use easyedit_core::{Point, Rect};

/// Width of the hotzone in layout units.
pub const HOTZONE_WIDTH: f32 = 100.0;

/// What a release inside the hotzone does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotzoneAction {
    /// Clear all content
    Clear,
    /// Flip password visibility
    ToggleVisibility,
}

/// The hotzone of a field with `bounds`: the bounds with the left edge moved
/// to `right - HOTZONE_WIDTH`.
#[must_use]
pub fn hotzone(bounds: Rect) -> Rect {
    bounds.with_left(bounds.right() - HOTZONE_WIDTH)
}

/// Check if a release at `point` lands in the hotzone of `bounds`.
#[must_use]
pub fn hit(bounds: Rect, point: &Point) -> bool {
    hotzone(bounds).contains_point(point)
}

/// Action for the active mode. The clear button is checked first.
#[must_use]
pub const fn resolve(clear_button: bool, toggle_active: bool) -> Option<HotzoneAction> {
    if clear_button {
        Some(HotzoneAction::Clear)
    } else if toggle_active {
        Some(HotzoneAction::ToggleVisibility)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotzone_fixed_width() {
        let zone = hotzone(Rect::new(10.0, 5.0, 400.0, 48.0));
        assert_eq!(zone, Rect::new(310.0, 5.0, 100.0, 48.0));
    }

    #[test]
    fn test_hit_inside_and_outside() {
        let bounds = Rect::new(0.0, 0.0, 300.0, 48.0);
        assert!(hit(bounds, &Point::new(250.0, 24.0)));
        assert!(hit(bounds, &Point::new(200.0, 0.0)));
        assert!(hit(bounds, &Point::new(299.9, 47.9)));
        assert!(!hit(bounds, &Point::new(300.0, 24.0)));
        assert!(!hit(bounds, &Point::new(250.0, 48.0)));
        assert!(!hit(bounds, &Point::new(199.0, 24.0)));
        assert!(!hit(bounds, &Point::new(250.0, 49.0)));
    }

    #[test]
    fn test_hotzone_wider_than_field() {
        let bounds = Rect::new(50.0, 0.0, 60.0, 30.0);
        assert!(hit(bounds, &Point::new(55.0, 10.0)));
        // the zone extends past the field's left edge
        assert!(hit(bounds, &Point::new(20.0, 10.0)));
    }

    #[test]
    fn test_resolve_clear_wins() {
        assert_eq!(resolve(true, true), Some(HotzoneAction::Clear));
        assert_eq!(resolve(true, false), Some(HotzoneAction::Clear));
        assert_eq!(resolve(false, true), Some(HotzoneAction::ToggleVisibility));
        assert_eq!(resolve(false, false), None);
    }
}
