//! Geometry of tiled windows.
pub mod main_and_vert_stack;

use crate::models::{DockArea, Xyhw};
use serde::{Deserialize, Serialize};

/// Which side of the screen holds the main window.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Left,
    Right,
}

/// Knobs of the main and stack layout.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub inner_gap: i32,
    pub outer_gap: i32,
    /// Share of the usable width given to the main window.
    pub main_fraction: f32,
    pub main_side: Side,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            inner_gap: 10,
            outer_gap: 10,
            main_fraction: 0.6,
            main_side: Side::Left,
        }
    }
}

/// The part of `screen` left for tiling once outer gaps and the dock are taken out.
#[must_use]
pub fn tiling_area(screen: &Xyhw, dock: &DockArea, outer_gap: i32) -> Xyhw {
    Xyhw::new(
        screen.x() + outer_gap,
        screen.y() + outer_gap + dock.top_offset(),
        screen.w() - (outer_gap * 2),
        screen.h() - (outer_gap * 2) - dock.h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_tiling_area_leaves_room_for_a_top_dock() {
        let dock = DockArea::from_window_geometry(&Xyhw::new(0, 0, 1000, 30), 800);
        let area = tiling_area(&Xyhw::new(0, 0, 1000, 800), &dock, 10);
        assert_eq!(area, Xyhw::new(10, 40, 980, 750));
    }

    #[test]
    fn the_tiling_area_leaves_room_for_a_bottom_dock() {
        let dock = DockArea::from_window_geometry(&Xyhw::new(0, 770, 1000, 30), 800);
        let area = tiling_area(&Xyhw::new(0, 0, 1000, 800), &dock, 10);
        assert_eq!(area, Xyhw::new(10, 10, 980, 750));
    }
}
