use crate::models::Xyhw;
use serde::{Deserialize, Serialize};

/// The strip of screen reserved by dock windows.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DockArea {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl DockArea {
    /// A dock touching the top edge reserves the top, anything else is pinned to the bottom.
    #[must_use]
    pub const fn from_window_geometry(xyhw: &Xyhw, screen_height: i32) -> Self {
        let h = xyhw.h();
        let y = if xyhw.y() == 0 { 0 } else { screen_height - h };
        Self {
            x: xyhw.x(),
            y,
            w: xyhw.w(),
            h,
        }
    }

    #[must_use]
    pub const fn is_top(&self) -> bool {
        self.h > 0 && self.y == 0
    }

    /// Space taken away from the top of the tiling area.
    #[must_use]
    pub const fn top_offset(&self) -> i32 {
        if self.is_top() {
            self.h
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_dock_at_the_top_stays_there() {
        let area = DockArea::from_window_geometry(&Xyhw::new(0, 0, 1920, 24), 1080);
        assert!(area.is_top());
        assert_eq!(area.top_offset(), 24);
    }

    #[test]
    fn any_other_dock_is_pinned_to_the_bottom() {
        let area = DockArea::from_window_geometry(&Xyhw::new(0, 300, 1920, 30), 1080);
        assert_eq!(area.y, 1050);
        assert!(!area.is_top());
        assert_eq!(area.top_offset(), 0);
    }

    #[test]
    fn an_empty_area_reserves_nothing() {
        let area = DockArea::default();
        assert!(!area.is_top());
        assert_eq!(area.top_offset(), 0);
    }
}
