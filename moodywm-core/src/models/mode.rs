use std::fmt::Debug;

use crate::models::{WindowHandle, Xyhw};
use serde::{Deserialize, Serialize};

use super::window::Handle;

/// A pointer grab in progress.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Drag<H: Handle> {
    #[serde(bound = "")]
    pub handle: WindowHandle<H>,
    /// Root pointer position when the grab started.
    pub origin: (i32, i32),
    /// Inner geometry of the window when the grab started.
    pub start: Xyhw,
}

impl<H: Handle> Drag<H> {
    /// Geometry after moving the pointer to `(x, y)`.
    #[must_use]
    pub fn moved_to(&self, x: i32, y: i32) -> Xyhw {
        let (dx, dy) = (x - self.origin.0, y - self.origin.1);
        Xyhw::new(self.start.x() + dx, self.start.y() + dy, self.start.w(), self.start.h())
    }

    /// Geometry after resizing with the pointer at `(x, y)`. Never below 1x1.
    #[must_use]
    pub fn resized_to(&self, x: i32, y: i32) -> Xyhw {
        let (dx, dy) = (x - self.origin.0, y - self.origin.1);
        Xyhw::new(
            self.start.x(),
            self.start.y(),
            std::cmp::max(1, self.start.w() + dx),
            std::cmp::max(1, self.start.h() + dy),
        )
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode<H: Handle> {
    #[serde(bound = "")]
    ResizingWindow(Drag<H>),
    #[serde(bound = "")]
    MovingWindow(Drag<H>),
    #[default]
    Normal,
}

impl<H: Handle> Mode<H> {
    #[must_use]
    pub const fn drag(&self) -> Option<&Drag<H>> {
        match self {
            Self::ResizingWindow(drag) | Self::MovingWindow(drag) => Some(drag),
            Self::Normal => None,
        }
    }
}
