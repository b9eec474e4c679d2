use super::{Handle, WindowHandle, Xyhw};
use serde::{Deserialize, Serialize};

/// The screen windows are arranged on, and its root window.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Screen<H: Handle> {
    #[serde(bound = "")]
    pub root: WindowHandle<H>,
    pub bbox: BBox,
}

/// Screen Bounding Box
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl<H: Handle> Screen<H> {
    #[must_use]
    pub const fn new(root: WindowHandle<H>, bbox: BBox) -> Self {
        Self { root, bbox }
    }
}

impl From<BBox> for Xyhw {
    fn from(bbox: BBox) -> Self {
        Xyhw::new(bbox.x, bbox.y, bbox.width, bbox.height)
    }
}
