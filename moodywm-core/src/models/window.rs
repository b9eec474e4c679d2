//! Window Information
#![allow(clippy::module_name_repetitions)]

use std::fmt::Debug;

use super::{WindowKind, WindowType};
use crate::models::Xyhw;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A trait which backend specific window handles need to implement
pub trait Handle:
    Serialize + DeserializeOwned + Debug + Clone + Copy + PartialEq + Eq + Default + Send + 'static
{
}

/// A Backend-agnostic handle to a window used to identify it
///
/// # Serde
///
/// Using generics here with serde derive macros causes some wierd behaviour with the compiler, so
/// as suggested by [this `serde` issue][serde-issue], just adding `#[serde(bound = "")]`
/// everywhere the generic is declared fixes the bug.
///
/// [serde-issue]: https://github.com/serde-rs/serde/issues/1296
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;

/// Handle for testing purposes
pub type MockHandle = i32;
impl Handle for MockHandle {}

/// Store Window information.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Window<H: Handle> {
    #[serde(bound = "")]
    pub handle: WindowHandle<H>,
    #[serde(bound = "")]
    pub transient: Option<WindowHandle<H>>,
    pub name: Option<String>,
    pub r#type: WindowType,
    kind: WindowKind,
    pub border: i32,
    /// Outer box of the window, borders included.
    pub normal: Xyhw,
    /// Geometry the client asked for before being managed.
    pub requested: Option<Xyhw>,
    fullscreen: Option<Xyhw>,
}

impl<H: Handle> Window<H> {
    #[must_use]
    pub fn new(h: WindowHandle<H>, name: Option<String>) -> Self {
        Self {
            handle: h,
            transient: None,
            name,
            r#type: WindowType::Normal,
            kind: WindowKind::Tiled,
            border: 0,
            normal: Xyhw::default(),
            requested: None,
            fullscreen: None,
        }
    }

    /// Decides how this window is managed from its type hint and transient parent.
    pub fn classify(&mut self) -> WindowKind {
        self.kind = WindowKind::classify(&self.r#type, self.transient.is_some());
        self.kind
    }

    #[must_use]
    pub const fn kind(&self) -> WindowKind {
        self.kind
    }

    #[must_use]
    pub fn is_floating(&self) -> bool {
        self.kind == WindowKind::Floating
    }

    #[must_use]
    pub fn is_dock(&self) -> bool {
        self.kind == WindowKind::Dock
    }

    #[must_use]
    pub fn is_tiled(&self) -> bool {
        self.kind == WindowKind::Tiled
    }

    #[must_use]
    pub const fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_some()
    }

    /// Covers `screen` while set. The cached layout geometry is kept untouched.
    pub fn set_fullscreen(&mut self, screen: Option<Xyhw>) {
        self.fullscreen = screen;
    }

    #[must_use]
    pub fn border(&self) -> i32 {
        if self.is_fullscreen() {
            0
        } else {
            self.border
        }
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        match self.fullscreen {
            Some(screen) => screen.x(),
            None => self.normal.x(),
        }
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        match self.fullscreen {
            Some(screen) => screen.y(),
            None => self.normal.y(),
        }
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        match self.fullscreen {
            Some(screen) => screen.w(),
            None => std::cmp::max(1, self.normal.w() - (self.border * 2)),
        }
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        match self.fullscreen {
            Some(screen) => screen.h(),
            None => std::cmp::max(1, self.normal.h() - (self.border * 2)),
        }
    }

    /// The geometry handed to the display server, borders excluded.
    #[must_use]
    pub fn calculated_xyhw(&self) -> Xyhw {
        Xyhw::new(self.x(), self.y(), self.width(), self.height())
    }

    /// Sets the cached outer box from an inner geometry.
    pub fn set_inner_xyhw(&mut self, inner: Xyhw) {
        self.normal = Xyhw::new(
            inner.x(),
            inner.y(),
            inner.w() + (self.border * 2),
            inner.h() + (self.border * 2),
        );
    }

    /// Places a floating window in the middle of `screen`, using its requested size when it has
    /// one and the given default otherwise.
    pub fn center_on(&mut self, screen: &Xyhw, default_width: i32, default_height: i32) {
        let (w, h) = match self.requested {
            Some(requested) if requested.w() > 0 && requested.h() > 0 => {
                (requested.w(), requested.h())
            }
            _ => (default_width, default_height),
        };
        let outer = Xyhw::new(0, 0, w + (self.border * 2), h + (self.border * 2));
        self.normal = outer.centered_in(screen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_size_excludes_the_border() {
        let mut subject = Window::new(WindowHandle::<MockHandle>(1), None);
        subject.border = 2;
        subject.normal = Xyhw::new(10, 10, 100, 50);
        assert_eq!(subject.calculated_xyhw(), Xyhw::new(10, 10, 96, 46));
    }

    #[test]
    fn inner_size_never_drops_below_one_pixel() {
        let mut subject = Window::new(WindowHandle::<MockHandle>(1), None);
        subject.border = 5;
        subject.normal = Xyhw::new(0, 0, 4, 4);
        assert_eq!(subject.width(), 1);
        assert_eq!(subject.height(), 1);
    }

    #[test]
    fn fullscreen_windows_cover_the_screen_without_a_border() {
        let mut subject = Window::new(WindowHandle::<MockHandle>(1), None);
        subject.border = 2;
        subject.normal = Xyhw::new(10, 10, 100, 50);
        subject.set_fullscreen(Some(Xyhw::new(0, 0, 1920, 1080)));
        assert_eq!(subject.border(), 0);
        assert_eq!(subject.calculated_xyhw(), Xyhw::new(0, 0, 1920, 1080));
        subject.set_fullscreen(None);
        assert_eq!(subject.calculated_xyhw(), Xyhw::new(10, 10, 96, 46));
    }

    #[test]
    fn floating_windows_are_centered_with_their_requested_size() {
        let mut subject = Window::new(WindowHandle::<MockHandle>(1), None);
        subject.border = 1;
        subject.requested = Some(Xyhw::new(0, 0, 398, 198));
        subject.center_on(&Xyhw::new(0, 0, 1000, 800), 800, 800);
        assert_eq!(subject.normal, Xyhw::new(300, 300, 400, 200));
    }

    #[test]
    fn floating_windows_without_a_size_use_the_default() {
        let mut subject = Window::new(WindowHandle::<MockHandle>(1), None);
        subject.center_on(&Xyhw::new(0, 0, 1000, 600), 800, 800);
        assert_eq!(subject.normal, Xyhw::new(100, 0, 800, 600));
    }
}
