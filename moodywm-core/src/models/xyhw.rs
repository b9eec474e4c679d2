//! Window and screen sizing structs.
#![allow(clippy::module_name_repetitions)]
use serde::{Deserialize, Serialize};
use std::cmp;

/// Struct containing a window placement and size. x,y from top left.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Copy)]
pub struct Xyhw {
    x: i32,
    y: i32,
    h: i32,
    w: i32,
}

impl Xyhw {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, h, w }
    }
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }
    #[must_use]
    pub const fn h(&self) -> i32 {
        self.h
    }
    #[must_use]
    pub const fn w(&self) -> i32 {
        self.w
    }

    pub fn set_x(&mut self, value: i32) {
        self.x = value;
    }
    pub fn set_y(&mut self, value: i32) {
        self.y = value;
    }
    pub fn set_h(&mut self, value: i32) {
        self.h = value;
    }
    pub fn set_w(&mut self, value: i32) {
        self.w = value;
    }

    /// Returns a copy shrunk to fit inside `container` and centered in it.
    #[must_use]
    pub fn centered_in(&self, container: &Self) -> Self {
        let w = cmp::min(self.w, container.w);
        let h = cmp::min(self.h, container.h);
        Self {
            x: container.x + (container.w - w) / 2,
            y: container.y + (container.h - h) / 2,
            w,
            h,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centering_a_small_box_keeps_its_size() {
        let screen = Xyhw::new(0, 0, 1000, 800);
        let window = Xyhw::new(5, 5, 400, 200);
        assert_eq!(window.centered_in(&screen), Xyhw::new(300, 300, 400, 200));
    }

    #[test]
    fn centering_an_oversized_box_clamps_it_to_the_container() {
        let screen = Xyhw::new(0, 0, 1000, 800);
        let window = Xyhw::new(0, 0, 1200, 900);
        assert_eq!(window.centered_in(&screen), screen);
    }
}
