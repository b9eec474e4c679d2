use crate::models::Xyhw;
use serde::{Deserialize, Serialize};

/// A partial geometry. Fields left as `None` were not part of the request.
#[derive(Default, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy)]
pub struct XyhwChange {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub h: Option<i32>,
    pub w: Option<i32>,
}

impl From<Xyhw> for XyhwChange {
    fn from(xywh: Xyhw) -> Self {
        Self {
            x: Some(xywh.x()),
            y: Some(xywh.y()),
            w: Some(xywh.w()),
            h: Some(xywh.h()),
        }
    }
}

impl XyhwChange {
    /// Writes every requested field into `xyhw`, returning whether anything changed.
    pub fn update(&self, xyhw: &mut Xyhw) -> bool {
        let mut changed = false;
        if let Some(x) = self.x {
            if xyhw.x() != x {
                xyhw.set_x(x);
                changed = true;
            }
        }
        if let Some(y) = self.y {
            if xyhw.y() != y {
                xyhw.set_y(y);
                changed = true;
            }
        }
        if let Some(w) = self.w {
            if xyhw.w() != w {
                xyhw.set_w(w);
                changed = true;
            }
        }
        if let Some(h) = self.h {
            if xyhw.h() != h {
                xyhw.set_h(h);
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_requested_fields_are_written() {
        let mut xyhw = Xyhw::new(1, 2, 3, 4);
        let change = XyhwChange {
            w: Some(30),
            ..XyhwChange::default()
        };
        assert!(change.update(&mut xyhw));
        assert_eq!(xyhw, Xyhw::new(1, 2, 30, 4));
    }

    #[test]
    fn an_identical_request_reports_no_change() {
        let mut xyhw = Xyhw::new(1, 2, 3, 4);
        let change: XyhwChange = xyhw.into();
        assert!(!change.update(&mut xyhw));
    }
}
