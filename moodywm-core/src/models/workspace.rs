use crate::layouts::{main_and_vert_stack, LayoutParams};
use crate::models::{Handle, Window, WindowHandle, WorkspaceId, Xyhw};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered set of windows shown together. List order is stack order.
#[derive(Serialize, Deserialize, Clone)]
pub struct Workspace<H: Handle> {
    pub id: WorkspaceId,
    pub name: String,
    #[serde(bound = "")]
    windows: Vec<Window<H>>,
    #[serde(bound = "")]
    master: Option<WindowHandle<H>>,
}

impl<H: Handle> fmt::Debug for Workspace<H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Workspace {{ id: {}, name: {}, windows: {}, master: {:?} }}",
            self.id,
            self.name,
            self.windows.len(),
            self.master
        )
    }
}

impl<H: Handle> Workspace<H> {
    #[must_use]
    pub fn new(id: WorkspaceId, name: String) -> Self {
        Self {
            id,
            name,
            windows: vec![],
            master: None,
        }
    }

    #[must_use]
    pub fn windows(&self) -> &[Window<H>] {
        &self.windows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    #[must_use]
    pub const fn master(&self) -> Option<WindowHandle<H>> {
        self.master
    }

    #[must_use]
    pub fn contains(&self, handle: &WindowHandle<H>) -> bool {
        self.windows.iter().any(|w| &w.handle == handle)
    }

    #[must_use]
    pub fn index_of(&self, handle: &WindowHandle<H>) -> Option<usize> {
        self.windows.iter().position(|w| &w.handle == handle)
    }

    #[must_use]
    pub fn find(&self, handle: &WindowHandle<H>) -> Option<&Window<H>> {
        self.windows.iter().find(|w| &w.handle == handle)
    }

    pub fn find_mut(&mut self, handle: &WindowHandle<H>) -> Option<&mut Window<H>> {
        self.windows.iter_mut().find(|w| &w.handle == handle)
    }

    #[must_use]
    pub fn handles(&self) -> Vec<WindowHandle<H>> {
        self.windows.iter().map(|w| w.handle).collect()
    }

    /// Appends a window. The first window of an empty workspace becomes its master, and the
    /// first tiled window takes over from a master that does not tile.
    pub(crate) fn push(&mut self, window: Window<H>) {
        let promote = match self.master.and_then(|m| self.find(&m)) {
            None => true,
            Some(master) => !master.is_tiled() && window.is_tiled(),
        };
        if promote {
            self.master = Some(window.handle);
        }
        self.windows.push(window);
    }

    /// Removes a window keeping the order of the others. A removed master is replaced by the
    /// first remaining tiled window, or the first remaining window when none tiles.
    pub(crate) fn remove(&mut self, handle: &WindowHandle<H>) -> Option<Window<H>> {
        let index = self.index_of(handle)?;
        let window = self.windows.remove(index);
        if self.master.as_ref() == Some(handle) {
            self.master = self
                .windows
                .iter()
                .find(|w| w.is_tiled())
                .or_else(|| self.windows.first())
                .map(|w| w.handle);
        }
        Some(window)
    }

    /// Exchanges the list slots of `handle` and the master, making `handle` the master.
    /// Returns false when nothing changed.
    pub fn swap_with_master(&mut self, handle: &WindowHandle<H>) -> bool {
        if self.windows.len() < 2 || self.master.as_ref() == Some(handle) {
            return false;
        }
        let Some(index) = self.index_of(handle) else {
            return false;
        };
        if let Some(master_index) = self.master.and_then(|m| self.index_of(&m)) {
            self.windows.swap(index, master_index);
        }
        self.master = Some(*handle);
        true
    }

    /// Runs the tiling engine over the tiled windows of this workspace and caches the result.
    /// Returns the handles whose geometry changed.
    pub fn arrange(&mut self, area: &Xyhw, params: &LayoutParams) -> Vec<WindowHandle<H>> {
        let tiled: Vec<WindowHandle<H>> = self
            .windows
            .iter()
            .filter(|w| w.is_tiled())
            .map(|w| w.handle)
            .collect();
        // A stale master lays out the first window as main for this pass only.
        let main = self
            .master
            .and_then(|m| tiled.iter().position(|h| h == &m))
            .unwrap_or_default();
        let boxes = main_and_vert_stack::arrange(tiled.len(), main, area, params);

        let mut changed = vec![];
        for (window, xyhw) in self.windows.iter_mut().filter(|w| w.is_tiled()).zip(boxes) {
            if window.normal != xyhw {
                window.normal = xyhw;
                changed.push(window.handle);
            }
        }
        changed
    }

    /// Raise order, bottom first: tiled windows in list order, floating windows, then any
    /// fullscreen window.
    #[must_use]
    pub fn raise_order(&self) -> Vec<WindowHandle<H>> {
        let tiled = self
            .windows
            .iter()
            .filter(|w| w.is_tiled() && !w.is_fullscreen());
        let floating = self
            .windows
            .iter()
            .filter(|w| w.is_floating() && !w.is_fullscreen());
        let fullscreen = self.windows.iter().filter(|w| w.is_fullscreen());
        tiled.chain(floating).chain(fullscreen).map(|w| w.handle).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::Side;
    use crate::models::{MockHandle, WindowType};

    fn window(handle: MockHandle) -> Window<MockHandle> {
        let mut window = Window::new(WindowHandle(handle), None);
        window.classify();
        window
    }

    fn floating(handle: MockHandle) -> Window<MockHandle> {
        let mut window = Window::new(WindowHandle(handle), None);
        window.r#type = WindowType::Dialog;
        window.classify();
        window
    }

    fn params() -> LayoutParams {
        LayoutParams {
            inner_gap: 0,
            outer_gap: 0,
            main_fraction: 0.5,
            main_side: Side::Left,
        }
    }

    #[test]
    fn the_first_window_becomes_master() {
        let mut subject = Workspace::new(0, "1".to_owned());
        subject.push(window(1));
        subject.push(window(2));
        assert_eq!(subject.master(), Some(WindowHandle(1)));
    }

    #[test]
    fn removing_the_master_promotes_the_first_remaining_window() {
        let mut subject = Workspace::new(0, "1".to_owned());
        subject.push(window(1));
        subject.push(window(2));
        subject.push(window(3));
        assert!(subject.remove(&WindowHandle(1)).is_some());
        assert_eq!(subject.master(), Some(WindowHandle(2)));
        assert_eq!(subject.handles(), vec![WindowHandle(2), WindowHandle(3)]);
        subject.remove(&WindowHandle(2));
        subject.remove(&WindowHandle(3));
        assert_eq!(subject.master(), None);
    }

    #[test]
    fn a_floating_master_hands_over_to_the_first_tiled_window() {
        let mut subject = Workspace::new(0, "1".to_owned());
        subject.push(floating(1));
        assert_eq!(subject.master(), Some(WindowHandle(1)));
        subject.push(window(2));
        subject.push(window(3));
        assert_eq!(subject.master(), Some(WindowHandle(2)));
        subject.push(floating(4));
        assert_eq!(subject.master(), Some(WindowHandle(2)));
    }

    #[test]
    fn removing_the_master_prefers_a_tiled_successor() {
        let mut subject = Workspace::new(0, "1".to_owned());
        subject.push(window(1));
        subject.push(floating(2));
        subject.push(window(3));
        subject.remove(&WindowHandle(1));
        assert_eq!(subject.master(), Some(WindowHandle(3)));
        subject.remove(&WindowHandle(3));
        assert_eq!(subject.master(), Some(WindowHandle(2)));
    }

    #[test]
    fn removing_an_unknown_window_is_a_noop() {
        let mut subject = Workspace::new(0, "1".to_owned());
        subject.push(window(1));
        assert!(subject.remove(&WindowHandle(9)).is_none());
        assert_eq!(subject.len(), 1);
    }

    #[test]
    fn swapping_exchanges_slots_with_the_master() {
        let mut subject = Workspace::new(0, "1".to_owned());
        subject.push(window(1));
        subject.push(window(2));
        subject.push(window(3));
        assert!(subject.swap_with_master(&WindowHandle(3)));
        assert_eq!(subject.master(), Some(WindowHandle(3)));
        assert_eq!(
            subject.handles(),
            vec![WindowHandle(3), WindowHandle(2), WindowHandle(1)]
        );
        assert!(!subject.swap_with_master(&WindowHandle(3)));
    }

    #[test]
    fn arranging_skips_floating_windows() {
        let mut subject = Workspace::new(0, "1".to_owned());
        subject.push(window(1));
        subject.push(floating(2));
        let changed = subject.arrange(&Xyhw::new(0, 0, 100, 100), &params());
        assert_eq!(changed, vec![WindowHandle(1)]);
        assert_eq!(subject.windows()[0].normal, Xyhw::new(0, 0, 100, 100));
        assert_eq!(subject.windows()[1].normal, Xyhw::default());
    }

    #[test]
    fn arranging_twice_reports_no_changes() {
        let mut subject = Workspace::new(0, "1".to_owned());
        subject.push(window(1));
        subject.push(window(2));
        let area = Xyhw::new(0, 0, 100, 100);
        assert_eq!(subject.arrange(&area, &params()).len(), 2);
        assert!(subject.arrange(&area, &params()).is_empty());
    }

    #[test]
    fn floating_and_fullscreen_windows_are_raised_last() {
        let mut subject = Workspace::new(0, "1".to_owned());
        subject.push(floating(1));
        subject.push(window(2));
        subject.push(window(3));
        if let Some(w) = subject.find_mut(&WindowHandle(2)) {
            w.set_fullscreen(Some(Xyhw::new(0, 0, 10, 10)));
        }
        assert_eq!(
            subject.raise_order(),
            vec![WindowHandle(3), WindowHandle(1), WindowHandle(2)]
        );
    }
}
