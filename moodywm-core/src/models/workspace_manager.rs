use crate::errors::WorkspaceError;
use crate::models::{Handle, Window, WindowHandle, Workspace, WorkspaceId};
use serde::{Deserialize, Serialize};

/// The fixed set of workspaces and which one is on screen.
///
/// A window handle lives in at most one workspace. Every rejected operation leaves the manager
/// untouched.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WorkspaceManager<H: Handle> {
    #[serde(bound = "")]
    workspaces: Vec<Workspace<H>>,
    current: WorkspaceId,
    capacity: usize,
}

impl<H: Handle> WorkspaceManager<H> {
    /// One workspace per name. At least one workspace is always created.
    #[must_use]
    pub fn new(names: Vec<String>, capacity: usize) -> Self {
        let mut workspaces: Vec<Workspace<H>> = names
            .into_iter()
            .enumerate()
            .map(|(id, name)| Workspace::new(id, name))
            .collect();
        if workspaces.is_empty() {
            workspaces.push(Workspace::new(0, "1".to_owned()));
        }
        Self {
            workspaces,
            current: 0,
            capacity,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.workspaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub const fn current_index(&self) -> WorkspaceId {
        self.current
    }

    #[must_use]
    pub fn current(&self) -> &Workspace<H> {
        &self.workspaces[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Workspace<H> {
        &mut self.workspaces[self.current]
    }

    #[must_use]
    pub fn get(&self, id: WorkspaceId) -> Option<&Workspace<H>> {
        self.workspaces.get(id)
    }

    pub fn get_mut(&mut self, id: WorkspaceId) -> Option<&mut Workspace<H>> {
        self.workspaces.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Workspace<H>> {
        self.workspaces.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Workspace<H>> {
        self.workspaces.iter_mut()
    }

    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.workspaces.iter().map(|ws| ws.name.clone()).collect()
    }

    /// The workspace holding `handle`.
    #[must_use]
    pub fn workspace_of(&self, handle: &WindowHandle<H>) -> Option<WorkspaceId> {
        self.workspaces.iter().position(|ws| ws.contains(handle))
    }

    #[must_use]
    pub fn is_managed(&self, handle: &WindowHandle<H>) -> bool {
        self.workspace_of(handle).is_some()
    }

    /// Whether `handle` belongs to the workspace on screen.
    #[must_use]
    pub fn is_current(&self, handle: &WindowHandle<H>) -> bool {
        self.current().contains(handle)
    }

    #[must_use]
    pub fn find_window(&self, handle: &WindowHandle<H>) -> Option<&Window<H>> {
        self.workspaces.iter().find_map(|ws| ws.find(handle))
    }

    pub fn find_window_mut(&mut self, handle: &WindowHandle<H>) -> Option<&mut Window<H>> {
        self.workspaces.iter_mut().find_map(|ws| ws.find_mut(handle))
    }

    /// Adds a window to `target`, or to the current workspace when `None`.
    ///
    /// # Errors
    ///
    /// Fails when the handle is already managed, the target does not exist or is full.
    pub fn add(
        &mut self,
        window: Window<H>,
        target: Option<WorkspaceId>,
    ) -> Result<WorkspaceId, WorkspaceError> {
        let target = target.unwrap_or(self.current);
        if self.is_managed(&window.handle) {
            return Err(WorkspaceError::AlreadyManaged);
        }
        let capacity = self.capacity;
        let workspace = self
            .workspaces
            .get_mut(target)
            .ok_or(WorkspaceError::OutOfRange(target))?;
        if workspace.len() >= capacity {
            return Err(WorkspaceError::Full(target));
        }
        workspace.push(window);
        Ok(target)
    }

    /// Removes a window from whichever workspace holds it.
    pub fn remove(&mut self, handle: &WindowHandle<H>) -> Option<(WorkspaceId, Window<H>)> {
        let id = self.workspace_of(handle)?;
        let window = self.workspaces[id].remove(handle)?;
        Some((id, window))
    }

    /// Moves a window to another workspace. Returns the workspace it came from.
    ///
    /// # Errors
    ///
    /// Fails when the handle is unmanaged, the target does not exist, is the window's own
    /// workspace, or is full. All checks happen before anything moves.
    pub fn move_window(
        &mut self,
        handle: &WindowHandle<H>,
        target: WorkspaceId,
    ) -> Result<WorkspaceId, WorkspaceError> {
        if target >= self.workspaces.len() {
            return Err(WorkspaceError::OutOfRange(target));
        }
        let source = self.workspace_of(handle).ok_or(WorkspaceError::NotFound)?;
        if source == target {
            return Err(WorkspaceError::SameWorkspace(target));
        }
        if self.workspaces[target].len() >= self.capacity {
            return Err(WorkspaceError::Full(target));
        }
        let window = self.workspaces[source]
            .remove(handle)
            .ok_or(WorkspaceError::NotFound)?;
        self.workspaces[target].push(window);
        Ok(source)
    }

    /// Makes `target` the workspace on screen. Returns the previous one.
    ///
    /// # Errors
    ///
    /// Fails when the target does not exist or is already on screen.
    pub fn switch(&mut self, target: WorkspaceId) -> Result<WorkspaceId, WorkspaceError> {
        if target >= self.workspaces.len() {
            return Err(WorkspaceError::OutOfRange(target));
        }
        if target == self.current {
            return Err(WorkspaceError::SameWorkspace(target));
        }
        let previous = self.current;
        self.current = target;
        Ok(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MockHandle;

    fn names(count: usize) -> Vec<String> {
        (1..=count).map(|i| i.to_string()).collect()
    }

    fn window(handle: MockHandle) -> Window<MockHandle> {
        Window::new(WindowHandle(handle), None)
    }

    #[test]
    fn windows_are_added_to_the_current_workspace() {
        let mut subject = WorkspaceManager::new(names(3), 10);
        assert_eq!(subject.add(window(1), None), Ok(0));
        assert!(subject.is_current(&WindowHandle(1)));
    }

    #[test]
    fn a_handle_can_only_be_managed_once() {
        let mut subject = WorkspaceManager::new(names(3), 10);
        subject.add(window(1), None).ok();
        assert_eq!(
            subject.add(window(1), Some(2)),
            Err(WorkspaceError::AlreadyManaged)
        );
        assert!(subject.get(2).is_some_and(Workspace::is_empty));
    }

    #[test]
    fn a_full_workspace_rejects_new_windows() {
        let mut subject = WorkspaceManager::new(names(2), 2);
        subject.add(window(1), None).ok();
        subject.add(window(2), None).ok();
        assert_eq!(subject.add(window(3), None), Err(WorkspaceError::Full(0)));
        assert_eq!(subject.current().len(), 2);
    }

    #[test]
    fn removing_searches_every_workspace() {
        let mut subject = WorkspaceManager::new(names(3), 10);
        subject.add(window(1), Some(2)).ok();
        let removed = subject.remove(&WindowHandle(1));
        assert_eq!(removed.map(|(id, w)| (id, w.handle)), Some((2, WindowHandle(1))));
        assert!(subject.remove(&WindowHandle(1)).is_none());
    }

    #[test]
    fn removing_the_master_of_three_keeps_the_order() {
        let mut subject = WorkspaceManager::new(names(1), 10);
        for h in 1..=3 {
            subject.add(window(h), None).ok();
        }
        subject.remove(&WindowHandle(1));
        assert_eq!(subject.current().master(), Some(WindowHandle(2)));
        assert_eq!(
            subject.current().handles(),
            vec![WindowHandle(2), WindowHandle(3)]
        );
    }

    #[test]
    fn moving_a_window_changes_its_workspace() {
        let mut subject = WorkspaceManager::new(names(3), 10);
        subject.add(window(1), None).ok();
        subject.add(window(2), None).ok();
        assert_eq!(subject.move_window(&WindowHandle(1), 1), Ok(0));
        assert_eq!(subject.workspace_of(&WindowHandle(1)), Some(1));
        assert_eq!(subject.current().master(), Some(WindowHandle(2)));
        assert_eq!(subject.get(1).and_then(Workspace::master), Some(WindowHandle(1)));
    }

    #[test]
    fn moving_to_a_full_workspace_leaves_the_source_untouched() {
        let mut subject = WorkspaceManager::new(names(2), 1);
        subject.add(window(1), Some(0)).ok();
        subject.add(window(2), Some(1)).ok();
        assert_eq!(
            subject.move_window(&WindowHandle(1), 1),
            Err(WorkspaceError::Full(1))
        );
        assert_eq!(subject.workspace_of(&WindowHandle(1)), Some(0));
    }

    #[test]
    fn moving_is_rejected_out_of_range_or_to_the_same_workspace() {
        let mut subject = WorkspaceManager::new(names(2), 10);
        subject.add(window(1), None).ok();
        assert_eq!(
            subject.move_window(&WindowHandle(1), 2),
            Err(WorkspaceError::OutOfRange(2))
        );
        assert_eq!(
            subject.move_window(&WindowHandle(1), 0),
            Err(WorkspaceError::SameWorkspace(0))
        );
        assert_eq!(
            subject.move_window(&WindowHandle(9), 1),
            Err(WorkspaceError::NotFound)
        );
    }

    #[test]
    fn switching_changes_the_current_workspace() {
        let mut subject: WorkspaceManager<MockHandle> = WorkspaceManager::new(names(3), 10);
        assert_eq!(subject.switch(2), Ok(0));
        assert_eq!(subject.current_index(), 2);
        assert_eq!(subject.switch(2), Err(WorkspaceError::SameWorkspace(2)));
        assert_eq!(subject.switch(3), Err(WorkspaceError::OutOfRange(3)));
        assert_eq!(subject.current_index(), 2);
    }
}
