use crate::layouts::LayoutParams;
use crate::utils::modmask_lookup::{Button, ModMask};
use crate::utils::xkeysym_lookup::XKeysym;
use crate::Command;
use serde::{Deserialize, Serialize};

/// A key combination and the command it runs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Keybind {
    pub modifier: ModMask,
    pub key: XKeysym,
    pub command: Command,
}

impl Keybind {
    /// Whether a key press with `mask` (lock modifiers already cleaned) triggers this binding.
    /// The modifiers have to be exactly the bound ones.
    #[must_use]
    pub fn matches(&self, mask: ModMask, key: XKeysym) -> bool {
        self.key == key && mask == self.modifier
    }

    /// Whether the press is this workspace binding with Shift added on top, which moves the
    /// focused window instead of switching.
    #[must_use]
    pub fn matches_shifted(&self, mask: ModMask, key: XKeysym) -> bool {
        matches!(self.command, Command::GoToWorkspace(_))
            && !self.modifier.contains(ModMask::Shift)
            && self.key == key
            && mask == self.modifier | ModMask::Shift
    }
}

pub trait Config {
    /// One entry per workspace, in order.
    fn workspace_names(&self) -> Vec<String>;
    fn max_windows_per_workspace(&self) -> usize;
    fn border_width(&self) -> i32;
    fn layout_params(&self) -> LayoutParams;
    fn active_border_color(&self) -> String;
    fn inactive_border_color(&self) -> String;
    /// Modifier that has to be held for mouse drags.
    fn mousekey(&self) -> ModMask;
    fn move_button(&self) -> Button;
    fn resize_button(&self) -> Button;
    fn keybinds(&self) -> Vec<Keybind>;
    fn autostart(&self) -> Option<String>;
    fn default_width(&self) -> i32;
    fn default_height(&self) -> i32;
}

#[cfg(test)]
pub use tests::TestConfig;
