//! Objects (such as windows) used to develop `MoodyWM`.
mod dock_area;
mod manager;
mod mode;
mod screen;
mod window;
mod window_kind;
mod window_state;
mod window_type;
mod workspace;
mod workspace_manager;
mod xyhw;
mod xyhw_change;

pub use dock_area::DockArea;
pub use manager::Manager;
pub use mode::{Drag, Mode};
pub use screen::{BBox, Screen};
pub use window::Handle;
#[cfg(test)]
pub(crate) use window::MockHandle;
pub use window::Window;
pub use window::WindowHandle;
pub use window_kind::WindowKind;
pub use window_state::{StateAction, WindowState};
pub use window_type::WindowType;
pub use workspace::Workspace;
pub use workspace_manager::WorkspaceManager;
pub use xyhw::Xyhw;
pub use xyhw_change::XyhwChange;

pub type WorkspaceId = usize;
