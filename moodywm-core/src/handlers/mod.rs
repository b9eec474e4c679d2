pub mod command_handler;
pub mod display_event_handler;
mod focus_handler;
mod mouse_combo_handler;
mod screen_create_handler;
mod window_handler;
mod workspace_handler;

use super::command::Command;
use super::config::Config;
use super::models::{Handle, Manager, Mode, Screen, Window, WindowHandle, WindowKind};
use super::DisplayEvent;
