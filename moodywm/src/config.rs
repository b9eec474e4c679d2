//! `moodywm` general configuration

mod checks;
mod default;
mod keybind;

pub use self::keybind::{Keybind, Modifier};

use anyhow::Result;
use moodywm_core::layouts::{LayoutParams, Side};
use moodywm_core::utils::modmask_lookup::into_modmask;
use moodywm_core::{Button, ModMask};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;

/// General configuration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub modkey: String,
    pub mousekey: Option<Modifier>,
    /// Number of workspaces.
    pub workspaces: usize,
    pub workspace_names: Option<Vec<String>>,
    pub max_windows_per_workspace: usize,
    pub border_width: i32,
    pub inner_gap: i32,
    pub outer_gap: i32,
    pub main_fraction: f32,
    pub main_side: Side,
    pub active_border_color: String,
    pub inactive_border_color: String,
    pub default_width: i32,
    pub default_height: i32,
    pub move_button: u32,
    pub resize_button: u32,
    /// Shell command run once at start-up. `autostart.sh` in the config directory is used
    /// when unset.
    pub autostart: Option<String>,
    // NOTE: tables have to stay last for the TOML serializer.
    pub keybind: Vec<Keybind>,
}

#[must_use]
pub fn load() -> Config {
    load_from_file()
        .map_err(|err| tracing::error!("Unable to load the config file, using defaults: {:?}", err))
        .unwrap_or_default()
}

/// Path of the configuration file in the XDG config directory.
///
/// # Errors
///
/// Errors when the config directory cannot be created.
pub fn get_default_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("moodywm")?;
    Ok(path.place_config_file("config.toml")?)
}

/// Reads the config file, writing out the default one first when there is none.
///
/// # Errors
///
/// Function will throw an error if `BaseDirectories` doesn't exist, if user doesn't have
/// permissions to place config.toml, if config.toml cannot be read (access writes, malformed file,
/// etc.).
/// Function can also error from inability to save config.toml (if it is the first time running
/// `moodywm`).
fn load_from_file() -> Result<Config> {
    tracing::debug!("Loading config file");
    let config_file = get_default_path()?;
    if config_file.exists() {
        tracing::debug!("Config file '{}' found.", config_file.to_string_lossy());
        return load_from_path(&config_file);
    }
    tracing::debug!("Config file not found. Writing the default config file.");
    let config = Config::default();
    write_default(&config, &config_file)?;
    Ok(config)
}

/// Parses a TOML config file.
///
/// # Errors
///
/// Errors when the file cannot be read or is not a valid configuration.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

fn write_default(config: &Config, path: &Path) -> Result<()> {
    let header = "# moodywm configuration\n\
                  # Modifiers in keybinds may use `modkey`, which stands for the `modkey` below.\n\
                  # Workspace numbers start at 1.\n\n";
    let contents = header.to_owned() + &toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

#[must_use]
pub fn is_program_in_path(program: &str) -> bool {
    if let Ok(path) = env::var("PATH") {
        for p in path.split(':') {
            let p_str = format!("{p}/{program}");
            if fs::metadata(p_str).is_ok() {
                return true;
            }
        }
    }
    false
}

/// Returns a terminal to set for the default mod+shift+enter keybind.
fn default_terminal<'s>() -> &'s str {
    // order from least common to most common.
    // the thinking is if a machine has an uncommon terminal installed, it is intentional
    let terms = &[
        "alacritty",
        "kitty",
        "urxvt",
        "st",
        "xterm",
        "gnome-terminal",
        "xfce4-terminal",
        "konsole",
    ];

    // If no terminal found in path, default to a good one
    terms
        .iter()
        .find(|terminal| is_program_in_path(terminal))
        .unwrap_or(&"xterm")
}

impl moodywm_core::Config for Config {
    fn workspace_names(&self) -> Vec<String> {
        let names = self.workspace_names.clone().unwrap_or_default();
        (0..self.workspaces.max(1))
            .map(|i| names.get(i).cloned().unwrap_or_else(|| (i + 1).to_string()))
            .collect()
    }

    fn max_windows_per_workspace(&self) -> usize {
        self.max_windows_per_workspace
    }

    fn border_width(&self) -> i32 {
        self.border_width
    }

    fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            inner_gap: self.inner_gap,
            outer_gap: self.outer_gap,
            main_fraction: self.main_fraction.clamp(0.05, 0.95),
            main_side: self.main_side,
        }
    }

    fn active_border_color(&self) -> String {
        self.active_border_color.clone()
    }

    fn inactive_border_color(&self) -> String {
        self.inactive_border_color.clone()
    }

    fn mousekey(&self) -> ModMask {
        let keys: Vec<String> = self
            .mousekey
            .as_ref()
            .unwrap_or(&"Mod1".into())
            .into_iter()
            .map(|m| if m == "modkey" { self.modkey.clone() } else { m })
            .collect();
        into_modmask(&keys)
    }

    fn move_button(&self) -> Button {
        Button::from_number(self.move_button)
    }

    fn resize_button(&self) -> Button {
        Button::from_number(self.resize_button)
    }

    fn keybinds(&self) -> Vec<moodywm_core::Keybind> {
        self.keybind
            .iter()
            .filter_map(
                |keybind| match keybind.try_convert_to_core_keybind(&self.modkey) {
                    Ok(core_keybind) => Some(core_keybind),
                    Err(err) => {
                        tracing::error!("Invalid key binding: {}\n{:?}", err, keybind);
                        None
                    }
                },
            )
            .collect()
    }

    fn autostart(&self) -> Option<String> {
        self.autostart.clone()
    }

    fn default_width(&self) -> i32 {
        self.default_width
    }

    fn default_height(&self) -> i32 {
        self.default_height
    }
}
