use crate::BaseCommand;
use anyhow::{anyhow, ensure, Context, Result};
use moodywm_core::utils::modmask_lookup::{into_mod, into_modmask};
use moodywm_core::utils::xkeysym_lookup::into_keysym;
use moodywm_core::{Command, ModMask};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub command: BaseCommand,
    #[serde(default)]
    pub value: String,
    pub modifier: Option<Modifier>,
    pub key: String,
}

impl Keybind {
    /// Resolves the binding into what the core matches key presses against. `modkey` replaces
    /// the `modkey` placeholder in the modifier list.
    ///
    /// # Errors
    ///
    /// Fails when the value does not fit the command, a modifier is unknown or the key has no
    /// keysym.
    pub fn try_convert_to_core_keybind(&self, modkey: &str) -> Result<moodywm_core::Keybind> {
        let command = match self.command {
            BaseCommand::Execute => {
                ensure!(!self.value.trim().is_empty(), "value must not be empty");
                Command::Execute(self.value.clone())
            }
            BaseCommand::CloseWindow => Command::CloseWindow,
            BaseCommand::FocusNextWindow => Command::FocusNextWindow,
            BaseCommand::FocusPreviousWindow => Command::FocusPreviousWindow,
            BaseCommand::SwapMaster => Command::SwapMaster,
            BaseCommand::GoToWorkspace => {
                Command::GoToWorkspace(workspace_index(&self.value, "GoToWorkspace")?)
            }
            BaseCommand::MoveToWorkspace => {
                Command::MoveToWorkspace(workspace_index(&self.value, "MoveToWorkspace")?)
            }
        };

        let modifiers = self.modifiers(modkey);
        for m in &modifiers {
            ensure!(into_mod(m) != ModMask::Zero, "Modifier `{m}` is not valid");
        }

        let key = into_keysym(&self.key).ok_or_else(|| anyhow!("Key `{}` is not valid", self.key))?;

        Ok(moodywm_core::Keybind {
            modifier: into_modmask(&modifiers),
            key,
            command,
        })
    }

    /// The modifier names with the placeholder substituted.
    pub fn modifiers(&self, modkey: &str) -> Vec<String> {
        self.modifier
            .as_ref()
            .map(|modifier| {
                modifier
                    .into_iter()
                    .filter(|m| m != "None")
                    .map(|m| if m == "modkey" { modkey.to_owned() } else { m })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Workspaces are numbered from 1 in the configuration file.
fn workspace_index(value: &str, command: &str) -> Result<usize> {
    let number = usize::from_str(value.trim())
        .with_context(|| format!("invalid workspace number for {command}"))?;
    ensure!(number >= 1, "workspace numbers for {command} start at 1");
    Ok(number - 1)
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
#[serde(untagged)]
pub enum Modifier {
    Single(String),
    List(Vec<String>),
}

impl Modifier {
    pub fn is_empty(&self) -> bool {
        match self {
            Modifier::Single(single) => single.is_empty(),
            Modifier::List(list) => list.is_empty(),
        }
    }

    pub fn sort_unstable(&mut self) {
        match self {
            Self::Single(_) => {}
            Self::List(modifiers) => modifiers.sort_unstable(),
        }
    }
}

impl std::convert::From<Modifier> for Vec<String> {
    fn from(m: Modifier) -> Self {
        match m {
            Modifier::Single(modifier) => vec![modifier],
            Modifier::List(modifiers) => modifiers,
        }
    }
}

impl IntoIterator for &Modifier {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        Vec::from(self.clone()).into_iter()
    }
}

impl std::convert::From<Vec<String>> for Modifier {
    fn from(l: Vec<String>) -> Self {
        Self::List(l)
    }
}

impl std::convert::From<&str> for Modifier {
    fn from(m: &str) -> Self {
        Self::Single(m.to_owned())
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(modifier) => write!(f, "{modifier}"),
            Self::List(modifiers) => write!(f, "{}", modifiers.join("+")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use x11_dl::keysym;

    fn keybind(command: BaseCommand, value: &str, modifier: &[&str], key: &str) -> Keybind {
        Keybind {
            command,
            value: value.to_owned(),
            modifier: Some(
                modifier
                    .iter()
                    .map(|m| (*m).to_owned())
                    .collect::<Vec<_>>()
                    .into(),
            ),
            key: key.to_owned(),
        }
    }

    #[test]
    fn modkey_placeholder_is_substituted() {
        let kb = keybind(BaseCommand::CloseWindow, "", &["modkey", "Shift"], "q");
        let converted = kb.try_convert_to_core_keybind("Mod4").unwrap();
        assert_eq!(converted.modifier, ModMask::Super | ModMask::Shift);
        assert_eq!(converted.key, keysym::XK_q);
        assert_eq!(converted.command, Command::CloseWindow);
    }

    #[test]
    fn workspace_values_are_one_based() {
        let kb = keybind(BaseCommand::GoToWorkspace, "3", &["modkey"], "3");
        let converted = kb.try_convert_to_core_keybind("Mod1").unwrap();
        assert_eq!(converted.command, Command::GoToWorkspace(2));
        assert_eq!(converted.key, keysym::XK_3);

        let kb = keybind(BaseCommand::MoveToWorkspace, "1", &["modkey"], "1");
        let converted = kb.try_convert_to_core_keybind("Mod1").unwrap();
        assert_eq!(converted.command, Command::MoveToWorkspace(0));
    }

    #[test]
    fn workspace_zero_is_rejected() {
        let kb = keybind(BaseCommand::GoToWorkspace, "0", &["modkey"], "0");
        assert!(kb.try_convert_to_core_keybind("Mod1").is_err());
        let kb = keybind(BaseCommand::GoToWorkspace, "one", &["modkey"], "1");
        assert!(kb.try_convert_to_core_keybind("Mod1").is_err());
    }

    #[test]
    fn execute_needs_a_value() {
        let kb = keybind(BaseCommand::Execute, " ", &["modkey"], "p");
        assert!(kb.try_convert_to_core_keybind("Mod1").is_err());
        let kb = keybind(BaseCommand::Execute, "dmenu_run", &["modkey"], "p");
        assert_eq!(
            kb.try_convert_to_core_keybind("Mod1").unwrap().command,
            Command::Execute("dmenu_run".to_owned())
        );
    }

    #[test]
    fn unknown_keys_and_modifiers_are_rejected() {
        let kb = keybind(BaseCommand::SwapMaster, "", &["modkey"], "NotAKey");
        assert!(kb.try_convert_to_core_keybind("Mod1").is_err());
        let kb = keybind(BaseCommand::SwapMaster, "", &["Hyper"], "Return");
        assert!(kb.try_convert_to_core_keybind("Mod1").is_err());
    }

    #[test]
    fn missing_modifier_binds_the_bare_key() {
        let kb = Keybind {
            command: BaseCommand::FocusNextWindow,
            value: String::new(),
            modifier: None,
            key: "F5".to_owned(),
        };
        let converted = kb.try_convert_to_core_keybind("Mod1").unwrap();
        assert_eq!(converted.modifier, ModMask::Zero);
        assert_eq!(converted.key, keysym::XK_F5);
    }
}
