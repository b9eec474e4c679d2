use super::{Config, Keybind, Modifier};
use moodywm_core::utils::modmask_lookup::into_mod;
use moodywm_core::ModMask;
use std::collections::HashSet;

impl Config {
    pub fn check_mousekey(&self, verbose: bool) {
        if verbose {
            println!("Checking if mousekey is set.");
        }
        if let Some(mousekey) = &self.mousekey {
            if verbose {
                println!("Mousekey is set.");
            }
            if mousekey.is_empty() {
                println!("Your mousekey is set to nothing, this will cause windows to move/resize with just a mouse press.");
                return;
            }
            for m in mousekey {
                if m != "modkey" && into_mod(&m) == ModMask::Zero {
                    println!("\x1b[1;91mERROR: Mousekey modifier `{m}` is not valid\x1b[0m");
                }
            }
            if verbose {
                println!("Mousekey is okay.");
            }
        }
    }

    /// Checks the numbers that size the workspaces and the layout.
    pub fn check_layout(&self, verbose: bool) {
        println!("\x1b[0;94m::\x1b[0m Checking workspaces and layout . . .");
        let mut errors = Vec::new();
        if self.workspaces == 0 {
            errors.push("`workspaces` must be at least 1".to_owned());
        }
        if self.max_windows_per_workspace == 0 {
            errors.push("`max_windows_per_workspace` must be at least 1".to_owned());
        }
        if let Some(names) = &self.workspace_names {
            if names.len() > self.workspaces {
                errors.push(format!(
                    "{} workspace names given for {} workspaces",
                    names.len(),
                    self.workspaces
                ));
            }
        }
        if !(self.main_fraction > 0.0 && self.main_fraction < 1.0) {
            errors.push(format!(
                "`main_fraction` must be between 0 and 1, got {}",
                self.main_fraction
            ));
        }
        if self.border_width < 0 || self.inner_gap < 0 || self.outer_gap < 0 {
            errors.push("borders and gaps cannot be negative".to_owned());
        }
        if errors.is_empty() {
            if verbose {
                println!(
                    "{} workspaces, {} windows each",
                    self.workspaces, self.max_windows_per_workspace
                );
            }
            println!("\x1b[0;92m    -> Workspaces and layout OK\x1b[0m");
        } else {
            for error in errors {
                println!("\x1b[1;91mERROR: {error}\x1b[0m");
            }
        }
    }

    /// Check all keybinds to ensure that required values are provided
    /// Checks to see if value is provided (if required)
    /// Checks to see if keys are valid against Xkeysym
    pub fn check_keybinds(&self, verbose: bool) {
        println!("\x1b[0;94m::\x1b[0m Checking keybinds . . .");
        let errors = self.keybind_errors(verbose);
        if errors.is_empty() {
            println!("\x1b[0;92m    -> All keybinds OK\x1b[0m");
        } else {
            for error in errors {
                match error.0 {
                    Some(binding) => {
                        println!(
                            "\x1b[1;91mERROR: {} for keybind {binding:?}\x1b[0m",
                            error.1
                        );
                    }
                    None => {
                        println!("\x1b[1;91mERROR: {} \x1b[0m", error.1);
                    }
                }
            }
        }
    }

    fn keybind_errors(&self, verbose: bool) -> Vec<(Option<Keybind>, String)> {
        let mut returns = Vec::new();
        let mut bindings = HashSet::new();
        for keybind in &self.keybind {
            if verbose {
                println!(
                    "Keybind: {:?} value field is empty: {}",
                    keybind,
                    keybind.value.is_empty()
                );
            }
            if let Err(err) = keybind.try_convert_to_core_keybind(&self.modkey) {
                returns.push((Some(keybind.clone()), err.to_string()));
            }

            let mut modkey = Modifier::from(keybind.modifiers(&self.modkey));
            modkey.sort_unstable();
            if let Some(conflict_key) = bindings.replace((modkey.clone(), &keybind.key)) {
                returns.push((
                    None,
                    format!(
                        "\x1b[0m\x1b[1mMultiple commands bound to key combination {} + {}:\
                    \n\x1b[1;91m    -> {:?}\
                    \n    -> {:?}\
                    \n\x1b[0mHelp: change one of the keybindings to something else.\n",
                        modkey, keybind.key, conflict_key, keybind.command,
                    ),
                ));
            }
        }
        returns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BaseCommand;

    #[test]
    fn default_keybinds_have_no_errors() {
        assert!(Config::default().keybind_errors(false).is_empty());
    }

    #[test]
    fn duplicate_bindings_are_reported() {
        let mut config = Config::default();
        config.keybind.push(Keybind {
            command: BaseCommand::SwapMaster,
            value: String::new(),
            modifier: Some("modkey".into()),
            key: "q".to_owned(),
        });
        let errors = config.keybind_errors(false);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].0.is_none());
    }

    #[test]
    fn invalid_bindings_are_reported() {
        let mut config = Config::default();
        config.keybind = vec![Keybind {
            command: BaseCommand::MoveToWorkspace,
            value: String::new(),
            modifier: Some("modkey".into()),
            key: "1".to_owned(),
        }];
        let errors = config.keybind_errors(false);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].0.is_some());
    }
}
