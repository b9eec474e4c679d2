use super::{default_terminal, Config, Keybind};
use crate::BaseCommand;
use moodywm_core::layouts::LayoutParams;

const WORKSPACES_NUM: usize = 9;

impl Default for Config {
    fn default() -> Self {
        let keybind = |command: BaseCommand, value: &str, modifier: &[&str], key: &str| Keybind {
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
        };

        let mut commands = vec![
            // Mod + q => close the focused window
            keybind(BaseCommand::CloseWindow, "", &["modkey"], "q"),
            // Mod + j / k => cycle focus
            keybind(BaseCommand::FocusNextWindow, "", &["modkey"], "j"),
            keybind(BaseCommand::FocusPreviousWindow, "", &["modkey"], "k"),
            // Mod + Enter => make the focused window the master
            keybind(BaseCommand::SwapMaster, "", &["modkey"], "Return"),
            // Mod + Shift + Enter => open a shell
            keybind(
                BaseCommand::Execute,
                default_terminal(),
                &["modkey", "Shift"],
                "Return",
            ),
            // Mod + p => open dmenu
            keybind(BaseCommand::Execute, "dmenu_run", &["modkey"], "p"),
        ];

        // Mod + n => go to workspace n. Holding Shift moves the focused window there instead.
        for i in 1..=WORKSPACES_NUM {
            commands.push(keybind(
                BaseCommand::GoToWorkspace,
                &i.to_string(),
                &["modkey"],
                &i.to_string(),
            ));
        }

        let layout = LayoutParams::default();

        Self {
            modkey: "Mod1".to_owned(),
            mousekey: Some("Mod1".into()),
            workspaces: WORKSPACES_NUM,
            workspace_names: None,
            max_windows_per_workspace: 10,
            border_width: 2,
            inner_gap: layout.inner_gap,
            outer_gap: layout.outer_gap,
            main_fraction: layout.main_fraction,
            main_side: layout.main_side,
            active_border_color: "#d08770".to_owned(),
            inactive_border_color: "#4c566a".to_owned(),
            default_width: 800,
            default_height: 800,
            move_button: 1,
            resize_button: 3,
            autostart: None,
            keybind: commands,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Config;
    use moodywm_core::{Command, Config as _, ModMask};

    #[test]
    fn serialize_default_config() {
        let config = Config::default();
        assert!(toml::to_string(&config).is_ok());
    }

    #[test]
    fn every_default_keybind_is_valid() {
        let config = Config::default();
        assert_eq!(config.keybinds().len(), config.keybind.len());
    }

    #[test]
    fn default_workspace_bindings_use_the_number_keys() {
        let keybinds = Config::default().keybinds();
        let goto: Vec<_> = keybinds
            .iter()
            .filter(|kb| matches!(kb.command, Command::GoToWorkspace(_)))
            .collect();
        assert_eq!(goto.len(), 9);
        assert!(goto.iter().all(|kb| kb.modifier == ModMask::Alt));
        assert_eq!(goto[0].command, Command::GoToWorkspace(0));
        assert_eq!(goto[0].key, u32::from('1'));
    }
}
