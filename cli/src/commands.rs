//! Table-driven `:`-prefixed settings commands. Each command names a config
//! field, its allowed values, and a usage line printed on any misuse. A
//! successful change is persisted immediately.

use std::path::Path;

use engine::{HighlightStyle, SearchMode};

use crate::config::Config;

pub struct SettingsCommand {
    name: &'static str,
    label: &'static str,
    usage: &'static str,
    allowed: &'static [&'static str],
    apply: fn(&mut Config, &str),
}

pub const COMMANDS: &[SettingsCommand] = &[
    SettingsCommand {
        name: ":highlight",
        label: "Highlighting",
        usage: "usage: :highlight ON|OFF",
        allowed: &["ON", "OFF"],
        apply: |cfg, v| cfg.highlight = v == "ON",
    },
    SettingsCommand {
        name: ":mode",
        label: "Search mode",
        usage: "usage: :mode AND|OR",
        allowed: &["AND", "OR"],
        apply: |cfg, v| cfg.search_mode = v.parse().unwrap_or(SearchMode::And),
    },
    SettingsCommand {
        name: ":hlmode",
        label: "Highlight mode",
        usage: "usage: :hlmode DEFAULT|GREEN",
        allowed: &["DEFAULT", "GREEN"],
        apply: |cfg, v| cfg.hl_mode = v.parse().unwrap_or(HighlightStyle::Default),
    },
];

/// Dispatch a `:`-prefixed line to its settings command. Returns false when
/// no command matched.
pub fn dispatch(raw: &str, config: &mut Config, config_path: &Path) -> bool {
    COMMANDS.iter().any(|cmd| cmd.try_handle(raw, config, config_path))
}

impl SettingsCommand {
    /// Returns true when this command was responsible for the input, whether
    /// or not the input was well-formed.
    fn try_handle(&self, raw: &str, config: &mut Config, config_path: &Path) -> bool {
        let mut parts = raw.split_whitespace();
        if parts.next() != Some(self.name) {
            return false;
        }
        let value = match (parts.next(), parts.next()) {
            (Some(value), None) => value.to_ascii_uppercase(),
            _ => {
                println!("{}", self.usage);
                return true;
            }
        };
        if !self.allowed.contains(&value.as_str()) {
            println!("{}", self.usage);
            return true;
        }
        (self.apply)(config, &value);
        println!("{} set to {value}", self.label);
        if let Err(err) = config.save(config_path) {
            eprintln!("warning: could not save config: {err:#}");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_config() -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        (dir, path)
    }

    #[test]
    fn mode_command_updates_and_persists() {
        let (_dir, path) = tmp_config();
        let mut cfg = Config::default();
        assert!(dispatch(":mode or", &mut cfg, &path));
        assert_eq!(cfg.search_mode, SearchMode::Or);
        assert!(path.exists());
    }

    #[test]
    fn values_are_case_insensitive() {
        let (_dir, path) = tmp_config();
        let mut cfg = Config::default();
        assert!(dispatch(":highlight Off", &mut cfg, &path));
        assert!(!cfg.highlight);
        assert!(dispatch(":hlmode green", &mut cfg, &path));
        assert_eq!(cfg.hl_mode, HighlightStyle::Green);
    }

    #[test]
    fn bad_arity_or_value_is_consumed_without_change() {
        let (_dir, path) = tmp_config();
        let mut cfg = Config::default();
        assert!(dispatch(":mode", &mut cfg, &path));
        assert!(dispatch(":mode and or", &mut cfg, &path));
        assert!(dispatch(":mode maybe", &mut cfg, &path));
        assert_eq!(cfg.search_mode, SearchMode::And);
    }

    #[test]
    fn unknown_commands_are_not_consumed() {
        let (_dir, path) = tmp_config();
        let mut cfg = Config::default();
        assert!(!dispatch(":frobnicate on", &mut cfg, &path));
    }
}
