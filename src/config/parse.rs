use super::{ShortcutConfig, ShortcutSpec};
use directories::ProjectDirs;
use serde::Deserialize;
use shortkey_engine::engine::{KeyCombo, Platform};
use std::path::PathBuf;

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB
const MAX_SHORTCUTS: usize = 512;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ShortcutsFile {
    meta: Option<ShortcutsMeta>,
    shortcuts: Option<Vec<ShortcutEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ShortcutsMeta {
    platform: Option<Platform>,
    defaults: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ShortcutEntry {
    name: String,
    keys: String,
    description: Option<String>,
    context: Option<String>,
    prevent_default: Option<bool>,
    group: Option<String>,
}

/// Load shortcut definitions from `config_file`, or from the user config dir.
///
/// Never fails: problems are returned as warnings and whatever could be
/// read is kept.
pub fn load_config(config_file: Option<&PathBuf>) -> (ShortcutConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let config_path = config_file.cloned().or_else(user_config_path);
    let mut file: Option<ShortcutsFile> = None;

    if let Some(path) = config_path.as_ref() {
        if path.exists() {
            match std::fs::metadata(path) {
                Ok(meta) if meta.len() > MAX_CONFIG_FILE_BYTES => {
                    warnings.push(format!(
                        "Refusing to read {}: file too large ({} bytes, max {})",
                        path.display(),
                        meta.len(),
                        MAX_CONFIG_FILE_BYTES
                    ));
                }
                Ok(_) => match std::fs::read_to_string(path) {
                    Ok(content) => match toml::from_str::<ShortcutsFile>(&content) {
                        Ok(parsed) => file = Some(parsed),
                        Err(err) => {
                            warnings.push(format!("Failed to parse {}: {}", path.display(), err))
                        }
                    },
                    Err(err) => {
                        warnings.push(format!("Failed to read {}: {}", path.display(), err))
                    }
                },
                Err(err) => warnings.push(format!(
                    "Failed to read metadata for {}: {}",
                    path.display(),
                    err
                )),
            }
        } else if config_file.is_some() {
            warnings.push(format!("Shortcut file not found: {}", path.display()));
        }
    }

    let mut config = ShortcutConfig::default();
    let Some(file) = file else {
        return (config, warnings);
    };

    if let Some(meta) = file.meta {
        config.platform = meta.platform;
        config.include_defaults = meta.defaults.unwrap_or(true);
    }

    let entries = file.shortcuts.unwrap_or_default();
    if entries.len() > MAX_SHORTCUTS {
        warnings.push(format!(
            "Too many shortcuts: {} (max {})",
            entries.len(),
            MAX_SHORTCUTS
        ));
        return (config, warnings);
    }
    config.shortcuts = parse_entries(entries, &mut warnings);
    (config, warnings)
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "shortkey")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("shortcuts.toml");
    Some(path)
}

fn parse_entries(entries: Vec<ShortcutEntry>, warnings: &mut Vec<String>) -> Vec<ShortcutSpec> {
    let mut specs: Vec<ShortcutSpec> = Vec::new();
    for entry in entries {
        let name = entry.name.trim();
        if name.is_empty() {
            warnings.push(format!("Shortcut with keys '{}' has an empty name", entry.keys));
            continue;
        }
        let combo = match entry.keys.parse::<KeyCombo>() {
            Ok(combo) => combo,
            Err(err) => {
                warnings.push(format!(
                    "Invalid keys '{}' for shortcut '{}': {}",
                    entry.keys, name, err
                ));
                continue;
            }
        };
        let group = entry
            .group
            .map(|group| group.trim().to_string())
            .filter(|group| !group.is_empty());
        specs.push(ShortcutSpec {
            name: name.to_string(),
            combo,
            description: entry.description,
            context: entry.context,
            prevent_default: entry.prevent_default.unwrap_or(false),
            group,
        });
    }
    specs
}
