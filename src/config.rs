use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::lang::{Lang, Title};

pub const CONFIG_FILE_NAME: &str = ".locsheetrc.json";

pub const DEFAULT_STRINGS_FILE_NAME: &str = "Localizable.strings";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Language used when `--lang` is not given.
    #[serde(default)]
    pub lang: Lang,
    /// File name written by `restore` inside `<output>/<lang>/`.
    #[serde(default = "default_strings_file_name")]
    pub strings_file_name: String,
    /// Header labels overriding the built-in ones, per language.
    #[serde(default)]
    pub titles: BTreeMap<Lang, Title>,
}

fn default_strings_file_name() -> String {
    DEFAULT_STRINGS_FILE_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang: Lang::default(),
            strings_file_name: default_strings_file_name(),
            titles: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// `stringsFileName` must be a bare file name ending in `.strings`.
    pub fn validate(&self) -> Result<()> {
        let name = &self.strings_file_name;
        if name.contains('/') || name.contains('\\') {
            bail!(
                "Invalid 'stringsFileName': \"{}\" must not contain a path separator",
                name
            );
        }
        if name.len() <= ".strings".len() || !name.ends_with(".strings") {
            bail!("Invalid 'stringsFileName': \"{}\" must end with .strings", name);
        }
        Ok(())
    }

    /// Header labels for `lang`, preferring a configured override.
    pub fn title(&self, lang: Lang) -> Title {
        self.titles
            .get(&lang)
            .cloned()
            .unwrap_or_else(|| lang.title())
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config came from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {}", path.display()))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
