use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::CommonArgs;
use crate::{
    config::{Config, load_config},
    lang::{Lang, Title},
};

/// Settings resolved for one command run: the loaded config plus CLI overrides.
pub struct CommandContext {
    pub config: Config,
    pub config_path: Option<PathBuf>,
    pub lang: Lang,
}

impl CommandContext {
    /// Load config from the working directory upward and apply `args` on top.
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to get current directory")?;
        let loaded = load_config(&cwd)?;
        if let Some(path) = &loaded.path {
            debug!(path = %path.display(), "loaded config");
        }
        Ok(Self::from_config(loaded.config, loaded.path, args))
    }

    pub fn from_config(config: Config, config_path: Option<PathBuf>, args: &CommonArgs) -> Self {
        let lang = args.lang.unwrap_or(config.lang);
        Self {
            config,
            config_path,
            lang,
        }
    }

    pub fn title(&self) -> Title {
        self.config.title(self.lang)
    }
}
