use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::ExcludedNames;

pub const CONFIG_FILE_NAME: &str = ".dsscanrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// File extensions (without the dot) that are scanned, compared lowercased.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub recursive: bool,
    #[serde(default = "default_transient_library")]
    pub transient_library: String,
    #[serde(default = "default_null_dataset")]
    pub null_dataset: String,
}

fn default_extensions() -> Vec<String> {
    ["sas", "inc", "mac"].map(String::from).to_vec()
}

fn default_transient_library() -> String {
    "work".to_string()
}

fn default_null_dataset() -> String {
    "_null_".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignores: Vec::new(),
            recursive: false,
            transient_library: default_transient_library(),
            null_dataset: default_null_dataset(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or no
    /// extension is configured.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.extensions.iter().all(|ext| ext.trim().is_empty()) {
            anyhow::bail!("'extensions' must name at least one file extension");
        }

        Ok(())
    }

    /// Configured extensions, lowercased and without a leading dot.
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect()
    }

    pub fn excluded_names(&self) -> ExcludedNames {
        ExcludedNames {
            transient_library: self.transient_library.clone(),
            null_dataset: self.null_dataset.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
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
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
