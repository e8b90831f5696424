use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".langsheetrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Element names excluded from the export entirely.
    #[serde(default)]
    pub ignored_keys: Vec<String>,
    /// File names (or glob patterns) inside the values directories to export.
    #[serde(default = "default_resource_files")]
    pub resource_files: Vec<String>,
    /// Candidate resource directories relative to the project root.
    #[serde(default = "default_resource_dirs")]
    pub resource_dirs: Vec<String>,
    #[serde(default = "default_base_dir")]
    pub base_dir: String,
}

fn default_resource_files() -> Vec<String> {
    vec!["strings.xml".to_string()]
}

fn default_resource_dirs() -> Vec<String> {
    ["res", "src/main/res"].map(String::from).to_vec()
}

fn default_base_dir() -> String {
    "values".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignored_keys: Vec::new(),
            resource_files: default_resource_files(),
            resource_dirs: default_resource_dirs(),
            base_dir: default_base_dir(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Resource file entries must be non-empty file names (no path separators)
    /// and valid glob patterns.
    pub fn validate(&self) -> Result<()> {
        if self.base_dir.trim().is_empty() {
            bail!("'baseDir' must not be empty");
        }

        for file in &self.resource_files {
            if file.trim().is_empty() {
                bail!("Empty entry in 'resourceFiles'");
            }
            if file.contains('/') || file.contains('\\') {
                bail!(
                    "Invalid entry in 'resourceFiles': \"{}\" (expected a file name, not a path)",
                    file
                );
            }
            Pattern::new(file)
                .with_context(|| format!("Invalid glob pattern in 'resourceFiles': \"{}\"", file))?;
        }

        Ok(())
    }

    pub fn resource_file_patterns(&self) -> Result<Vec<Pattern>> {
        self.resource_files
            .iter()
            .map(|file| {
                Pattern::new(file)
                    .with_context(|| format!("Invalid glob pattern in 'resourceFiles': \"{}\"", file))
            })
            .collect()
    }

    pub fn ignored_key_set(&self) -> HashSet<String> {
        self.ignored_keys.iter().cloned().collect()
    }

    /// Append CLI-supplied files and ignored keys, skipping duplicates.
    pub fn extend(&mut self, resource_files: &[String], ignored_keys: &[String]) {
        for file in resource_files {
            if !self.resource_files.contains(file) {
                self.resource_files.push(file.clone());
            }
        }
        for key in ignored_keys {
            if !self.ignored_keys.contains(key) {
                self.ignored_keys.push(key.clone());
            }
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
