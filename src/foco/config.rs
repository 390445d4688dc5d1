use crate::error::{FocoError, Result};
use crate::format::{is_valid_pattern, DEFAULT_EDITION_PATTERN};
use crate::listing::SortOrder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for foco, stored in `<store>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FocoConfig {
    /// Order used by `list` when no `--sort` is given
    #[serde(default = "default_sort")]
    pub default_sort: SortOrder,

    /// strftime pattern for last-edition timestamps
    #[serde(default = "default_edition_pattern")]
    pub edition_time_pattern: String,

    /// Extensions to look for when importing directories (e.g. ".md", ".txt")
    #[serde(default = "default_import_ext")]
    pub import_extensions: Vec<String>,
}

fn default_sort() -> SortOrder {
    SortOrder::Edited
}

fn default_edition_pattern() -> String {
    DEFAULT_EDITION_PATTERN.to_string()
}

fn default_import_ext() -> Vec<String> {
    vec![".txt".to_string(), ".md".to_string(), ".text".to_string()]
}

impl Default for FocoConfig {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
            edition_time_pattern: default_edition_pattern(),
            import_extensions: default_import_ext(),
        }
    }
}

/// Keys accepted by `foco config <key> [value]`.
pub const CONFIG_KEYS: [&str; 3] = ["default-sort", "edition-time-pattern", "import-extensions"];

impl FocoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FocoError::Io)?;
        let config: FocoConfig =
            serde_json::from_str(&content).map_err(FocoError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FocoError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FocoError::Serialization)?;
        fs::write(config_path, content).map_err(FocoError::Io)?;
        Ok(())
    }

    /// Current value of a key, rendered as text
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "default-sort" => Ok(self.default_sort.to_string()),
            "edition-time-pattern" => Ok(self.edition_time_pattern.clone()),
            "import-extensions" => Ok(self.import_extensions.join(",")),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-sort" => self.default_sort = value.parse()?,
            "edition-time-pattern" => {
                if !is_valid_pattern(value) {
                    return Err(FocoError::Api(format!(
                        "Invalid time pattern: {}",
                        value
                    )));
                }
                self.edition_time_pattern = value.to_string();
            }
            "import-extensions" => self.set_import_extensions(value),
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// Set import extensions from a comma separated list (normalizes to start with a dot)
    pub fn set_import_extensions(&mut self, list: &str) {
        self.import_extensions = list
            .split(',')
            .map(str::trim)
            .filter(|ext| !ext.is_empty())
            .map(|ext| {
                if ext.starts_with('.') {
                    ext.to_string()
                } else {
                    format!(".{}", ext)
                }
            })
            .collect();
    }
}

fn unknown_key(key: &str) -> FocoError {
    FocoError::Api(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
