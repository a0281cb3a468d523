use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".intlxrc.json";

/// Extension appended to `fileName` for the emitted catalog.
pub const CATALOG_EXTENSION: &str = ".properties";

pub const DEFAULT_MODULE_SOURCE_NAME: &str = "react-intl";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_module_source_name")]
    pub module_source_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages_dir: Option<String>,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default)]
    pub enforce_descriptions: bool,
    #[serde(default = "default_component_names")]
    pub component_names: Vec<String>,
    #[serde(default = "default_plural_component_names")]
    pub plural_component_names: Vec<String>,
    #[serde(default = "default_function_names")]
    pub function_names: Vec<String>,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
}

fn default_module_source_name() -> String {
    DEFAULT_MODULE_SOURCE_NAME.to_string()
}

fn default_file_name() -> String {
    "messages".to_string()
}

fn default_component_names() -> Vec<String> {
    ["FormattedMessage", "FormattedHTMLMessage"]
        .map(String::from)
        .to_vec()
}

fn default_plural_component_names() -> Vec<String> {
    vec!["FormattedPlural".to_string()]
}

fn default_function_names() -> Vec<String> {
    vec!["defineMessages".to_string()]
}

fn default_includes() -> Vec<String> {
    vec!["src".to_string()]
}

fn default_ignore_test_files() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            module_source_name: default_module_source_name(),
            messages_dir: None,
            file_name: default_file_name(),
            namespace: None,
            enforce_descriptions: false,
            component_names: default_component_names(),
            plural_component_names: default_plural_component_names(),
            function_names: default_function_names(),
            includes: default_includes(),
            ignores: Vec::new(),
            ignore_test_files: default_ignore_test_files(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` or `includes` are
    /// invalid, or if `fileName`/`moduleSourceName` is empty.
    pub fn validate(&self) -> Result<()> {
        if self.file_name.trim().is_empty() {
            bail!("'fileName' must not be empty");
        }
        if self.module_source_name.trim().is_empty() {
            bail!("'moduleSourceName' must not be empty");
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Includes without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }

    /// The namespace filter, with an empty string meaning "no namespace".
    pub fn effective_namespace(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|ns| !ns.is_empty())
    }

    /// Name of the catalog file inside `messagesDir`.
    pub fn catalog_file_name(&self) -> String {
        format!("{}{}", self.file_name, CATALOG_EXTENSION)
    }

    /// Absolute catalog directory, resolving a relative `messagesDir`
    /// against `root`.
    pub fn resolve_messages_dir(&self, root: &Path) -> Option<PathBuf> {
        self.messages_dir.as_ref().map(|dir| {
            let dir = Path::new(dir);
            if dir.is_absolute() {
                dir.to_path_buf()
            } else {
                root.join(dir)
            }
        })
    }
}

/// Command-line values applied over the loaded config.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub messages_dir: Option<String>,
    pub file_name: Option<String>,
    pub namespace: Option<String>,
    /// Only ever turns enforcement on.
    pub enforce_descriptions: bool,
    pub module_source_name: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.messages_dir {
            config.messages_dir = Some(dir.clone());
        }
        if let Some(file_name) = &self.file_name {
            config.file_name = file_name.clone();
        }
        if let Some(namespace) = &self.namespace {
            config.namespace = Some(namespace.clone());
        }
        if self.enforce_descriptions {
            config.enforce_descriptions = true;
        }
        if let Some(module) = &self.module_source_name {
            config.module_source_name = module.clone();
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
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
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
