//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the
//! [`GeneratorOptions`] slice of it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `STAMP__<SECTION>__<KEY>` environment variables
//! 3. `.stamp.toml` in the project root (`--root`, else the current directory)
//! 4. The `--config` file, or the user config file when present
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use stamp_core::domain::GeneratorOptions;

use crate::cli::OutputFormat;

/// File name of the per-project configuration.
pub const LOCAL_CONFIG_FILE: &str = ".stamp.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// What gets generated.
    pub generator: GeneratorOptions,
    /// Output settings.
    pub output: OutputConfig,
    /// Editor used by `--open`.
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Command line to open a file, e.g. `code --reuse-window`. Falls back
    /// to `$VISUAL`, then `$EDITOR`.
    pub command: Option<String>,
}

impl EditorConfig {
    /// The configured command, or the one from the environment.
    pub fn resolve(&self) -> Option<String> {
        self.command
            .clone()
            .or_else(|| std::env::var("VISUAL").ok())
            .or_else(|| std::env::var("EDITOR").ok())
            .filter(|c| !c.trim().is_empty())
    }
}

impl AppConfig {
    /// Load configuration on top of the built-in defaults.
    ///
    /// An explicit `config_file` must exist; the default locations are
    /// optional. `.stamp.toml` is looked up in `project_root` when given.
    pub fn load(config_file: Option<&Path>, project_root: Option<&Path>) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let mut builder = Config::builder().add_source(defaults);

        builder = match config_file {
            Some(path) => builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(true),
            ),
            None => builder.add_source(
                File::from(Self::config_path())
                    .format(FileFormat::Toml)
                    .required(false),
            ),
        };

        let config = builder
            .add_source(
                File::from(Self::local_path(project_root))
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("STAMP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// `.stamp.toml` inside `project_root`, or in the current directory.
    pub fn local_path(project_root: Option<&Path>) -> PathBuf {
        match project_root {
            Some(root) => root.join(LOCAL_CONFIG_FILE),
            None => PathBuf::from(LOCAL_CONFIG_FILE),
        }
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stamp.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stamp", "stamp")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Look up a dotted key for `stamp config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "generator.include_spec" => self.generator.include_spec.to_string(),
            "generator.include_story" => self.generator.include_story.to_string(),
            "generator.include_index" => self.generator.include_index.to_string(),
            "generator.component_dir" => self.generator.component_dir.clone(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => format!("{:?}", self.output.format).to_lowercase(),
            "editor.command" => self.editor.command.clone().unwrap_or_default(),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_generator_defaults() {
        let cfg = AppConfig::default();
        assert!(cfg.generator.include_index);
        assert!(!cfg.generator.include_spec);
        assert_eq!(cfg.generator.component_dir, "src/components");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("stamp.toml");
        std::fs::write(
            &path,
            "[generator]\ninclude_spec = true\ncomponent_dir = \"app/ui\"\n\n[editor]\ncommand = \"code\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(path.as_path()), None).unwrap();
        assert!(cfg.generator.include_spec);
        assert!(cfg.generator.include_index);
        assert_eq!(cfg.generator.component_dir, "app/ui");
        assert_eq!(cfg.editor.command.as_deref(), Some("code"));
    }

    #[test]
    fn local_file_is_read_from_project_root() {
        let tmp = TempDir::new().unwrap();
        let explicit = tmp.path().join("stamp.toml");
        std::fs::write(&explicit, "[generator]\ninclude_spec = true\n").unwrap();
        let root = tmp.path().join("acme-web");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(
            root.join(LOCAL_CONFIG_FILE),
            "[generator]\ncomponent_dir = \"lib/ui\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(explicit.as_path()), Some(root.as_path())).unwrap();
        assert_eq!(cfg.generator.component_dir, "lib/ui");
        assert!(cfg.generator.include_spec);
    }

    #[test]
    fn local_path_defaults_to_current_directory() {
        assert_eq!(AppConfig::local_path(None), PathBuf::from(LOCAL_CONFIG_FILE));
        assert_eq!(
            AppConfig::local_path(Some(Path::new("/work/app"))),
            Path::new("/work/app").join(LOCAL_CONFIG_FILE)
        );
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let tmp = TempDir::new().unwrap();
        assert!(AppConfig::load(Some(tmp.path().join("nope.toml").as_path()), None).is_err());
    }

    #[test]
    fn malformed_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("stamp.toml");
        std::fs::write(&path, "[generator]\ninclude_spec = \"sometimes\"\n").unwrap();
        assert!(AppConfig::load(Some(path.as_path()), None).is_err());
    }

    #[test]
    fn default_config_serialises_to_toml() {
        let toml = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(toml.contains("[generator]"));
        assert!(toml.contains("component_dir"));
    }

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("generator.include_index").as_deref(), Some("true"));
        assert_eq!(cfg.get("output.format").as_deref(), Some("auto"));
        assert_eq!(cfg.get("editor.command").as_deref(), Some(""));
    }

    #[test]
    fn get_unknown_key() {
        assert!(AppConfig::default().get("does.not.exist").is_none());
    }

    #[test]
    fn editor_config_prefers_explicit_command() {
        let editor = EditorConfig {
            command: Some("code -r".into()),
        };
        assert_eq!(editor.resolve().as_deref(), Some("code -r"));
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
