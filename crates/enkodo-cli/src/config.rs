//! `enkodo.toml` support and merging with command line flags. Flags always take precedence over
//! the file.
//!
//! # Example config
//!
//! ```toml
//! suffix = "_wire"
//! keep_going = true
//!
//! [aliases]
//! UserId = "u64"
//! Timestamp = "i64"
//! # Aliases may point at other aliases.
//! AccountId = "UserId"
//! ```

use std::{
    collections::BTreeMap,
    path::{
        Path,
        PathBuf,
    },
};

use anyhow::{
    ensure,
    Context,
};
use enkodo_codegen::render::registry::ConverterRegistry;
use serde::Deserialize;

use crate::cli::Cli;

pub const CONFIG_FILE_NAME: &str = "enkodo.toml";
pub const DEFAULT_SUFFIX: &str = "_enkodo";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub suffix: Option<String>,

    #[serde(default)]
    pub stdout: bool,

    #[serde(default)]
    pub keep_going: bool,

    /// Extra registry names, each pointing at an existing converter name.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl FileConfig {
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
    }
}

/// Everything one run needs, after merging the config file with the command line.
#[derive(Debug)]
pub struct Settings {
    pub root: PathBuf,
    pub suffix: String,
    pub stdout: bool,
    pub keep_going: bool,
    pub registry: ConverterRegistry,
}

impl Settings {
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => {
                let default = default_config_path(&cli.path);
                if default.is_file() {
                    tracing::info!(path = %default.display(), "using config");
                    FileConfig::load(&default)?
                } else {
                    FileConfig::default()
                }
            }
        };

        Self::merge(cli, file)
    }

    fn merge(cli: &Cli, file: FileConfig) -> anyhow::Result<Self> {
        let mut registry = ConverterRegistry::builtin();
        registry.alias_all(
            file.aliases
                .iter()
                .map(|(alias, target)| (alias.as_str(), target.as_str())),
        )?;

        let suffix = cli
            .suffix
            .clone()
            .or(file.suffix)
            .unwrap_or_else(|| DEFAULT_SUFFIX.to_string());
        // An empty suffix would write artifacts over their own sources.
        ensure!(!suffix.is_empty(), "the artifact suffix must not be empty");

        Ok(Self {
            root: cli.path.clone(),
            suffix,
            stdout: cli.to_stdout() || file.stdout,
            keep_going: cli.keep_going || file.keep_going,
            registry,
        })
    }
}

/// `<PATH>/enkodo.toml` for a directory, or the sibling `enkodo.toml` for a single file.
fn default_config_path(root: &Path) -> PathBuf {
    if root.is_dir() {
        root.join(CONFIG_FILE_NAME)
    } else {
        root.with_file_name(CONFIG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use enkodo_codegen::render::converter::Converter;
    use tempfile::TempDir;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(["enkodo"].iter().chain(args)).unwrap()
    }

    #[test]
    fn an_empty_config_is_all_defaults() {
        assert_eq!(FileConfig::parse("").unwrap(), FileConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::parse("sufix = \"_wire\"").is_err());
    }

    #[test]
    fn flags_win_over_the_file() {
        let file = FileConfig::parse(
            r#"
            suffix = "_wire"
            keep_going = true

            [aliases]
            UserId = "u64"
            "#,
        )
        .unwrap();

        let settings = Settings::merge(&cli(&["./src", "--suffix", "_gen"]), file.clone()).unwrap();
        assert_eq!(settings.suffix, "_gen");
        assert!(settings.keep_going);
        assert!(!settings.stdout);
        assert_eq!(settings.registry.lookup("UserId"), Some(Converter::Uint64));

        let settings = Settings::merge(&cli(&["./src", "-"]), file).unwrap();
        assert_eq!(settings.suffix, "_wire");
        assert!(settings.stdout);
    }

    #[test]
    fn the_default_suffix_applies_without_flag_or_file() {
        let settings = Settings::merge(&cli(&["./src"]), FileConfig::default()).unwrap();
        assert_eq!(settings.suffix, DEFAULT_SUFFIX);
    }

    #[test]
    fn invalid_settings_are_errors() {
        let err = Settings::merge(&cli(&["./src", "--suffix", ""]), FileConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("must not be empty"));

        let file = FileConfig::parse("[aliases]\nUserId = \"u128\"").unwrap();
        let err = Settings::merge(&cli(&["./src"]), file).unwrap_err();
        assert!(err.to_string().contains("`UserId` cannot alias `u128`"));
    }

    #[test]
    fn chained_aliases_do_not_depend_on_key_order() {
        let file = FileConfig::parse("[aliases]\nId = \"UserId\"\nUserId = \"u64\"").unwrap();

        let settings = Settings::merge(&cli(&["./src"]), file).unwrap();
        assert_eq!(settings.registry.lookup("Id"), Some(Converter::Uint64));
    }

    #[test]
    fn the_config_next_to_the_root_is_picked_up() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "suffix = \"_wire\"").unwrap();
        let root = dir.path().to_str().unwrap();

        let settings = Settings::resolve(&cli(&[root])).unwrap();
        assert_eq!(settings.suffix, "_wire");
    }
}
