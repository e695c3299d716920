// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment, Source,
};
use path_clean::clean;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::load_config::{find_in_parent, resolve_config_path, FindInParent};

pub const DEFAULT_CONFIG_NAME: &str = "acirfx.config.yaml";
pub const ENV_PREFIX: &str = "ACIRFX_";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding `<name>.json` fixture artifacts
    pub fixtures_dir: PathBuf,
    /// Fixture used when a command does not name one
    pub default_fixture: String,
    /// The config file that was read, if any
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fixtures_dir: PathBuf::from("fixtures"),
            default_fixture: "schnorr_verify".to_string(),
            config_file: None,
        }
    }
}

impl AppConfig {
    /// Location of the artifact for `name` inside the fixtures dir.
    pub fn fixture_path(&self, name: &str) -> PathBuf {
        self.fixtures_dir.join(format!("{name}.json"))
    }
}

/// Values given on the command line. They override every other layer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CliOverrides {
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixtures_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_fixture: Option<String>,
}

/// Loads the config from the current directory.
pub fn load_config(overrides: CliOverrides) -> Result<AppConfig> {
    load_config_from(
        find_in_parent,
        &env::current_dir()?,
        &OsDirs::config_dir(),
        overrides,
    )
}

/// Layers defaults, the YAML file, `ACIRFX_*` env vars and CLI overrides.
///
/// A missing file is fine unless it was named explicitly. A relative
/// `fixtures_dir` from the YAML file is resolved against that file's
/// directory; one from the environment, the CLI or the defaults is resolved
/// against `cwd`.
pub fn load_config_from(
    find: FindInParent,
    cwd: &Path,
    default_config_dir: &Path,
    overrides: CliOverrides,
) -> Result<AppConfig> {
    let path = resolve_config_path(
        find,
        cwd,
        default_config_dir,
        DEFAULT_CONFIG_NAME,
        overrides.config_file.as_deref(),
    );

    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
    let config_file = if path.is_file() {
        figment = figment.merge(Yaml::file(&path));
        Some(path)
    } else if overrides.config_file.is_some() {
        bail!("Configuration file {} not found", path.display());
    } else {
        None
    };

    let figment = figment
        .merge(Env::prefixed(ENV_PREFIX).only(&["fixtures_dir", "default_fixture"]))
        .merge(Serialized::defaults(&overrides));
    let mut config: AppConfig = figment
        .extract()
        .context("Could not parse configuration")?;

    if config.fixtures_dir.is_relative() {
        // Only a value read from the YAML file is relative to that file.
        let source = figment
            .find_metadata("fixtures_dir")
            .and_then(|metadata| metadata.source.as_ref());
        let base = match source {
            Some(Source::File(file)) => file.parent().unwrap_or(cwd),
            _ => cwd,
        };
        config.fixtures_dir = clean(base.join(&config.fixtures_dir));
    }
    config.config_file = config_file;

    debug!(config = ?config, "configuration loaded");
    Ok(config)
}

pub struct OsDirs;

impl OsDirs {
    /// `~/.config/acirfx` or the platform equivalent. Falls back to the
    /// working directory on systems without a config dir.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("acirfx"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn not_found(_: &Path, _: &str) -> Option<PathBuf> {
        None
    }

    fn load(jail: &Jail, overrides: CliOverrides) -> Result<AppConfig, figment::Error> {
        load_config_from(
            find_in_parent,
            jail.directory(),
            &jail.directory().join("no-such-dir"),
            overrides,
        )
        .map_err(|e| figment::Error::from(format!("{e:#}")))
    }

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|jail| {
            let config = load_config_from(
                not_found,
                jail.directory(),
                &jail.directory().join("none"),
                CliOverrides::default(),
            )
            .map_err(|e| figment::Error::from(e.to_string()))?;

            assert_eq!(config.default_fixture, "schnorr_verify");
            assert_eq!(config.fixtures_dir, jail.directory().join("fixtures"));
            assert!(config.config_file.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_yaml_is_relative_to_config_file() {
        Jail::expect_with(|jail| {
            jail.create_dir("conf")?;
            jail.create_file(
                "conf/acirfx.config.yaml",
                r#"
fixtures_dir: "./data"
default_fixture: "and"
"#,
            )?;

            let config = load(
                jail,
                CliOverrides {
                    config_file: Some(PathBuf::from("conf/acirfx.config.yaml")),
                    ..Default::default()
                },
            )?;

            assert_eq!(config.default_fixture, "and");
            assert_eq!(config.fixtures_dir, jail.directory().join("conf").join("data"));
            assert_eq!(
                config.config_file,
                Some(jail.directory().join("conf/acirfx.config.yaml"))
            );
            Ok(())
        });
    }

    #[test]
    fn test_env_then_cli_precedence() {
        Jail::expect_with(|jail| {
            jail.create_file(DEFAULT_CONFIG_NAME, "default_fixture: from_yaml\n")?;
            jail.set_env("ACIRFX_DEFAULT_FIXTURE", "from_env");
            jail.set_env("ACIRFX_FIXTURES_DIR", "/abs/fixtures");

            let config = load(jail, CliOverrides::default())?;
            assert_eq!(config.default_fixture, "from_env");
            assert_eq!(config.fixtures_dir, PathBuf::from("/abs/fixtures"));

            let config = load(
                jail,
                CliOverrides {
                    default_fixture: Some("from_cli".to_string()),
                    fixtures_dir: Some(PathBuf::from("local")),
                    ..Default::default()
                },
            )?;
            assert_eq!(config.default_fixture, "from_cli");
            assert_eq!(config.fixtures_dir, jail.directory().join("local"));
            Ok(())
        });
    }

    #[test]
    fn test_relative_env_dir_is_relative_to_cwd() {
        Jail::expect_with(|jail| {
            jail.create_dir("conf")?;
            jail.create_file("conf/acirfx.config.yaml", "fixtures_dir: data\n")?;
            jail.set_env("ACIRFX_FIXTURES_DIR", "from_env");

            let config = load(
                jail,
                CliOverrides {
                    config_file: Some(PathBuf::from("conf/acirfx.config.yaml")),
                    ..Default::default()
                },
            )?;
            assert_eq!(config.fixtures_dir, jail.directory().join("from_env"));
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        Jail::expect_with(|jail| {
            let result = load(
                jail,
                CliOverrides {
                    config_file: Some(PathBuf::from("nope.yaml")),
                    ..Default::default()
                },
            );
            assert!(result.is_err());
            Ok(())
        });
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file(DEFAULT_CONFIG_NAME, "fixtures_dir: [unclosed\n")?;
            assert!(load(jail, CliOverrides::default()).is_err());
            Ok(())
        });
    }
}
