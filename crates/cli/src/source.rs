// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::Path;

use acirfx_config::AppConfig;
use acirfx_fixtures::{builtin, Fixture, FixtureArtifact, FixtureError};
use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::FixtureSource;

async fn read_artifact(path: &Path) -> Result<Fixture> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Could not read fixture artifact {}", path.display()))?;
    let fixture = FixtureArtifact::from_json(&contents)
        .and_then(FixtureArtifact::into_fixture)
        .with_context(|| format!("Invalid fixture artifact {}", path.display()))?;
    Ok(fixture)
}

/// Finds the fixture a command refers to: an explicit file, a builtin, or an
/// artifact in the fixtures dir, in that order.
pub async fn resolve(source: &FixtureSource, config: &AppConfig) -> Result<Fixture> {
    if let Some(file) = &source.file {
        debug!(file = %file.display(), "loading fixture from file");
        return read_artifact(file).await;
    }

    let name = source
        .name
        .as_deref()
        .unwrap_or(config.default_fixture.as_str());

    if let Some(fixture) = builtin(name)? {
        debug!(fixture = name, "using builtin fixture");
        return Ok(fixture);
    }

    let path = config.fixture_path(name);
    if tokio::fs::try_exists(&path).await? {
        return read_artifact(&path).await;
    }

    Err(FixtureError::NotFound(name.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use acirfx_fixtures::schnorr_verify;
    use tempfile::tempdir;

    fn config_in(dir: &Path) -> AppConfig {
        AppConfig {
            fixtures_dir: dir.to_path_buf(),
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn test_default_is_builtin() {
        let temp = tempdir().unwrap();
        let fixture = resolve(&FixtureSource::default(), &config_in(temp.path()))
            .await
            .unwrap();
        assert_eq!(fixture.name, schnorr_verify::NAME);
    }

    #[tokio::test]
    async fn test_named_artifact_in_fixtures_dir() {
        let temp = tempdir().unwrap();
        let mut fixture = schnorr_verify::fixture().unwrap();
        fixture.name = "copy".to_string();
        FixtureArtifact::from_fixture(&fixture)
            .save(&temp.path().join("copy.json"))
            .unwrap();

        let source = FixtureSource {
            name: Some("copy".to_string()),
            file: None,
        };
        let resolved = resolve(&source, &config_in(temp.path())).await.unwrap();
        assert_eq!(resolved, fixture);
    }

    #[tokio::test]
    async fn test_unknown_name() {
        let temp = tempdir().unwrap();
        let source = FixtureSource {
            name: Some("missing".to_string()),
            file: None,
        };
        let err = resolve(&source, &config_in(temp.path())).await.unwrap_err();
        assert_eq!(err.to_string(), "Fixture 'missing' not found");
    }
}
