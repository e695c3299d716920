// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::Path;

use acirfx_config::AppConfig;
use acirfx_fixtures::FixtureArtifact;
use anyhow::{Context, Result};
use tracing::info;

use crate::cli::FixtureSource;
use crate::source;

pub async fn execute(source: &FixtureSource, config: &AppConfig, out: &Path) -> Result<()> {
    let fixture = source::resolve(source, config).await?;
    let contents = FixtureArtifact::from_fixture(&fixture).to_file_contents()?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(out, contents)
        .await
        .with_context(|| format!("Could not write {}", out.display()))?;

    info!(fixture = %fixture.name, out = %out.display(), "fixture exported");
    println!("Wrote {} to {}", fixture.name, out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use acirfx_fixtures::schnorr_verify;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_export_matches_saved_artifact() {
        let temp = tempdir().unwrap();
        let config = AppConfig {
            fixtures_dir: temp.path().to_path_buf(),
            ..AppConfig::default()
        };
        let out = temp.path().join("out").join("schnorr_verify.json");
        execute(&FixtureSource::default(), &config, &out)
            .await
            .unwrap();

        let saved = temp.path().join("saved.json");
        FixtureArtifact::from_fixture(&schnorr_verify::fixture().unwrap())
            .save(&saved)
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            std::fs::read_to_string(&saved).unwrap()
        );
    }
}
