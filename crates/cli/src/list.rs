// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use acirfx_config::AppConfig;
use acirfx_fixtures::BUILTIN_FIXTURES;
use anyhow::Result;

pub async fn execute(config: &AppConfig) -> Result<()> {
    println!("Builtin:");
    for name in BUILTIN_FIXTURES {
        println!("  {}", name);
    }

    println!();
    println!("In {}:", config.fixtures_dir.display());

    let mut artifacts = Vec::new();
    if tokio::fs::try_exists(&config.fixtures_dir).await? {
        let mut entries = tokio::fs::read_dir(&config.fixtures_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem() {
                    artifacts.push(stem.to_string_lossy().into_owned());
                }
            }
        }
    }
    artifacts.sort();

    if artifacts.is_empty() {
        println!("  (none)");
    }
    for name in artifacts {
        println!("  {}", name);
    }

    Ok(())
}
