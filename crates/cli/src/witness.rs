// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::collections::BTreeMap;

use acirfx_config::AppConfig;
use anyhow::Result;

use crate::cli::FixtureSource;
use crate::source;

pub async fn execute(
    source: &FixtureSource,
    config: &AppConfig,
    expected: bool,
    json: bool,
) -> Result<()> {
    let fixture = source::resolve(source, config).await?;
    let witness_map = if expected {
        &fixture.expected_witness
    } else {
        &fixture.initial_witness
    };

    if json {
        let entries: BTreeMap<u32, String> = witness_map.to_hex_entries().into_iter().collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for (index, value) in witness_map.to_hex_entries() {
        println!("{:>4}: {}", index, value);
    }
    Ok(())
}
