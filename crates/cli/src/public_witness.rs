// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use acirfx_acir::native_types::WitnessMap;
use acirfx_acir::{get_public_parameters_witness, get_return_witness};
use acirfx_config::AppConfig;
use anyhow::Result;

use crate::cli::FixtureSource;
use crate::source;

fn print_section(title: &str, witness_map: &WitnessMap) {
    println!("{}:", title);
    if witness_map.is_empty() {
        println!("  (none)");
    }
    for (index, value) in witness_map.to_hex_entries() {
        println!("  {}: {}", index, value);
    }
}

pub async fn execute(source: &FixtureSource, config: &AppConfig) -> Result<()> {
    let fixture = source::resolve(source, config).await?;
    let circuit = fixture.circuit()?;

    let parameters = get_public_parameters_witness(&circuit, &fixture.expected_witness)?;
    let returns = get_return_witness(&circuit, &fixture.expected_witness)?;

    print_section("Public parameters", &parameters);
    print_section("Return values", &returns);
    Ok(())
}
