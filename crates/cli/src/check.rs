// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use acirfx_config::AppConfig;
use anyhow::{Context, Result};

use crate::cli::FixtureSource;
use crate::helpers::format::witness_ranges;
use crate::source;

pub async fn execute(source: &FixtureSource, config: &AppConfig) -> Result<()> {
    let fixture = source::resolve(source, config).await?;
    let report = fixture
        .check()
        .with_context(|| format!("Fixture '{}' failed its integrity check", fixture.name))?;

    println!("=== {} ===\n", report.name);
    println!(
        "Bytecode: {} bytes ({} decompressed)",
        report.compressed_len, report.payload_len
    );
    println!("Opcodes: {}", report.opcodes);
    if !report.black_box_calls.is_empty() {
        println!("Black box calls: {}", report.black_box_calls.join(", "));
    }
    println!("Current witness index: {}", report.current_witness_index);
    println!("Inputs: {}", report.inputs);

    let outputs: Vec<u32> = report.outputs.keys().map(|w| w.witness_index()).collect();
    println!("Outputs: {}", witness_ranges(&outputs));
    for (witness, value) in report.outputs.iter() {
        println!("  {} = {}", witness.witness_index(), value);
    }

    println!("\nStatus: OK");
    Ok(())
}
