// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use acirfx_acir::circuit::Opcode;
use acirfx_config::AppConfig;
use anyhow::Result;

use crate::cli::FixtureSource;
use crate::helpers::format::witness_ranges;
use crate::source;

pub async fn execute(source: &FixtureSource, config: &AppConfig) -> Result<()> {
    let fixture = source::resolve(source, config).await?;
    let circuit = fixture.circuit()?;

    println!("=== {} ===\n", fixture.name);
    println!("Current witness index: {}", circuit.current_witness_index);

    let private: Vec<u32> = circuit
        .private_parameters
        .iter()
        .map(|w| w.witness_index())
        .collect();
    println!("Private parameters: {}", witness_ranges(&private));
    println!(
        "Public parameters: {}",
        witness_ranges(&circuit.public_parameters.indices())
    );
    println!(
        "Return values: {}",
        witness_ranges(&circuit.return_values.indices())
    );

    println!("\nOpcodes:");
    for (index, opcode) in circuit.opcodes.iter().enumerate() {
        match opcode {
            Opcode::Arithmetic(expr) => {
                let witnesses: Vec<u32> =
                    expr.witnesses().iter().map(|w| w.witness_index()).collect();
                println!(
                    "  [{}] {} over {}",
                    index,
                    opcode.name(),
                    witness_ranges(&witnesses)
                );
            }
            Opcode::BlackBoxFuncCall(call) => {
                let inputs: Vec<u32> = call
                    .get_inputs_vec()
                    .iter()
                    .map(|input| input.witness.witness_index())
                    .collect();
                let outputs: Vec<u32> = call
                    .get_outputs_vec()
                    .iter()
                    .map(|w| w.witness_index())
                    .collect();
                println!(
                    "  [{}] {}({}) -> {}",
                    index,
                    call.name(),
                    witness_ranges(&inputs),
                    witness_ranges(&outputs)
                );
            }
        }
    }

    for (location, message) in &circuit.assert_messages {
        println!("  {:?}: {}", location, message);
    }

    Ok(())
}
