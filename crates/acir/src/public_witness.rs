// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::collections::BTreeSet;

use crate::circuit::Circuit;
use crate::error::{AcirError, Result};
use crate::native_types::{Witness, WitnessMap};

fn extract_indices(witness_map: &WitnessMap, indices: &BTreeSet<Witness>) -> Result<WitnessMap> {
    indices
        .iter()
        .map(|witness| {
            witness_map
                .get(witness)
                .map(|value| (*witness, *value))
                .ok_or(AcirError::MissingWitness(witness.witness_index()))
        })
        .collect()
}

/// Values the circuit returns, taken from a solved witness map.
pub fn get_return_witness(circuit: &Circuit, solved_witness: &WitnessMap) -> Result<WitnessMap> {
    extract_indices(solved_witness, &circuit.return_values.0)
}

pub fn get_public_parameters_witness(
    circuit: &Circuit,
    solved_witness: &WitnessMap,
) -> Result<WitnessMap> {
    extract_indices(solved_witness, &circuit.public_parameters.0)
}

/// Public parameters and return values together.
pub fn get_public_witness(circuit: &Circuit, solved_witness: &WitnessMap) -> Result<WitnessMap> {
    extract_indices(solved_witness, &circuit.public_inputs().0)
}
