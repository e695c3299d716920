// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use acirfx_acir::circuit::Circuit;
use acirfx_acir::native_types::{Witness, WitnessMap};
use acirfx_acir::{get_return_witness, gzip_compress, gzip_decompress, FieldElement};
use tracing::{debug, info};

use crate::error::{FixtureError, Result};

/// First witness index of a circuit's inputs.
const FIRST_WITNESS: u32 = 1;

/// A compressed circuit together with the witness it is solved from and the
/// witness it must solve to.
#[derive(Clone, Debug, PartialEq)]
pub struct Fixture {
    pub name: String,
    pub bytecode: Vec<u8>,
    pub initial_witness: WitnessMap,
    pub expected_witness: WitnessMap,
}

/// Summary of a fixture that passed [`Fixture::check`].
#[derive(Clone, Debug, PartialEq)]
pub struct FixtureReport {
    pub name: String,
    pub compressed_len: usize,
    pub payload_len: usize,
    pub current_witness_index: u32,
    pub opcodes: usize,
    pub black_box_calls: Vec<&'static str>,
    pub inputs: usize,
    pub outputs: WitnessMap,
}

impl Fixture {
    pub fn new(
        name: impl Into<String>,
        bytecode: Vec<u8>,
        initial_witness: WitnessMap,
        expected_witness: WitnessMap,
    ) -> Self {
        Self {
            name: name.into(),
            bytecode,
            initial_witness,
            expected_witness,
        }
    }

    /// Copies `initial` and inserts the single computed output.
    pub fn derive_expected(
        initial: &WitnessMap,
        witness: Witness,
        value: FieldElement,
    ) -> Result<WitnessMap> {
        if initial.contains_key(&witness) {
            return Err(FixtureError::WitnessAlreadyPresent(witness.witness_index()));
        }
        let mut expected = initial.clone();
        expected.insert(witness, value);
        Ok(expected)
    }

    pub fn circuit(&self) -> Result<Circuit> {
        Ok(Circuit::read(&self.bytecode)?)
    }

    /// Verifies the fixture data against itself and against the circuit it carries.
    ///
    /// Checks, in order: the bytecode decompresses and decodes; the decoded
    /// circuit re-serializes to the same payload and recompresses to the same
    /// bytecode; the initial witness is keyed `1..=n` and matches the
    /// circuit arguments; the expected witness is the initial witness plus one
    /// entry, and that entry is the circuit's return value.
    pub fn check(&self) -> Result<FixtureReport> {
        let payload = gzip_decompress(&self.bytecode)?;
        let circuit = Circuit::deserialize_payload(&payload)?;
        debug!(fixture = %self.name, payload_len = payload.len(), "decoded fixture circuit");

        if circuit.serialize_payload()? != payload {
            return Err(FixtureError::PayloadMismatch);
        }

        if gzip_compress(&payload)? != self.bytecode {
            return Err(FixtureError::BytecodeMismatch);
        }

        if self.initial_witness.is_empty() {
            return Err(FixtureError::EmptyWitness);
        }
        if !self.initial_witness.is_contiguous_from(FIRST_WITNESS) {
            return Err(FixtureError::NotContiguous {
                start: FIRST_WITNESS,
            });
        }

        let arguments: Vec<u32> = circuit
            .circuit_arguments()
            .iter()
            .map(Witness::witness_index)
            .collect();
        let provided: Vec<u32> = self
            .initial_witness
            .keys()
            .map(Witness::witness_index)
            .collect();
        if arguments != provided {
            return Err(FixtureError::ArgumentMismatch {
                circuit: arguments,
                witness: provided,
            });
        }

        let changed = self.initial_witness.difference(&self.expected_witness);
        let added = self.expected_witness.difference(&self.initial_witness);
        if added.len() != 1 || !changed.is_empty() {
            return Err(FixtureError::ExpectedMismatch {
                added: added.len(),
                changed: changed.len(),
            });
        }

        let added_indices: Vec<u32> = added.keys().map(Witness::witness_index).collect();
        let returns = circuit.return_values.indices();
        if added_indices != returns {
            return Err(FixtureError::ReturnWitnessMismatch {
                added: added_indices,
                returns,
            });
        }

        let outputs = get_return_witness(&circuit, &self.expected_witness)?;
        info!(fixture = %self.name, opcodes = circuit.opcodes.len(), "fixture integrity verified");

        Ok(FixtureReport {
            name: self.name.clone(),
            compressed_len: self.bytecode.len(),
            payload_len: payload.len(),
            current_witness_index: circuit.current_witness_index,
            opcodes: circuit.opcodes.len(),
            black_box_calls: circuit.black_box_names(),
            inputs: self.initial_witness.len(),
            outputs,
        })
    }
}
