// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Legacy ACIR circuit schema.
//!
//! A serialized circuit is a gzip stream wrapping the bincode encoding of
//! [`Circuit`]. Struct field order and enum variant order below are the wire
//! order and must not change.

mod opcodes;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compression::{gzip_compress, gzip_decompress};
use crate::error::Result;
use crate::native_types::Witness;

pub use opcodes::{BlackBoxFuncCall, FunctionInput, Opcode};

/// Position of an opcode, used to attach assertion messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OpcodeLocation {
    Acir(usize),
    Brillig { acir_index: usize, brillig_index: usize },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicInputs(pub BTreeSet<Witness>);

impl PublicInputs {
    pub fn indices(&self) -> Vec<u32> {
        self.0.iter().map(Witness::witness_index).collect()
    }

    pub fn contains(&self, index: u32) -> bool {
        self.0.contains(&Witness(index))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circuit {
    /// Highest witness index the circuit allocates.
    pub current_witness_index: u32,
    pub opcodes: Vec<Opcode>,
    pub private_parameters: BTreeSet<Witness>,
    pub public_parameters: PublicInputs,
    pub return_values: PublicInputs,
    pub assert_messages: Vec<(OpcodeLocation, String)>,
}

impl Circuit {
    /// Decodes a gzip-compressed circuit.
    pub fn read(bytecode: &[u8]) -> Result<Self> {
        let payload = gzip_decompress(bytecode)?;
        debug!(
            compressed = bytecode.len(),
            decompressed = payload.len(),
            "decompressed circuit bytecode"
        );
        Self::deserialize_payload(&payload)
    }

    /// Encodes and gzip-compresses the circuit at the default level.
    pub fn write(&self) -> Result<Vec<u8>> {
        let payload = self.serialize_payload()?;
        gzip_compress(&payload)
    }

    /// The uncompressed bincode payload.
    pub fn serialize_payload(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn deserialize_payload(payload: &[u8]) -> Result<Self> {
        let circuit: Circuit = bincode::deserialize(payload)?;
        debug!(
            opcodes = circuit.opcodes.len(),
            current_witness_index = circuit.current_witness_index,
            "decoded circuit"
        );
        Ok(circuit)
    }

    /// Witnesses the caller supplies: private and public parameters.
    pub fn circuit_arguments(&self) -> BTreeSet<Witness> {
        self.private_parameters
            .union(&self.public_parameters.0)
            .cloned()
            .collect()
    }

    /// Witnesses a verifier sees: public parameters and return values.
    pub fn public_inputs(&self) -> PublicInputs {
        let public_inputs = self
            .public_parameters
            .0
            .union(&self.return_values.0)
            .cloned()
            .collect();
        PublicInputs(public_inputs)
    }

    pub fn black_box_names(&self) -> Vec<&'static str> {
        self.opcodes
            .iter()
            .filter_map(|opcode| match opcode {
                Opcode::BlackBoxFuncCall(call) => Some(call.name()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native_types::Expression;
    use crate::{AcirError, FieldElement};

    fn and_circuit() -> Circuit {
        let and = Opcode::BlackBoxFuncCall(BlackBoxFuncCall::AND {
            lhs: FunctionInput {
                witness: Witness(1),
                num_bits: 4,
            },
            rhs: FunctionInput {
                witness: Witness(2),
                num_bits: 4,
            },
            output: Witness(3),
        });
        let assert_output = Opcode::Arithmetic(Expression {
            mul_terms: vec![],
            linear_combinations: vec![(FieldElement::one(), Witness(3))],
            q_c: FieldElement::from(4u128),
        });

        Circuit {
            current_witness_index: 3,
            opcodes: vec![and, assert_output],
            private_parameters: BTreeSet::from([Witness(1)]),
            public_parameters: PublicInputs(BTreeSet::from([Witness(2)])),
            return_values: PublicInputs(BTreeSet::from([Witness(3)])),
            assert_messages: vec![(OpcodeLocation::Acir(1), "bad and".to_string())],
        }
    }

    #[test]
    fn test_write_then_read() {
        let circuit = and_circuit();
        let bytecode = circuit.write().unwrap();

        assert_eq!(&bytecode[..4], &[0x1f, 0x8b, 0x08, 0x00]);
        assert_eq!(Circuit::read(&bytecode).unwrap(), circuit);
    }

    #[test]
    fn test_payload_layout() {
        let payload = Circuit::default().serialize_payload().unwrap();
        // u32 witness index followed by five empty u64-length sequences
        assert_eq!(payload.len(), 4 + 5 * 8);
        assert!(payload.iter().all(|b| *b == 0));
    }

    #[test]
    fn test_parameter_sets() {
        let circuit = and_circuit();

        assert_eq!(
            circuit.circuit_arguments(),
            BTreeSet::from([Witness(1), Witness(2)])
        );
        assert_eq!(circuit.public_inputs().indices(), vec![2, 3]);
        assert!(circuit.return_values.contains(3));
        assert!(!circuit.return_values.contains(u32::MAX));
        assert_eq!(circuit.black_box_names(), vec!["and"]);
        assert_eq!(circuit.opcodes[1].name(), "arithmetic");
    }

    #[test]
    fn test_public_inputs_contains_full_index_range() {
        let inputs = PublicInputs(BTreeSet::from([Witness(u32::MAX)]));
        assert!(inputs.contains(u32::MAX));
        assert!(!inputs.contains(0));
    }

    #[test]
    fn test_read_rejects_plain_bytes() {
        let payload = and_circuit().serialize_payload().unwrap();
        assert!(matches!(
            Circuit::read(&payload),
            Err(AcirError::Decompression(_))
        ));
    }

    #[test]
    fn test_unknown_opcode_tag_fails() {
        let mut payload = Circuit::default().serialize_payload().unwrap();
        // one opcode with tag 7
        payload[4..12].copy_from_slice(&1u64.to_le_bytes());
        payload.splice(12..12, 7u32.to_le_bytes());

        assert!(matches!(
            Circuit::deserialize_payload(&payload),
            Err(AcirError::Bincode(_))
        ));
    }
}
