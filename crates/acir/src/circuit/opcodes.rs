// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use serde::{Deserialize, Serialize};

use crate::native_types::{Expression, Witness};

/// A witness fed into a black box function together with its bit size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionInput {
    pub witness: Witness,
    pub num_bits: u32,
}

/// Opcodes understood by this crate.
///
/// Variant order is the serialization tag, so new variants may only be appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opcode {
    Arithmetic(Expression),
    BlackBoxFuncCall(BlackBoxFuncCall),
}

impl Opcode {
    pub fn name(&self) -> &'static str {
        match self {
            Opcode::Arithmetic(_) => "arithmetic",
            Opcode::BlackBoxFuncCall(call) => call.name(),
        }
    }
}

/// Calls to functions the backend implements natively.
///
/// Variant order is the serialization tag.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlackBoxFuncCall {
    AND {
        lhs: FunctionInput,
        rhs: FunctionInput,
        output: Witness,
    },
    XOR {
        lhs: FunctionInput,
        rhs: FunctionInput,
        output: Witness,
    },
    RANGE {
        input: FunctionInput,
    },
    SHA256 {
        inputs: Vec<FunctionInput>,
        outputs: Vec<Witness>,
    },
    Blake2s {
        inputs: Vec<FunctionInput>,
        outputs: Vec<Witness>,
    },
    SchnorrVerify {
        public_key_x: FunctionInput,
        public_key_y: FunctionInput,
        signature: Vec<FunctionInput>,
        message: Vec<FunctionInput>,
        output: Witness,
    },
    Pedersen {
        inputs: Vec<FunctionInput>,
        domain_separator: u32,
        outputs: (Witness, Witness),
    },
    HashToField128Security {
        inputs: Vec<FunctionInput>,
        output: Witness,
    },
    EcdsaSecp256k1 {
        public_key_x: Vec<FunctionInput>,
        public_key_y: Vec<FunctionInput>,
        signature: Vec<FunctionInput>,
        hashed_message: Vec<FunctionInput>,
        output: Witness,
    },
    EcdsaSecp256r1 {
        public_key_x: Vec<FunctionInput>,
        public_key_y: Vec<FunctionInput>,
        signature: Vec<FunctionInput>,
        hashed_message: Vec<FunctionInput>,
        output: Witness,
    },
    FixedBaseScalarMul {
        input: FunctionInput,
        outputs: (Witness, Witness),
    },
    Keccak256 {
        inputs: Vec<FunctionInput>,
        outputs: Vec<Witness>,
    },
    Keccak256VariableLength {
        inputs: Vec<FunctionInput>,
        var_message_size: FunctionInput,
        outputs: Vec<Witness>,
    },
}

impl BlackBoxFuncCall {
    pub fn name(&self) -> &'static str {
        match self {
            BlackBoxFuncCall::AND { .. } => "and",
            BlackBoxFuncCall::XOR { .. } => "xor",
            BlackBoxFuncCall::RANGE { .. } => "range",
            BlackBoxFuncCall::SHA256 { .. } => "sha256",
            BlackBoxFuncCall::Blake2s { .. } => "blake2s",
            BlackBoxFuncCall::SchnorrVerify { .. } => "schnorr_verify",
            BlackBoxFuncCall::Pedersen { .. } => "pedersen",
            BlackBoxFuncCall::HashToField128Security { .. } => "hash_to_field_128_security",
            BlackBoxFuncCall::EcdsaSecp256k1 { .. } => "ecdsa_secp256k1",
            BlackBoxFuncCall::EcdsaSecp256r1 { .. } => "ecdsa_secp256r1",
            BlackBoxFuncCall::FixedBaseScalarMul { .. } => "fixed_base_scalar_mul",
            BlackBoxFuncCall::Keccak256 { .. } => "keccak256",
            BlackBoxFuncCall::Keccak256VariableLength { .. } => "keccak256",
        }
    }

    pub fn get_inputs_vec(&self) -> Vec<FunctionInput> {
        match self {
            BlackBoxFuncCall::SHA256 { inputs, .. }
            | BlackBoxFuncCall::Blake2s { inputs, .. }
            | BlackBoxFuncCall::Keccak256 { inputs, .. }
            | BlackBoxFuncCall::Pedersen { inputs, .. }
            | BlackBoxFuncCall::HashToField128Security { inputs, .. } => inputs.clone(),
            BlackBoxFuncCall::AND { lhs, rhs, .. } | BlackBoxFuncCall::XOR { lhs, rhs, .. } => {
                vec![*lhs, *rhs]
            }
            BlackBoxFuncCall::FixedBaseScalarMul { input, .. }
            | BlackBoxFuncCall::RANGE { input } => vec![*input],
            BlackBoxFuncCall::SchnorrVerify {
                public_key_x,
                public_key_y,
                signature,
                message,
                ..
            } => {
                let mut inputs = Vec::with_capacity(2 + signature.len() + message.len());
                inputs.push(*public_key_x);
                inputs.push(*public_key_y);
                inputs.extend(signature.iter().copied());
                inputs.extend(message.iter().copied());
                inputs
            }
            BlackBoxFuncCall::EcdsaSecp256k1 {
                public_key_x,
                public_key_y,
                signature,
                hashed_message,
                ..
            }
            | BlackBoxFuncCall::EcdsaSecp256r1 {
                public_key_x,
                public_key_y,
                signature,
                hashed_message,
                ..
            } => public_key_x
                .iter()
                .chain(public_key_y)
                .chain(signature)
                .chain(hashed_message)
                .copied()
                .collect(),
            BlackBoxFuncCall::Keccak256VariableLength {
                inputs,
                var_message_size,
                ..
            } => {
                let mut inputs = inputs.clone();
                inputs.push(*var_message_size);
                inputs
            }
        }
    }

    pub fn get_outputs_vec(&self) -> Vec<Witness> {
        match self {
            BlackBoxFuncCall::SHA256 { outputs, .. }
            | BlackBoxFuncCall::Blake2s { outputs, .. }
            | BlackBoxFuncCall::Keccak256 { outputs, .. }
            | BlackBoxFuncCall::Keccak256VariableLength { outputs, .. } => outputs.clone(),
            BlackBoxFuncCall::AND { output, .. }
            | BlackBoxFuncCall::XOR { output, .. }
            | BlackBoxFuncCall::HashToField128Security { output, .. }
            | BlackBoxFuncCall::SchnorrVerify { output, .. }
            | BlackBoxFuncCall::EcdsaSecp256k1 { output, .. }
            | BlackBoxFuncCall::EcdsaSecp256r1 { output, .. } => vec![*output],
            BlackBoxFuncCall::FixedBaseScalarMul { outputs, .. }
            | BlackBoxFuncCall::Pedersen { outputs, .. } => vec![outputs.0, outputs.1],
            BlackBoxFuncCall::RANGE { .. } => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(index: u32, num_bits: u32) -> FunctionInput {
        FunctionInput {
            witness: Witness(index),
            num_bits,
        }
    }

    #[test]
    fn test_schnorr_inputs_are_key_then_signature_then_message() {
        let call = BlackBoxFuncCall::SchnorrVerify {
            public_key_x: input(1, 254),
            public_key_y: input(2, 254),
            signature: vec![input(3, 8), input(4, 8)],
            message: vec![input(5, 8)],
            output: Witness(6),
        };

        let inputs: Vec<u32> = call
            .get_inputs_vec()
            .iter()
            .map(|i| i.witness.0)
            .collect();
        assert_eq!(inputs, vec![1, 2, 3, 4, 5]);
        assert_eq!(call.get_outputs_vec(), vec![Witness(6)]);
        assert_eq!(Opcode::BlackBoxFuncCall(call).name(), "schnorr_verify");
    }

    #[test]
    fn test_range_has_no_outputs() {
        let call = BlackBoxFuncCall::RANGE { input: input(1, 32) };
        assert_eq!(call.get_inputs_vec(), vec![input(1, 32)]);
        assert!(call.get_outputs_vec().is_empty());
    }

    #[test]
    fn test_pedersen_outputs_both_coordinates() {
        let call = BlackBoxFuncCall::Pedersen {
            inputs: vec![input(1, 254)],
            domain_separator: 0,
            outputs: (Witness(2), Witness(3)),
        };
        assert_eq!(call.get_outputs_vec(), vec![Witness(2), Witness(3)]);
    }
}
