// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use acirfx_acir::AcirError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error(transparent)]
    Acir(#[from] AcirError),

    #[error("Fixture '{0}' not found")]
    NotFound(String),

    #[error("Initial witness keys are not contiguous from {start}")]
    NotContiguous { start: u32 },

    #[error("Initial witness is empty")]
    EmptyWitness,

    #[error(
        "Expected witness must add exactly one entry to the initial witness: {added} added, {changed} changed or removed"
    )]
    ExpectedMismatch { added: usize, changed: usize },

    #[error("Re-serialized circuit differs from the decompressed payload")]
    PayloadMismatch,

    #[error("Recompressed payload does not reproduce the bytecode")]
    BytecodeMismatch,

    #[error("Circuit arguments {circuit:?} do not match initial witness keys {witness:?}")]
    ArgumentMismatch { circuit: Vec<u32>, witness: Vec<u32> },

    #[error("Added witnesses {added:?} are not the circuit return values {returns:?}")]
    ReturnWitnessMismatch { added: Vec<u32>, returns: Vec<u32> },

    #[error("Witness {0} is already present")]
    WitnessAlreadyPresent(u32),

    #[error("Base64 decode: {0}")]
    Base64Error(#[from] base64::DecodeError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FixtureError>;
