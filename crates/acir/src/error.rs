// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AcirError {
    #[error("Failed to decompress gzip stream: {0}")]
    Decompression(#[source] std::io::Error),

    #[error("Failed to compress gzip stream: {0}")]
    Compression(#[source] std::io::Error),

    #[error("Bincode error: {0}")]
    Bincode(String),

    #[error("Invalid hex value '{value}': {reason}")]
    InvalidHex { value: String, reason: String },

    #[error("Value {0} is not a canonical field element")]
    NonCanonicalField(String),

    #[error("Witness {0} appears more than once")]
    DuplicateWitness(u32),

    #[error("Witness {0} is required but has no value")]
    MissingWitness(u32),
}

impl From<bincode::Error> for AcirError {
    fn from(value: bincode::Error) -> Self {
        AcirError::Bincode(value.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AcirError>;
