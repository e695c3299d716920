// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Types for reading ACIR circuit fixtures: BN254 field elements, witness maps
//! and the legacy gzip + bincode circuit serialization.

pub mod circuit;
mod compression;
mod error;
mod field;
pub mod native_types;
mod public_witness;

pub use compression::{compress_witness, decompress_witness, gzip_compress, gzip_decompress};
pub use error::{AcirError, Result};
pub use field::FieldElement;
pub use public_witness::{get_public_parameters_witness, get_public_witness, get_return_witness};
