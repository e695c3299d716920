// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::fmt;
use std::str::FromStr;

use ark_bn254::Fr;
use ark_ff::{BigInteger, One, PrimeField, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AcirError, Result};

/// Width of the big-endian encoding of a field element.
pub const FIELD_BYTES: usize = 32;

/// An element of the BN254 scalar field.
///
/// The text form is `0x` followed by 64 lowercase hex digits. Serde encodes the
/// same digits without the prefix, which is what ACIR circuits carry on the wire.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldElement(Fr);

impl FieldElement {
    pub fn zero() -> Self {
        Self(Fr::zero())
    }

    pub fn one() -> Self {
        Self(Fr::one())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    pub fn into_inner(self) -> Fr {
        self.0
    }

    pub fn to_be_bytes(&self) -> [u8; FIELD_BYTES] {
        let bytes = self.0.into_bigint().to_bytes_be();
        let mut out = [0u8; FIELD_BYTES];
        out[FIELD_BYTES - bytes.len()..].copy_from_slice(&bytes);
        out
    }

    /// Decodes a big-endian integer of at most 32 bytes.
    ///
    /// Values that are not below the field modulus are rejected instead of
    /// being reduced, so every accepted encoding renders back unchanged.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > FIELD_BYTES {
            return Err(AcirError::NonCanonicalField(format!(
                "0x{}",
                hex::encode(bytes)
            )));
        }

        let mut padded = [0u8; FIELD_BYTES];
        padded[FIELD_BYTES - bytes.len()..].copy_from_slice(bytes);

        let element = Self(Fr::from_be_bytes_mod_order(&padded));
        if element.to_be_bytes() != padded {
            return Err(AcirError::NonCanonicalField(format!(
                "0x{}",
                hex::encode(padded)
            )));
        }
        Ok(element)
    }

    /// 64 hex digits, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_be_bytes())
    }

    /// Parses up to 64 hex digits with an optional `0x` prefix.
    pub fn from_hex(value: &str) -> Result<Self> {
        let invalid = |reason: &str| AcirError::InvalidHex {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let digits = value.strip_prefix("0x").unwrap_or(value);
        if digits.is_empty() {
            return Err(invalid("no digits"));
        }
        if digits.len() > FIELD_BYTES * 2 {
            return Err(invalid("more than 64 hex digits"));
        }

        let digits = if digits.len() % 2 == 1 {
            format!("0{digits}")
        } else {
            digits.to_string()
        };
        let bytes = hex::decode(&digits).map_err(|e| invalid(&e.to_string()))?;
        Self::from_be_bytes(&bytes)
    }
}

impl Default for FieldElement {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u128> for FieldElement {
    fn from(value: u128) -> Self {
        Self(Fr::from(value))
    }
}

impl From<Fr> for FieldElement {
    fn from(value: Fr) -> Self {
        Self(value)
    }
}

impl FromStr for FieldElement {
    type Err = AcirError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Serialize for FieldElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for FieldElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::from_hex(&value).map_err(serde::de::Error::custom)
    }
}
