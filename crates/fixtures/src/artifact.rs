// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::collections::BTreeMap;
use std::path::Path;

use acirfx_acir::native_types::WitnessMap;
use base64::engine::{general_purpose, Engine};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fixture::Fixture;

/// On-disk form of a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureArtifact {
    pub name: String,
    /// Base64-encoded, gzipped ACIR bytecode
    pub bytecode: String,
    /// Witness index to `0x`-prefixed 64 digit hex
    pub initial_witness: BTreeMap<u32, String>,
    pub expected_witness: BTreeMap<u32, String>,
}

impl FixtureArtifact {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Exact on-disk form: pretty JSON with a trailing newline.
    pub fn to_file_contents(&self) -> Result<String> {
        let mut contents = self.to_json_pretty()?;
        contents.push('\n');
        Ok(contents)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_file_contents()?)?;
        Ok(())
    }

    pub fn from_fixture(fixture: &Fixture) -> Self {
        Self {
            name: fixture.name.clone(),
            bytecode: general_purpose::STANDARD.encode(&fixture.bytecode),
            initial_witness: fixture.initial_witness.to_hex_entries().into_iter().collect(),
            expected_witness: fixture.expected_witness.to_hex_entries().into_iter().collect(),
        }
    }

    pub fn into_fixture(self) -> Result<Fixture> {
        let bytecode = general_purpose::STANDARD.decode(&self.bytecode)?;
        let initial_witness = WitnessMap::from_hex_entries(self.initial_witness)?;
        let expected_witness = WitnessMap::from_hex_entries(self.expected_witness)?;
        Ok(Fixture::new(
            self.name,
            bytecode,
            initial_witness,
            expected_witness,
        ))
    }
}
