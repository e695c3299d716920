// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::error::Result;
use crate::fixture::Fixture;
use crate::schnorr_verify;

/// Fixtures compiled into the crate.
pub const BUILTIN_FIXTURES: &[&str] = &[schnorr_verify::NAME];

pub fn builtin(name: &str) -> Result<Option<Fixture>> {
    match name {
        schnorr_verify::NAME => schnorr_verify::fixture().map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_fixture_resolves() {
        for name in BUILTIN_FIXTURES {
            let fixture = builtin(name).unwrap().unwrap();
            assert_eq!(&fixture.name, name);
        }
        assert!(builtin("missing").unwrap().is_none());
    }
}
