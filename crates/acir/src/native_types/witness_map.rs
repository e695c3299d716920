// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::collections::{btree_map, BTreeMap};
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::Witness;
use crate::error::{AcirError, Result};
use crate::field::{FieldElement, FIELD_BYTES};

/// Assignment of field values to witness indices, ordered by index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessMap(BTreeMap<Witness, FieldElement>);

impl WitnessMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, witness: &Witness) -> Option<&FieldElement> {
        self.0.get(witness)
    }

    pub fn get_index(&self, index: u32) -> Option<&FieldElement> {
        self.0.get(&Witness(index))
    }

    pub fn contains_key(&self, witness: &Witness) -> bool {
        self.0.contains_key(witness)
    }

    pub fn insert(&mut self, witness: Witness, value: FieldElement) -> Option<FieldElement> {
        self.0.insert(witness, value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, Witness, FieldElement> {
        self.0.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Witness, FieldElement> {
        self.0.iter()
    }

    /// True when the keys are exactly `start, start + 1, ..` with no gaps.
    pub fn is_contiguous_from(&self, start: u32) -> bool {
        self.0
            .keys()
            .enumerate()
            .all(|(offset, witness)| u64::from(witness.0) == u64::from(start) + offset as u64)
    }

    /// Entries of `self` that are missing from `other` or hold a different value there.
    pub fn difference(&self, other: &WitnessMap) -> WitnessMap {
        self.0
            .iter()
            .filter(|(witness, value)| other.get(witness) != Some(value))
            .map(|(witness, value)| (*witness, *value))
            .collect()
    }

    /// Builds a map from `(index, "0x" + 64 hex digits)` pairs.
    ///
    /// This is the fixed-width text form fixtures are written in. Any other
    /// width, a missing prefix or a repeated index is an error.
    pub fn from_hex_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, S)>,
        S: AsRef<str>,
    {
        let mut map = WitnessMap::new();
        for (index, value) in entries {
            let value = parse_fixed_width(value.as_ref())?;
            if map.insert(Witness(index), value).is_some() {
                return Err(AcirError::DuplicateWitness(index));
            }
        }
        Ok(map)
    }

    pub fn to_hex_entries(&self) -> Vec<(u32, String)> {
        self.0
            .iter()
            .map(|(witness, value)| (witness.0, value.to_string()))
            .collect()
    }
}

fn parse_fixed_width(value: &str) -> Result<FieldElement> {
    let Some(digits) = value.strip_prefix("0x") else {
        return Err(AcirError::InvalidHex {
            value: value.to_string(),
            reason: "missing 0x prefix".to_string(),
        });
    };
    if digits.len() != FIELD_BYTES * 2 {
        return Err(AcirError::InvalidHex {
            value: value.to_string(),
            reason: format!("expected 64 hex digits, found {}", digits.len()),
        });
    }
    FieldElement::from_hex(digits)
}

impl Index<&Witness> for WitnessMap {
    type Output = FieldElement;

    fn index(&self, index: &Witness) -> &Self::Output {
        &self.0[index]
    }
}

impl From<BTreeMap<Witness, FieldElement>> for WitnessMap {
    fn from(value: BTreeMap<Witness, FieldElement>) -> Self {
        Self(value)
    }
}

impl From<WitnessMap> for BTreeMap<Witness, FieldElement> {
    fn from(value: WitnessMap) -> Self {
        value.0
    }
}

impl FromIterator<(Witness, FieldElement)> for WitnessMap {
    fn from_iter<T: IntoIterator<Item = (Witness, FieldElement)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for WitnessMap {
    type Item = (Witness, FieldElement);
    type IntoIter = btree_map::IntoIter<Witness, FieldElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a WitnessMap {
    type Item = (&'a Witness, &'a FieldElement);
    type IntoIter = btree_map::Iter<'a, Witness, FieldElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: &str = "0x0000000000000000000000000000000000000000000000000000000000000001";
    const TWO: &str = "0x0000000000000000000000000000000000000000000000000000000000000002";

    #[test]
    fn test_from_hex_entries() {
        let map = WitnessMap::from_hex_entries([(1, ONE), (2, TWO)]).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map[&Witness(1)], FieldElement::one());
        assert_eq!(map.get_index(2), Some(&FieldElement::from(2u128)));
        assert_eq!(
            map.to_hex_entries(),
            vec![(1, ONE.to_string()), (2, TWO.to_string())]
        );
    }

    #[test]
    fn test_from_hex_entries_is_strict() {
        assert!(matches!(
            WitnessMap::from_hex_entries([(1, "0x01")]),
            Err(AcirError::InvalidHex { .. })
        ));
        assert!(matches!(
            WitnessMap::from_hex_entries([(1, &ONE[2..])]),
            Err(AcirError::InvalidHex { .. })
        ));
        assert!(matches!(
            WitnessMap::from_hex_entries([(1, ONE), (1, TWO)]),
            Err(AcirError::DuplicateWitness(1))
        ));
    }

    #[test]
    fn test_contiguity() {
        let map: WitnessMap = (3..=6)
            .map(|i| (Witness(i), FieldElement::from(i as u128)))
            .collect();
        assert!(map.is_contiguous_from(3));
        assert!(!map.is_contiguous_from(1));

        let mut gapped = map.clone();
        gapped.insert(Witness(8), FieldElement::zero());
        assert!(!gapped.is_contiguous_from(3));

        assert!(WitnessMap::new().is_contiguous_from(1));
    }

    #[test]
    fn test_difference() {
        let base = WitnessMap::from_hex_entries([(1, ONE), (2, TWO)]).unwrap();
        let mut other = base.clone();
        other.insert(Witness(3), FieldElement::one());
        other.insert(Witness(2), FieldElement::one());

        let diff = other.difference(&base);
        assert_eq!(diff.len(), 2);
        assert_eq!(diff.get_index(2), Some(&FieldElement::one()));
        assert_eq!(diff.get_index(3), Some(&FieldElement::one()));

        assert!(base.difference(&base).is_empty());
    }
}
