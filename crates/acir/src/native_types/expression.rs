// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Witness;
use crate::field::FieldElement;

/// A degree-two polynomial over witnesses which an arithmetic opcode
/// constrains to zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    pub mul_terms: Vec<(FieldElement, Witness, Witness)>,
    pub linear_combinations: Vec<(FieldElement, Witness)>,
    pub q_c: FieldElement,
}

impl Expression {
    pub fn from_field(q_c: FieldElement) -> Self {
        Self {
            q_c,
            ..Default::default()
        }
    }

    pub fn one() -> Self {
        Self::from_field(FieldElement::one())
    }

    pub fn is_const(&self) -> bool {
        self.mul_terms.is_empty() && self.linear_combinations.is_empty()
    }

    /// Every witness the expression mentions.
    pub fn witnesses(&self) -> BTreeSet<Witness> {
        let mut witnesses = BTreeSet::new();
        for (_, lhs, rhs) in &self.mul_terms {
            witnesses.insert(*lhs);
            witnesses.insert(*rhs);
        }
        for (_, witness) in &self.linear_combinations {
            witnesses.insert(*witness);
        }
        witnesses
    }
}

impl From<Witness> for Expression {
    fn from(witness: Witness) -> Self {
        Self {
            linear_combinations: vec![(FieldElement::one(), witness)],
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_witnesses_collects_all_terms() {
        let expr = Expression {
            mul_terms: vec![(FieldElement::one(), Witness(1), Witness(2))],
            linear_combinations: vec![
                (FieldElement::from(3u128), Witness(2)),
                (FieldElement::one(), Witness(4)),
            ],
            q_c: FieldElement::zero(),
        };

        assert!(!expr.is_const());
        assert_eq!(
            expr.witnesses().into_iter().collect::<Vec<_>>(),
            vec![Witness(1), Witness(2), Witness(4)]
        );
        assert!(Expression::one().is_const());
        assert_eq!(Expression::from(Witness(7)).witnesses().len(), 1);
    }
}
