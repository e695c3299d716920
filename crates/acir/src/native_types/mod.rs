// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod expression;
mod witness;
mod witness_map;

pub use expression::Expression;
pub use witness::Witness;
pub use witness_map::WitnessMap;
