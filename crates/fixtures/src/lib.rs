// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod artifact;
mod error;
mod fixture;
mod registry;
pub mod schnorr_verify;

pub use artifact::FixtureArtifact;
pub use error::{FixtureError, Result};
pub use fixture::{Fixture, FixtureReport};
pub use registry::{builtin, BUILTIN_FIXTURES};
