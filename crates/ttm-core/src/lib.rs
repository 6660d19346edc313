//! # ttm-core
//!
//! Shared foundation for the ttH→multilepton object-selection core:
//! the crate-wide error type and the lepton-kind enumeration used by
//! selection and correction logic.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{LeptonKind, ELECTRON_PDG_ID, MUON_PDG_ID};
