//! # ttm-corrections
//!
//! Data/MC correction engine for the ttH→multilepton analysis: binned
//! lookup tables, trigger-efficiency and lepton identification/isolation
//! scale factors, and charge-misassignment probabilities.
//!
//! Measured tables are injected as JSON configuration
//! ([`schema::CorrectionConfig`]) and compiled once into a
//! [`CorrectionStore`], which every entry point takes by reference. All
//! lookups fall back to the neutral factor 1.0 outside the tabulated
//! domain; an empty store is neutral everywhere.
//!
//! ## Example
//!
//! ```
//! use ttm_core::LeptonKind;
//! use ttm_corrections::{sf_lepton_id_iso_tight, CorrectionStore};
//!
//! let store = CorrectionStore::from_json_str("{}")?;
//! let sf = sf_lepton_id_iso_tight(&store, LeptonKind::Muon, 25.0, 1.1);
//! assert_eq!(sf, 1.0);
//! # Ok::<(), ttm_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod charge_misid;
pub mod lepton_sf;
pub mod lut;
pub mod schema;
pub mod store;
pub mod trigger;

#[cfg(test)]
mod tests;

pub use charge_misid::prob_charge_misid;
pub use lepton_sf::{
    sf_dilepton_id_iso_fakeable, sf_dilepton_id_iso_fakeable_to_loose, sf_dilepton_id_iso_loose,
    sf_dilepton_id_iso_tight, sf_dilepton_id_iso_tight_to_loose, sf_lepton_id_iso_fakeable,
    sf_lepton_id_iso_fakeable_to_loose, sf_lepton_id_iso_loose, sf_lepton_id_iso_tight,
    sf_lepton_id_iso_tight_to_loose,
};
pub use lut::{Lut1, Lut2, RegionLut, NEUTRAL_SF};
pub use schema::CorrectionConfig;
pub use store::{CorrectionStore, ELECTRON_BARREL_ENDCAP_SPLIT, MUON_BARREL_ENDCAP_SPLIT};
pub use trigger::{sf_trigger_eff, sf_trigger_eff_2l};
