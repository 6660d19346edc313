//! # ttm-select
//!
//! Tiered selection for the ttH→multilepton analysis: one pure predicate
//! per (object kind, selection tier), plus a generic order-preserving
//! collection filter.
//!
//! Selectors are configured with fixed numeric thresholds at construction
//! (defaults from the analysis-note tables, overridable through the public
//! fields) and never mutate their input or keep per-call state.
//!
//! ## Example
//!
//! ```
//! use ttm_select::{CollectionSelector, HadTauSelectorTight};
//!
//! let tight = CollectionSelector::<HadTauSelectorTight>::default();
//! let taus: Vec<ttm_event::RecoHadTau> = Vec::new();
//! let refs: Vec<&ttm_event::RecoHadTau> = taus.iter().collect();
//! assert!(tight.select(&refs).is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod binned;
pub mod collection;
pub mod electron;
pub mod hadtau;
pub mod jet;
pub mod muon;

pub use binned::{EtaRegions, ScoreBinnedCuts};
pub use collection::CollectionSelector;
pub use electron::{
    ElectronSelectorCutBased, ElectronSelectorFakeable, ElectronSelectorLoose,
    ElectronSelectorMvaBased, ElectronSelectorTight,
};
pub use hadtau::{HadTauSelectorFakeable, HadTauSelectorLoose, HadTauSelectorTight};
pub use jet::{JetSelector, JetSelectorBtagLoose, JetSelectorBtagMedium};
pub use muon::{
    MuonSelectorCutBased, MuonSelectorFakeable, MuonSelectorLoose, MuonSelectorMvaBased,
    MuonSelectorTight,
};

/// Capability of deciding whether one object passes a selection tier.
///
/// Implementations are pure: no mutation, no retained state, deterministic
/// in the object and the configured thresholds.
pub trait Selector<T> {
    /// True if the object passes the selection.
    fn passes(&self, obj: &T) -> bool;
}

/// Any `Fn(&T) -> bool` is a selector; handy for ad-hoc filters and tests.
impl<T, F> Selector<T> for F
where
    F: Fn(&T) -> bool,
{
    fn passes(&self, obj: &T) -> bool {
        self(obj)
    }
}
