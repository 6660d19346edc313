//! Hadronic-tau selection tiers.
//!
//! The tight tier is a pure conjunction over kinematics, impact parameters
//! and every identification family the object carries; the loose and
//! fakeable tiers relax the isolation requirements. Working-point flags are
//! integer-valued (larger = tighter), raw scores are bounded from the side
//! appropriate to each family (MVA scores from below, combined-isolation
//! sums from above).

use ttm_event::RecoHadTau;

use crate::Selector;

/// Sentinel threshold disabling a lower bound on a working-point flag.
const NO_MIN_ID: i32 = -1000;
/// Sentinel threshold disabling a lower bound on a raw score.
const NO_MIN_RAW: f64 = -1.0e+6;
/// Sentinel threshold disabling an upper bound on a raw score.
const NO_MAX_RAW: f64 = 1.0e+6;

/// Thresholds shared by the three hadronic-tau tiers; the tiers differ only
/// in their defaults.
#[derive(Debug, Clone)]
pub struct HadTauCuts {
    /// Lower cut on pT, GeV.
    pub min_pt: f64,
    /// Upper cut on |eta|.
    pub max_abs_eta: f64,
    /// Upper cut on |dz|, cm.
    pub max_dz: f64,
    /// Lower cut on the decay-mode-finding flag.
    pub min_decay_mode_finding: i32,
    /// Lower cut on the MVA-isolation working point, ΔR = 0.3.
    pub min_id_mva_dr03: i32,
    /// Lower cut on the raw MVA-isolation score, ΔR = 0.3.
    pub min_raw_mva_dr03: f64,
    /// Lower cut on the MVA-isolation working point, ΔR = 0.5.
    pub min_id_mva_dr05: i32,
    /// Lower cut on the raw MVA-isolation score, ΔR = 0.5.
    pub min_raw_mva_dr05: f64,
    /// Lower cut on the combined-isolation working point, ΔR = 0.3.
    pub min_id_cut_dr03: i32,
    /// Upper cut on the raw combined-isolation sum, ΔR = 0.3, GeV.
    pub max_raw_cut_dr03: f64,
    /// Lower cut on the combined-isolation working point, ΔR = 0.5.
    pub min_id_cut_dr05: i32,
    /// Upper cut on the raw combined-isolation sum, ΔR = 0.5, GeV.
    pub max_raw_cut_dr05: f64,
    /// Lower cut on the anti-electron discriminator.
    pub min_anti_electron: i32,
    /// Lower cut on the anti-muon discriminator.
    pub min_anti_muon: i32,
}

impl HadTauCuts {
    fn passes(&self, tau: &RecoHadTau) -> bool {
        tau.p4.pt >= self.min_pt
            && tau.p4.abs_eta() <= self.max_abs_eta
            && tau.dz.abs() <= self.max_dz
            && tau.decay_mode_finding >= self.min_decay_mode_finding
            && tau.id_mva_dr03 >= self.min_id_mva_dr03
            && tau.raw_mva_dr03 >= self.min_raw_mva_dr03
            && tau.id_mva_dr05 >= self.min_id_mva_dr05
            && tau.raw_mva_dr05 >= self.min_raw_mva_dr05
            && tau.id_cut_dr03 >= self.min_id_cut_dr03
            && tau.raw_cut_dr03 <= self.max_raw_cut_dr03
            && tau.id_cut_dr05 >= self.min_id_cut_dr05
            && tau.raw_cut_dr05 <= self.max_raw_cut_dr05
            && tau.anti_electron >= self.min_anti_electron
            && tau.anti_muon >= self.min_anti_muon
    }

    /// Kinematics and decay mode only: the loose-tier defaults.
    fn kinematic_defaults() -> Self {
        Self {
            min_pt: 20.0,
            max_abs_eta: 2.3,
            max_dz: 0.2,
            min_decay_mode_finding: 1,
            min_id_mva_dr03: NO_MIN_ID,
            min_raw_mva_dr03: NO_MIN_RAW,
            min_id_mva_dr05: NO_MIN_ID,
            min_raw_mva_dr05: NO_MIN_RAW,
            min_id_cut_dr03: NO_MIN_ID,
            max_raw_cut_dr03: NO_MAX_RAW,
            min_id_cut_dr05: NO_MIN_ID,
            max_raw_cut_dr05: NO_MAX_RAW,
            min_anti_electron: NO_MIN_ID,
            min_anti_muon: NO_MIN_ID,
        }
    }
}

/// "Loose" hadronic-tau selection: kinematics, impact parameter and decay
/// mode, no isolation requirement.
#[derive(Debug, Clone)]
pub struct HadTauSelectorLoose {
    /// Threshold table.
    pub cuts: HadTauCuts,
}

impl Default for HadTauSelectorLoose {
    fn default() -> Self {
        Self { cuts: HadTauCuts::kinematic_defaults() }
    }
}

impl Selector<RecoHadTau> for HadTauSelectorLoose {
    fn passes(&self, tau: &RecoHadTau) -> bool {
        self.cuts.passes(tau)
    }
}

/// "Fakeable" hadronic-tau selection: the loose cuts plus a bounded raw
/// combined-isolation sum in the ΔR = 0.5 cone.
#[derive(Debug, Clone)]
pub struct HadTauSelectorFakeable {
    /// Threshold table.
    pub cuts: HadTauCuts,
}

impl Default for HadTauSelectorFakeable {
    fn default() -> Self {
        Self { cuts: HadTauCuts { max_raw_cut_dr05: 10.0, ..HadTauCuts::kinematic_defaults() } }
    }
}

impl Selector<RecoHadTau> for HadTauSelectorFakeable {
    fn passes(&self, tau: &RecoHadTau) -> bool {
        self.cuts.passes(tau)
    }
}

/// "Tight" hadronic-tau selection: the full conjunction, with the
/// combined-isolation 3-hit loose working point in the ΔR = 0.5 cone.
#[derive(Debug, Clone)]
pub struct HadTauSelectorTight {
    /// Threshold table.
    pub cuts: HadTauCuts,
}

impl Default for HadTauSelectorTight {
    fn default() -> Self {
        Self { cuts: HadTauCuts { min_id_cut_dr05: 1, ..HadTauCuts::kinematic_defaults() } }
    }
}

impl Selector<RecoHadTau> for HadTauSelectorTight {
    fn passes(&self, tau: &RecoHadTau) -> bool {
        self.cuts.passes(tau)
    }
}
