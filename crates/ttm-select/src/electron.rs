//! Electron selection tiers.
//!
//! Electrons carry two families of geometry-dependent cuts: the EGamma POG
//! identification MVA, cut per |eta| region (central / transition /
//! forward), and — for the fakeable tier — trigger-emulation shower-shape
//! cuts applied above a pT threshold. Per-region tables are fixed-size
//! arrays indexed by [`EtaRegions::region`]; an |eta| partition whose
//! region count does not match the tables is a logic error and panics at
//! evaluation.
//!
//! Every selector answers `false` for muons.

use ttm_event::{RecoLepton, MVA_TTH_WP};

use crate::binned::{EtaRegions, ScoreBinnedCuts};
use crate::Selector;

const TIGHT_CHARGE_OK: i32 = 2;

/// Cuts shared by every electron tier.
#[derive(Debug, Clone)]
pub struct ElectronBaseCuts {
    /// Lower cut on pT, GeV.
    pub min_pt: f64,
    /// Upper cut on |eta|.
    pub max_abs_eta: f64,
    /// Upper cut on |dxy|, cm.
    pub max_dxy: f64,
    /// Upper cut on |dz|, cm.
    pub max_dz: f64,
    /// Upper cut on relative isolation.
    pub max_rel_iso: f64,
    /// Upper cut on the 3D impact-parameter significance.
    pub max_sip3d: f64,
    /// |eta| partition for the per-region cuts.
    pub eta_regions: EtaRegions,
    /// Lower cut on the raw POG MVA score, per |eta| region.
    pub min_mva_raw_pog: [f64; 3],
    /// Upper cut on missing inner tracker hits.
    pub max_n_lost_hits: i32,
}

impl ElectronBaseCuts {
    fn passes(&self, electron: &RecoLepton) -> bool {
        let Some(el) = electron.electron_vars() else { return false };
        assert_eq!(
            self.eta_regions.n_regions(),
            self.min_mva_raw_pog.len(),
            "|eta| partition does not match the per-region cut table"
        );
        let region = self.eta_regions.region(electron.p4.abs_eta());
        electron.p4.pt >= self.min_pt
            && electron.p4.abs_eta() <= self.max_abs_eta
            && electron.vars.dxy.abs() <= self.max_dxy
            && electron.vars.dz.abs() <= self.max_dz
            && electron.vars.rel_iso <= self.max_rel_iso
            && electron.vars.sip3d <= self.max_sip3d
            && el.mva_raw_pog >= self.min_mva_raw_pog[region]
            && el.n_lost_hits <= self.max_n_lost_hits
    }
}

/// Trigger-emulation shower-shape cuts, applied above a pT threshold to
/// mimic the selection running at trigger level.
#[derive(Debug, Clone)]
pub struct TriggerEmulationCuts {
    /// pT threshold above which the cuts apply, GeV.
    pub min_pt: f64,
    /// Upper cut on sigma-ieta-ieta, per |eta| region.
    pub max_sigma_eta_eta: [f64; 3],
    /// Upper cut on H/E, per |eta| region.
    pub max_hoe: [f64; 3],
    /// Upper cut on |delta eta| at the cluster, per |eta| region.
    pub max_delta_eta: [f64; 3],
    /// Upper cut on |delta phi| at the cluster, per |eta| region.
    pub max_delta_phi: [f64; 3],
    /// Lower cut on 1/E - 1/p (region independent).
    pub min_oo_e_minus_oo_p: f64,
    /// Upper cut on 1/E - 1/p, per |eta| region.
    pub max_oo_e_minus_oo_p: [f64; 3],
}

impl Default for TriggerEmulationCuts {
    fn default() -> Self {
        Self {
            min_pt: 30.0,
            max_sigma_eta_eta: [0.011, 0.011, 0.030],
            max_hoe: [0.10, 0.10, 0.07],
            max_delta_eta: [0.01, 0.01, 0.008],
            max_delta_phi: [0.04, 0.04, 0.07],
            min_oo_e_minus_oo_p: -0.05,
            max_oo_e_minus_oo_p: [0.010, 0.010, 0.005],
        }
    }
}

impl TriggerEmulationCuts {
    fn passes(&self, electron: &RecoLepton, region: usize) -> bool {
        let Some(el) = electron.electron_vars() else { return false };
        if electron.p4.pt < self.min_pt {
            return true;
        }
        el.sigma_eta_eta <= self.max_sigma_eta_eta[region]
            && el.hoe <= self.max_hoe[region]
            && el.delta_eta.abs() <= self.max_delta_eta[region]
            && el.delta_phi.abs() <= self.max_delta_phi[region]
            && el.oo_e_minus_oo_p >= self.min_oo_e_minus_oo_p
            && el.oo_e_minus_oo_p <= self.max_oo_e_minus_oo_p[region]
    }
}

/// "Loose" electron selection (preselection tier).
#[derive(Debug, Clone)]
pub struct ElectronSelectorLoose {
    /// Shared kinematic and id cuts.
    pub base: ElectronBaseCuts,
}

impl Default for ElectronSelectorLoose {
    fn default() -> Self {
        Self {
            base: ElectronBaseCuts {
                min_pt: 7.0,
                max_abs_eta: 2.5,
                max_dxy: 0.05,
                max_dz: 0.1,
                max_rel_iso: 0.4,
                max_sip3d: 8.0,
                eta_regions: EtaRegions::default(),
                min_mva_raw_pog: [-0.70, -0.83, -0.92],
                max_n_lost_hits: 1,
            },
        }
    }
}

impl Selector<RecoLepton> for ElectronSelectorLoose {
    fn passes(&self, electron: &RecoLepton) -> bool {
        self.base.passes(electron)
    }
}

/// "Fakeable" electron selection: loose-like cuts at a higher pT floor,
/// trigger-emulation cuts, and lepton-MVA-binned nearby-jet cuts.
#[derive(Debug, Clone)]
pub struct ElectronSelectorFakeable {
    /// Shared kinematic and id cuts.
    pub base: ElectronBaseCuts,
    /// Shower-shape cuts mimicking the trigger selection.
    pub trigger_emulation: TriggerEmulationCuts,
    /// Lepton-MVA-binned nearby-jet cuts.
    pub mva_binned: ScoreBinnedCuts,
    /// Require the tight-charge flag.
    pub apply_tight_charge: bool,
    /// Require the photon-conversion veto.
    pub apply_conversion_veto: bool,
}

impl Default for ElectronSelectorFakeable {
    fn default() -> Self {
        Self {
            base: ElectronBaseCuts {
                min_pt: 10.0,
                max_abs_eta: 2.5,
                max_dxy: 0.05,
                max_dz: 0.1,
                max_rel_iso: 0.4,
                max_sip3d: 8.0,
                eta_regions: EtaRegions::default(),
                min_mva_raw_pog: [0.0, 0.0, 0.7],
                max_n_lost_hits: 0,
            },
            trigger_emulation: TriggerEmulationCuts::default(),
            mva_binned: ScoreBinnedCuts::two_bin(MVA_TTH_WP, (0.30, 0.605), (-1.0e+3, 0.89)),
            apply_tight_charge: false,
            apply_conversion_veto: false,
        }
    }
}

impl Selector<RecoLepton> for ElectronSelectorFakeable {
    fn passes(&self, electron: &RecoLepton) -> bool {
        let Some(el) = electron.electron_vars() else { return false };
        if !self.base.passes(electron) {
            return false;
        }
        let region = self.base.eta_regions.region(electron.p4.abs_eta());
        self.trigger_emulation.passes(electron, region)
            && self.mva_binned.passes(
                electron.vars.mva_tth,
                electron.vars.jet_pt_ratio,
                electron.vars.jet_btag_csv,
            )
            && (electron.vars.tight_charge >= TIGHT_CHARGE_OK || !self.apply_tight_charge)
            && (el.passes_conversion_veto || !self.apply_conversion_veto)
    }
}

/// "Tight" electron selection: signal-quality electrons.
#[derive(Debug, Clone)]
pub struct ElectronSelectorTight {
    /// The fakeable cuts, with charge and conversion requirements enabled.
    pub fakeable: ElectronSelectorFakeable,
    /// Lower cut on the lepton-MVA score.
    pub min_mva_tth: f64,
}

impl Default for ElectronSelectorTight {
    fn default() -> Self {
        Self {
            fakeable: ElectronSelectorFakeable {
                apply_tight_charge: true,
                apply_conversion_veto: true,
                ..Default::default()
            },
            min_mva_tth: MVA_TTH_WP,
        }
    }
}

impl Selector<RecoLepton> for ElectronSelectorTight {
    fn passes(&self, electron: &RecoLepton) -> bool {
        self.fakeable.passes(electron) && electron.vars.mva_tth >= self.min_mva_tth
    }
}

/// Cut-based electron selection: shower-shape identification applied at all
/// pT, with a tighter isolation cut and no lepton MVA.
#[derive(Debug, Clone)]
pub struct ElectronSelectorCutBased {
    /// Shared kinematic and id cuts.
    pub base: ElectronBaseCuts,
    /// Shower-shape cuts, applied from the base pT floor upwards.
    pub shower_shape: TriggerEmulationCuts,
}

impl Default for ElectronSelectorCutBased {
    fn default() -> Self {
        let base = ElectronBaseCuts {
            max_rel_iso: 0.1,
            max_sip3d: 4.0,
            ..ElectronSelectorFakeable::default().base
        };
        let shower_shape = TriggerEmulationCuts { min_pt: base.min_pt, ..Default::default() };
        Self { base, shower_shape }
    }
}

impl Selector<RecoLepton> for ElectronSelectorCutBased {
    fn passes(&self, electron: &RecoLepton) -> bool {
        if !self.base.passes(electron) {
            return false;
        }
        let region = self.base.eta_regions.region(electron.p4.abs_eta());
        self.shower_shape.passes(electron, region)
    }
}

/// MVA-based electron selection: the fakeable kinematics plus the
/// lepton-MVA working point.
#[derive(Debug, Clone)]
pub struct ElectronSelectorMvaBased {
    /// Shared kinematic and id cuts.
    pub base: ElectronBaseCuts,
    /// Lower cut on the lepton-MVA score.
    pub min_mva_tth: f64,
}

impl Default for ElectronSelectorMvaBased {
    fn default() -> Self {
        Self { base: ElectronSelectorFakeable::default().base, min_mva_tth: MVA_TTH_WP }
    }
}

impl Selector<RecoLepton> for ElectronSelectorMvaBased {
    fn passes(&self, electron: &RecoLepton) -> bool {
        self.base.passes(electron) && electron.vars.mva_tth >= self.min_mva_tth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttm_event::{ElectronVars, LeptonVars, Particle, RecoLepton};

    fn electron(pt: f64, eta: f64) -> RecoLepton {
        RecoLepton::electron(
            Particle::new(pt, eta, 0.0, 0.000511),
            -11,
            LeptonVars {
                dxy: 0.01,
                dz: 0.02,
                rel_iso: 0.2,
                sip3d: 2.0,
                mva_tth: 0.9,
                jet_pt_ratio: 0.8,
                jet_btag_csv: 0.1,
                tight_charge: 2,
                ..Default::default()
            },
            ElectronVars {
                mva_raw_pog: 0.9,
                n_lost_hits: 0,
                passes_conversion_veto: true,
                sigma_eta_eta: 0.009,
                hoe: 0.05,
                delta_eta: 0.004,
                delta_phi: 0.02,
                oo_e_minus_oo_p: 0.001,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_fakeable_passes_nominal() {
        let sel = ElectronSelectorFakeable::default();
        assert!(sel.passes(&electron(25.0, 1.0)));
    }

    #[test]
    fn test_trigger_emulation_only_above_threshold() {
        let sel = ElectronSelectorFakeable::default();
        let mut el = electron(25.0, 1.0);
        if let ttm_event::LeptonFlavor::Electron(ref mut vars) = el.flavor {
            vars.sigma_eta_eta = 0.05; // would fail the shower-shape cut
        }
        // below the trigger pT threshold the shower cuts do not apply
        assert!(sel.passes(&el));
        el.p4.pt = 35.0;
        assert!(!sel.passes(&el));
    }

    #[test]
    fn test_forward_region_uses_tighter_mva_cut() {
        let sel = ElectronSelectorFakeable::default();
        let mut el = electron(25.0, 2.0); // forward region
        if let ttm_event::LeptonFlavor::Electron(ref mut vars) = el.flavor {
            vars.mva_raw_pog = 0.5; // passes central cut (0.0), fails forward (0.7)
        }
        assert!(!sel.passes(&el));
        el.p4.eta = 0.5;
        assert!(sel.passes(&el));
    }

    #[test]
    fn test_tight_requires_conversion_veto_and_charge() {
        let sel = ElectronSelectorTight::default();
        let mut el = electron(25.0, 1.0);
        assert!(sel.passes(&el));
        if let ttm_event::LeptonFlavor::Electron(ref mut vars) = el.flavor {
            vars.passes_conversion_veto = false;
        }
        assert!(!sel.passes(&el));
    }

    #[test]
    #[should_panic(expected = "|eta| partition does not match the per-region cut table")]
    fn test_mismatched_eta_partition_panics() {
        let mut sel = ElectronSelectorLoose::default();
        // two regions against the three-entry cut tables
        sel.base.eta_regions = crate::binned::EtaRegions::new(vec![1.479]).unwrap();
        sel.passes(&electron(25.0, 1.0));
    }

    #[test]
    fn test_rejects_muons() {
        let sel = ElectronSelectorLoose::default();
        let mu = RecoLepton::muon(
            Particle::new(25.0, 1.0, 0.0, 0.106),
            13,
            Default::default(),
            Default::default(),
        );
        assert!(!sel.passes(&mu));
    }
}
