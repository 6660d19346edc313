//! Muon selection tiers.
//!
//! Thresholds default to the analysis-note tables; override through the
//! public fields. Every selector answers `false` for electrons, so a
//! mixed-kind lepton collection can be filtered directly.

use ttm_event::{RecoLepton, MVA_TTH_WP};

use crate::binned::ScoreBinnedCuts;
use crate::Selector;

/// Tight-charge flag value meaning "all charge measurements consistent".
const TIGHT_CHARGE_OK: i32 = 2;

/// Cuts shared by every muon tier.
#[derive(Debug, Clone)]
pub struct MuonBaseCuts {
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
    /// Require the loose PF-muon POG id.
    pub apply_loose_id_pog: bool,
    /// Require the medium PF-muon POG id.
    pub apply_medium_id_pog: bool,
    /// Require the tight-charge flag.
    pub apply_tight_charge: bool,
}

impl MuonBaseCuts {
    fn passes(&self, muon: &RecoLepton) -> bool {
        let Some(mu) = muon.muon_vars() else { return false };
        muon.p4.pt >= self.min_pt
            && muon.p4.abs_eta() <= self.max_abs_eta
            && muon.vars.dxy.abs() <= self.max_dxy
            && muon.vars.dz.abs() <= self.max_dz
            && muon.vars.rel_iso <= self.max_rel_iso
            && muon.vars.sip3d <= self.max_sip3d
            && (mu.passes_loose_id_pog || !self.apply_loose_id_pog)
            && (mu.passes_medium_id_pog || !self.apply_medium_id_pog)
            && (muon.vars.tight_charge >= TIGHT_CHARGE_OK || !self.apply_tight_charge)
    }
}

/// "Loose" muon selection (preselection tier).
#[derive(Debug, Clone)]
pub struct MuonSelectorLoose {
    /// Shared kinematic and id cuts.
    pub base: MuonBaseCuts,
}

impl Default for MuonSelectorLoose {
    fn default() -> Self {
        Self {
            base: MuonBaseCuts {
                min_pt: 5.0,
                max_abs_eta: 2.4,
                max_dxy: 0.05,
                max_dz: 0.1,
                max_rel_iso: 0.4,
                max_sip3d: 8.0,
                apply_loose_id_pog: true,
                apply_medium_id_pog: false,
                apply_tight_charge: false,
            },
        }
    }
}

impl Selector<RecoLepton> for MuonSelectorLoose {
    fn passes(&self, muon: &RecoLepton) -> bool {
        self.base.passes(muon)
    }
}

/// "Fakeable" muon selection: the loose cuts at a higher pT floor, plus
/// lepton-MVA-binned cuts on the nearby-jet pT ratio and b-tag value.
#[derive(Debug, Clone)]
pub struct MuonSelectorFakeable {
    /// Shared kinematic and id cuts.
    pub base: MuonBaseCuts,
    /// Lepton-MVA-binned nearby-jet cuts.
    pub mva_binned: ScoreBinnedCuts,
}

impl Default for MuonSelectorFakeable {
    fn default() -> Self {
        Self {
            base: MuonBaseCuts {
                min_pt: 10.0,
                max_abs_eta: 2.4,
                max_dxy: 0.05,
                max_dz: 0.1,
                max_rel_iso: 0.4,
                max_sip3d: 8.0,
                apply_loose_id_pog: true,
                apply_medium_id_pog: false,
                apply_tight_charge: false,
            },
            mva_binned: ScoreBinnedCuts::two_bin(MVA_TTH_WP, (0.30, 0.605), (-1.0e+3, 0.89)),
        }
    }
}

impl Selector<RecoLepton> for MuonSelectorFakeable {
    fn passes(&self, muon: &RecoLepton) -> bool {
        self.base.passes(muon)
            && self.mva_binned.passes(
                muon.vars.mva_tth,
                muon.vars.jet_pt_ratio,
                muon.vars.jet_btag_csv,
            )
    }
}

/// "Tight" muon selection: signal-quality muons.
#[derive(Debug, Clone)]
pub struct MuonSelectorTight {
    /// Shared kinematic and id cuts.
    pub base: MuonBaseCuts,
    /// Lower cut on the lepton-MVA score.
    pub min_mva_tth: f64,
    /// Upper cut on the nearby-jet b-tag discriminant.
    pub max_jet_btag_csv: f64,
}

impl Default for MuonSelectorTight {
    fn default() -> Self {
        Self {
            base: MuonBaseCuts {
                min_pt: 10.0,
                max_abs_eta: 2.4,
                max_dxy: 0.05,
                max_dz: 0.1,
                max_rel_iso: 0.4,
                max_sip3d: 8.0,
                apply_loose_id_pog: true,
                apply_medium_id_pog: true,
                apply_tight_charge: true,
            },
            min_mva_tth: MVA_TTH_WP,
            max_jet_btag_csv: 0.89,
        }
    }
}

impl Selector<RecoLepton> for MuonSelectorTight {
    fn passes(&self, muon: &RecoLepton) -> bool {
        self.base.passes(muon)
            && muon.vars.mva_tth >= self.min_mva_tth
            && muon.vars.jet_btag_csv <= self.max_jet_btag_csv
    }
}

/// Cut-based muon selection (no lepton MVA), used for cross-checks against
/// the MVA-based tier.
#[derive(Debug, Clone)]
pub struct MuonSelectorCutBased {
    /// Shared kinematic and id cuts.
    pub base: MuonBaseCuts,
}

impl Default for MuonSelectorCutBased {
    fn default() -> Self {
        Self {
            base: MuonBaseCuts {
                min_pt: 10.0,
                max_abs_eta: 2.4,
                max_dxy: 0.05,
                max_dz: 0.1,
                max_rel_iso: 0.1,
                max_sip3d: 4.0,
                apply_loose_id_pog: true,
                apply_medium_id_pog: true,
                apply_tight_charge: true,
            },
        }
    }
}

impl Selector<RecoLepton> for MuonSelectorCutBased {
    fn passes(&self, muon: &RecoLepton) -> bool {
        self.base.passes(muon)
    }
}

/// MVA-based muon selection: the loose cuts plus the lepton-MVA working
/// point.
#[derive(Debug, Clone)]
pub struct MuonSelectorMvaBased {
    /// Shared kinematic and id cuts.
    pub base: MuonBaseCuts,
    /// Lower cut on the lepton-MVA score.
    pub min_mva_tth: f64,
}

impl Default for MuonSelectorMvaBased {
    fn default() -> Self {
        Self {
            base: MuonSelectorFakeable::default().base,
            min_mva_tth: MVA_TTH_WP,
        }
    }
}

impl Selector<RecoLepton> for MuonSelectorMvaBased {
    fn passes(&self, muon: &RecoLepton) -> bool {
        self.base.passes(muon) && muon.vars.mva_tth >= self.min_mva_tth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttm_event::{LeptonVars, MuonVars, Particle};

    fn fakeable_muon(mva_tth: f64, jet_pt_ratio: f64, jet_btag_csv: f64) -> RecoLepton {
        RecoLepton::muon(
            Particle::new(25.0, 1.0, 0.0, 0.106),
            13,
            LeptonVars {
                dxy: 0.01,
                dz: 0.02,
                rel_iso: 0.2,
                sip3d: 2.0,
                mva_tth,
                jet_pt_ratio,
                jet_btag_csv,
                tight_charge: 2,
                ..Default::default()
            },
            MuonVars { passes_loose_id_pog: true, ..Default::default() },
        )
    }

    #[test]
    fn test_fakeable_bin0_at_wp_boundary() {
        let sel = MuonSelectorFakeable::default();
        // score exactly at the working point: bin 0 thresholds apply
        assert!(sel.passes(&fakeable_muon(0.75, 0.30, 0.605)));
        assert!(!sel.passes(&fakeable_muon(0.75, 0.29, 0.605)));
        assert!(!sel.passes(&fakeable_muon(0.75, 0.30, 0.61)));
    }

    #[test]
    fn test_fakeable_bin1_below_wp() {
        let sel = MuonSelectorFakeable::default();
        // score just below: bin 1 thresholds (no ratio cut, btag <= 0.89)
        assert!(sel.passes(&fakeable_muon(0.749, -999.0, 0.89)));
        assert!(!sel.passes(&fakeable_muon(0.749, -999.0, 0.891)));
    }

    #[test]
    fn test_fakeable_base_cuts() {
        let sel = MuonSelectorFakeable::default();
        let mut mu = fakeable_muon(0.9, 0.8, 0.1);
        assert!(sel.passes(&mu));
        mu.p4.pt = 9.9;
        assert!(!sel.passes(&mu));
        mu.p4.pt = 25.0;
        mu.vars.sip3d = 8.1;
        assert!(!sel.passes(&mu));
    }

    #[test]
    fn test_rejects_electrons() {
        let sel = MuonSelectorLoose::default();
        let el = RecoLepton::electron(
            Particle::new(25.0, 1.0, 0.0, 0.000511),
            11,
            Default::default(),
            Default::default(),
        );
        assert!(!sel.passes(&el));
    }

    #[test]
    fn test_tight_requires_mva_and_charge() {
        let sel = MuonSelectorTight::default();
        let mut mu = fakeable_muon(0.9, 0.8, 0.1);
        if let ttm_event::LeptonFlavor::Muon(ref mut vars) = mu.flavor {
            vars.passes_medium_id_pog = true;
        }
        assert!(sel.passes(&mu));
        mu.vars.mva_tth = 0.7;
        assert!(!sel.passes(&mu));
        mu.vars.mva_tth = 0.9;
        mu.vars.tight_charge = 1;
        assert!(!sel.passes(&mu));
    }
}
