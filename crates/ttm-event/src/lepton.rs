//! Reconstructed leptons.
//!
//! The C++ analysis models electrons and muons as subclasses of a common
//! `RecoLepton`; here the shared observables live in [`LeptonVars`] and the
//! kind-specific ones in a [`LeptonFlavor`] sum type, so `is_electron` /
//! `is_muon` are mutually exclusive and exhaustive by construction.

use ttm_core::LeptonKind;

use crate::particle::Particle;

/// Lepton-MVA working point above which a lepton counts as MVA-selected;
/// also the bin edge of the fakeable-tier cuts and of the cone-pT recipe.
pub const MVA_TTH_WP: f64 = 0.75;

/// Observables common to electrons and muons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LeptonVars {
    /// Transverse impact parameter w.r.t. the primary vertex, cm.
    pub dxy: f64,
    /// Longitudinal impact parameter w.r.t. the primary vertex, cm.
    pub dz: f64,
    /// Relative isolation.
    pub rel_iso: f64,
    /// Charged component of the mini-isolation sum.
    pub mini_iso_charged: f64,
    /// Neutral component of the mini-isolation sum.
    pub mini_iso_neutral: f64,
    /// Significance of the 3D impact parameter.
    pub sip3d: f64,
    /// Lepton-MVA discriminant of the ttH multilepton analysis.
    pub mva_tth: f64,
    /// Number of charged daughters of the nearby jet entering the MVA.
    pub jet_n_dau_charged: f64,
    /// pT of the lepton transverse to the nearby-jet axis.
    pub jet_pt_rel: f64,
    /// Ratio of lepton pT to nearby-jet pT.
    pub jet_pt_ratio: f64,
    /// CSV b-tagging discriminant of the nearby jet.
    pub jet_btag_csv: f64,
    /// Tight-charge quality flag (2 = all charge measurements consistent).
    pub tight_charge: i32,
    /// Reconstructed electric charge.
    pub charge: i32,
}

/// Electron-specific observables.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElectronVars {
    /// Raw EGamma POG identification MVA score.
    pub mva_raw_pog: f64,
    /// Binned EGamma POG identification MVA working point.
    pub mva_id_pog: i32,
    /// Missing hits in the innermost tracker layers.
    pub n_lost_hits: i32,
    /// Photon-conversion veto.
    pub passes_conversion_veto: bool,
    /// Second shower moment in the eta direction (trigger-emulation cut).
    pub sigma_eta_eta: f64,
    /// Hadronic-over-electromagnetic calorimeter energy ratio.
    pub hoe: f64,
    /// Track-cluster matching, eta direction.
    pub delta_eta: f64,
    /// Track-cluster matching, phi direction.
    pub delta_phi: f64,
    /// 1/E - 1/p difference between calorimeter and tracker.
    pub oo_e_minus_oo_p: f64,
}

/// Muon-specific observables.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MuonVars {
    /// Loose PF-muon POG identification.
    pub passes_loose_id_pog: bool,
    /// Medium PF-muon POG identification.
    pub passes_medium_id_pog: bool,
    /// Muon segment compatibility score.
    pub segment_compatibility: f64,
    /// Relative pT uncertainty; only present in ntuples that store it.
    pub dpt_div_pt: Option<f64>,
}

/// Kind-specific payload of a reconstructed lepton.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LeptonFlavor {
    /// Electron payload.
    Electron(ElectronVars),
    /// Muon payload.
    Muon(MuonVars),
}

/// A reconstructed electron or muon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecoLepton {
    /// Four-momentum.
    pub p4: Particle,
    /// Signed PDG particle code.
    pub pdg_id: i32,
    /// Observables shared between the two kinds.
    pub vars: LeptonVars,
    /// Kind-specific observables.
    pub flavor: LeptonFlavor,
}

impl RecoLepton {
    /// Construct an electron.
    pub fn electron(p4: Particle, pdg_id: i32, vars: LeptonVars, electron: ElectronVars) -> Self {
        Self { p4, pdg_id, vars, flavor: LeptonFlavor::Electron(electron) }
    }

    /// Construct a muon.
    pub fn muon(p4: Particle, pdg_id: i32, vars: LeptonVars, muon: MuonVars) -> Self {
        Self { p4, pdg_id, vars, flavor: LeptonFlavor::Muon(muon) }
    }

    /// Whether this lepton is an electron.
    pub fn is_electron(&self) -> bool {
        matches!(self.flavor, LeptonFlavor::Electron(_))
    }

    /// Whether this lepton is a muon.
    pub fn is_muon(&self) -> bool {
        matches!(self.flavor, LeptonFlavor::Muon(_))
    }

    /// The lepton kind, for dispatch into the correction engine.
    pub fn kind(&self) -> LeptonKind {
        match self.flavor {
            LeptonFlavor::Electron(_) => LeptonKind::Electron,
            LeptonFlavor::Muon(_) => LeptonKind::Muon,
        }
    }

    /// Electron payload, if this lepton is an electron.
    pub fn electron_vars(&self) -> Option<&ElectronVars> {
        match &self.flavor {
            LeptonFlavor::Electron(e) => Some(e),
            LeptonFlavor::Muon(_) => None,
        }
    }

    /// Muon payload, if this lepton is a muon.
    pub fn muon_vars(&self) -> Option<&MuonVars> {
        match &self.flavor {
            LeptonFlavor::Muon(m) => Some(m),
            LeptonFlavor::Electron(_) => None,
        }
    }

    /// Cone-corrected pT used for fakeable leptons in downstream MVA inputs:
    /// leptons passing the MVA working point keep their pT, others are
    /// rescaled to the nearby-jet scale.
    pub fn cone_pt(&self) -> f64 {
        if self.vars.mva_tth >= MVA_TTH_WP || self.vars.jet_pt_ratio <= 0.0 {
            self.p4.pt
        } else {
            0.85 * self.p4.pt / self.vars.jet_pt_ratio
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p4() -> Particle {
        Particle::new(30.0, 0.7, -1.2, 0.000511)
    }

    #[test]
    fn test_kind_flags_exclusive_and_exhaustive() {
        let e = RecoLepton::electron(p4(), -11, Default::default(), Default::default());
        let m = RecoLepton::muon(p4(), 13, Default::default(), Default::default());
        assert!(e.is_electron() && !e.is_muon());
        assert!(m.is_muon() && !m.is_electron());
        assert_eq!(e.kind(), ttm_core::LeptonKind::Electron);
        assert_eq!(m.kind(), ttm_core::LeptonKind::Muon);
    }

    #[test]
    fn test_flavor_payload_access() {
        let e = RecoLepton::electron(p4(), 11, Default::default(), Default::default());
        assert!(e.electron_vars().is_some());
        assert!(e.muon_vars().is_none());
    }

    #[test]
    fn test_cone_pt() {
        let mut vars = LeptonVars { mva_tth: 0.9, jet_pt_ratio: 0.5, ..Default::default() };
        let passing = RecoLepton::muon(p4(), 13, vars, Default::default());
        assert_relative_eq!(passing.cone_pt(), 30.0);

        vars.mva_tth = 0.2;
        let failing = RecoLepton::muon(p4(), 13, vars, Default::default());
        assert_relative_eq!(failing.cone_pt(), 0.85 * 30.0 / 0.5);
    }
}
