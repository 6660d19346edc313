//! Flat-column input contract.
//!
//! The ingestion layer delivers, per event and per object kind, an object
//! count plus parallel attribute arrays indexed `0..count`. These blocks are
//! plain data; the readers in [`crate::reader`] validate them and build the
//! typed objects.

use ttm_core::{Error, Result};

/// Fixed per-kind capacity bound on the number of objects per event.
pub const MAX_OBJECTS: usize = 32;

fn check_len(what: &str, column: &str, len: usize, n: usize) -> Result<()> {
    if len < n {
        return Err(Error::Ingestion(format!(
            "{what}: column '{column}' has {len} entries, expected at least {n}"
        )));
    }
    Ok(())
}

fn check_count(what: &str, n: usize) -> Result<()> {
    if n > MAX_OBJECTS {
        return Err(Error::Ingestion(format!(
            "{what}: number of objects stored in ntuple = {n}, exceeds the capacity bound {MAX_OBJECTS}"
        )));
    }
    Ok(())
}

/// Shared lepton block: attributes common to electrons and muons, stored
/// once under a single table name.
#[derive(Debug, Clone, Default)]
pub struct LeptonColumns {
    /// Number of leptons in the event.
    pub n: usize,
    /// Transverse momenta.
    pub pt: Vec<f64>,
    /// Pseudorapidities.
    pub eta: Vec<f64>,
    /// Azimuthal angles.
    pub phi: Vec<f64>,
    /// Masses.
    pub mass: Vec<f64>,
    /// Signed PDG ids.
    pub pdg_id: Vec<i32>,
    /// Transverse impact parameters.
    pub dxy: Vec<f64>,
    /// Longitudinal impact parameters.
    pub dz: Vec<f64>,
    /// Relative isolation.
    pub rel_iso: Vec<f64>,
    /// Charged mini-isolation components.
    pub mini_iso_charged: Vec<f64>,
    /// Neutral mini-isolation components.
    pub mini_iso_neutral: Vec<f64>,
    /// 3D impact-parameter significances.
    pub sip3d: Vec<f64>,
    /// Lepton-MVA scores.
    pub mva_tth: Vec<f64>,
    /// Charged-daughter multiplicities of the nearby jet.
    pub jet_n_dau_charged: Vec<f64>,
    /// Lepton pT transverse to the nearby-jet axis.
    pub jet_pt_rel: Vec<f64>,
    /// Lepton-to-jet pT ratios.
    pub jet_pt_ratio: Vec<f64>,
    /// Nearby-jet b-tag discriminants.
    pub jet_btag_csv: Vec<f64>,
    /// Tight-charge flags.
    pub tight_charge: Vec<i32>,
    /// Electric charges.
    pub charge: Vec<i32>,
}

impl LeptonColumns {
    /// Validate the capacity bound and that every column covers `n` entries.
    pub fn validate(&self) -> Result<()> {
        let what = "lepton columns";
        check_count(what, self.n)?;
        check_len(what, "pt", self.pt.len(), self.n)?;
        check_len(what, "eta", self.eta.len(), self.n)?;
        check_len(what, "phi", self.phi.len(), self.n)?;
        check_len(what, "mass", self.mass.len(), self.n)?;
        check_len(what, "pdgId", self.pdg_id.len(), self.n)?;
        check_len(what, "dxy", self.dxy.len(), self.n)?;
        check_len(what, "dz", self.dz.len(), self.n)?;
        check_len(what, "miniRelIso", self.rel_iso.len(), self.n)?;
        check_len(what, "miniIsoCharged", self.mini_iso_charged.len(), self.n)?;
        check_len(what, "miniIsoNeutral", self.mini_iso_neutral.len(), self.n)?;
        check_len(what, "sip3d", self.sip3d.len(), self.n)?;
        check_len(what, "mvaTTH", self.mva_tth.len(), self.n)?;
        check_len(what, "jetNDauChargedMVASel", self.jet_n_dau_charged.len(), self.n)?;
        check_len(what, "jetPtRel", self.jet_pt_rel.len(), self.n)?;
        check_len(what, "jetPtRatio", self.jet_pt_ratio.len(), self.n)?;
        check_len(what, "jetBTagCSV", self.jet_btag_csv.len(), self.n)?;
        check_len(what, "tightCharge", self.tight_charge.len(), self.n)?;
        check_len(what, "charge", self.charge.len(), self.n)?;
        Ok(())
    }
}

/// Muon-specific columns, parallel to the shared lepton block.
#[derive(Debug, Clone, Default)]
pub struct MuonColumns {
    /// Loose PF-muon POG id flags.
    pub loose_id_pog: Vec<i32>,
    /// Medium PF-muon POG id flags.
    pub medium_id_pog: Vec<i32>,
    /// Segment compatibility scores.
    pub segment_compatibility: Vec<f64>,
    /// Relative pT uncertainties; `None` when the ntuple lacks the column.
    pub dpt_div_pt: Option<Vec<f64>>,
}

impl MuonColumns {
    /// Validate that every column covers `n` entries.
    pub fn validate(&self, n: usize) -> Result<()> {
        let what = "muon columns";
        check_len(what, "looseIdPOG", self.loose_id_pog.len(), n)?;
        check_len(what, "mediumMuonId", self.medium_id_pog.len(), n)?;
        check_len(what, "segmentCompatibility", self.segment_compatibility.len(), n)?;
        if let Some(col) = &self.dpt_div_pt {
            check_len(what, "dpt_div_pt", col.len(), n)?;
        }
        Ok(())
    }
}

/// Electron-specific columns, parallel to the shared lepton block.
#[derive(Debug, Clone, Default)]
pub struct ElectronColumns {
    /// Raw EGamma POG MVA scores.
    pub mva_raw_pog: Vec<f64>,
    /// Binned EGamma POG MVA working points.
    pub mva_id_pog: Vec<i32>,
    /// Missing inner tracker hits.
    pub n_lost_hits: Vec<i32>,
    /// Conversion-veto flags.
    pub conversion_veto: Vec<i32>,
    /// Shower shape sigma-ieta-ieta.
    pub sigma_eta_eta: Vec<f64>,
    /// H/E calorimeter ratios.
    pub hoe: Vec<f64>,
    /// Track-cluster delta eta.
    pub delta_eta: Vec<f64>,
    /// Track-cluster delta phi.
    pub delta_phi: Vec<f64>,
    /// 1/E - 1/p.
    pub oo_e_minus_oo_p: Vec<f64>,
}

impl ElectronColumns {
    /// Validate that every column covers `n` entries.
    pub fn validate(&self, n: usize) -> Result<()> {
        let what = "electron columns";
        check_len(what, "mvaRawSpring15NonTrig", self.mva_raw_pog.len(), n)?;
        check_len(what, "mvaIdSpring15NonTrig", self.mva_id_pog.len(), n)?;
        check_len(what, "lostHits", self.n_lost_hits.len(), n)?;
        check_len(what, "convVeto", self.conversion_veto.len(), n)?;
        check_len(what, "sigmaIEtaIEta", self.sigma_eta_eta.len(), n)?;
        check_len(what, "hadronicOverEm", self.hoe.len(), n)?;
        check_len(what, "dEtaScTrkIn", self.delta_eta.len(), n)?;
        check_len(what, "dPhiScTrkIn", self.delta_phi.len(), n)?;
        check_len(what, "eInvMinusPInv", self.oo_e_minus_oo_p.len(), n)?;
        Ok(())
    }
}

/// Hadronic-tau columns.
#[derive(Debug, Clone, Default)]
pub struct HadTauColumns {
    /// Number of hadronic taus in the event.
    pub n: usize,
    /// Transverse momenta.
    pub pt: Vec<f64>,
    /// Pseudorapidities.
    pub eta: Vec<f64>,
    /// Azimuthal angles.
    pub phi: Vec<f64>,
    /// Masses.
    pub mass: Vec<f64>,
    /// Electric charges.
    pub charge: Vec<i32>,
    /// Transverse impact parameters.
    pub dxy: Vec<f64>,
    /// Longitudinal impact parameters.
    pub dz: Vec<f64>,
    /// Decay-mode-finding flags.
    pub id_decay_mode: Vec<i32>,
    /// Decay-mode-finding flags including new decay modes.
    pub id_decay_mode_new_dms: Vec<i32>,
    /// MVA-isolation working points, ΔR = 0.3.
    pub id_mva_dr03: Vec<i32>,
    /// Raw MVA-isolation scores, ΔR = 0.3.
    pub raw_mva_dr03: Vec<f64>,
    /// MVA-isolation working points, ΔR = 0.5.
    pub id_mva_dr05: Vec<i32>,
    /// Raw MVA-isolation scores, ΔR = 0.5.
    pub raw_mva_dr05: Vec<f64>,
    /// Combined-isolation working points, ΔR = 0.3.
    pub id_cut_dr03: Vec<i32>,
    /// Raw combined-isolation sums, ΔR = 0.3.
    pub raw_cut_dr03: Vec<f64>,
    /// Combined-isolation working points, ΔR = 0.5.
    pub id_cut_dr05: Vec<i32>,
    /// Raw combined-isolation sums, ΔR = 0.5.
    pub raw_cut_dr05: Vec<f64>,
    /// Anti-electron discriminator working points.
    pub anti_electron: Vec<i32>,
    /// Anti-muon discriminator working points.
    pub anti_muon: Vec<i32>,
}

impl HadTauColumns {
    /// Validate the capacity bound and that every column covers `n` entries.
    pub fn validate(&self) -> Result<()> {
        let what = "hadronic-tau columns";
        check_count(what, self.n)?;
        check_len(what, "pt", self.pt.len(), self.n)?;
        check_len(what, "eta", self.eta.len(), self.n)?;
        check_len(what, "phi", self.phi.len(), self.n)?;
        check_len(what, "mass", self.mass.len(), self.n)?;
        check_len(what, "charge", self.charge.len(), self.n)?;
        check_len(what, "dxy", self.dxy.len(), self.n)?;
        check_len(what, "dz", self.dz.len(), self.n)?;
        check_len(what, "idDecayMode", self.id_decay_mode.len(), self.n)?;
        check_len(what, "idDecayModeNewDMs", self.id_decay_mode_new_dms.len(), self.n)?;
        check_len(what, "idMVArun2dR03", self.id_mva_dr03.len(), self.n)?;
        check_len(what, "rawMVArun2dR03", self.raw_mva_dr03.len(), self.n)?;
        check_len(what, "idMVArun2", self.id_mva_dr05.len(), self.n)?;
        check_len(what, "rawMVArun2", self.raw_mva_dr05.len(), self.n)?;
        check_len(what, "idCI3hitdR03", self.id_cut_dr03.len(), self.n)?;
        check_len(what, "isoCI3hitdR03", self.raw_cut_dr03.len(), self.n)?;
        check_len(what, "idCI3hit", self.id_cut_dr05.len(), self.n)?;
        check_len(what, "isoCI3hit", self.raw_cut_dr05.len(), self.n)?;
        check_len(what, "idAntiErun2", self.anti_electron.len(), self.n)?;
        check_len(what, "idAntiMu", self.anti_muon.len(), self.n)?;
        Ok(())
    }
}

/// Jet columns.
#[derive(Debug, Clone, Default)]
pub struct JetColumns {
    /// Number of jets in the event.
    pub n: usize,
    /// Transverse momenta.
    pub pt: Vec<f64>,
    /// Pseudorapidities.
    pub eta: Vec<f64>,
    /// Azimuthal angles.
    pub phi: Vec<f64>,
    /// Masses.
    pub mass: Vec<f64>,
    /// Nominal energy-correction factors.
    pub corr: Vec<f64>,
    /// +1 sigma energy-correction factors.
    pub corr_jec_up: Vec<f64>,
    /// -1 sigma energy-correction factors.
    pub corr_jec_down: Vec<f64>,
    /// CSV b-tag discriminants.
    pub btag_csv: Vec<f64>,
    /// b-tag data/MC correction weights.
    pub btag_weight: Vec<f64>,
}

impl JetColumns {
    /// Validate the capacity bound and that every column covers `n` entries.
    pub fn validate(&self) -> Result<()> {
        let what = "jet columns";
        check_count(what, self.n)?;
        check_len(what, "pt", self.pt.len(), self.n)?;
        check_len(what, "eta", self.eta.len(), self.n)?;
        check_len(what, "phi", self.phi.len(), self.n)?;
        check_len(what, "mass", self.mass.len(), self.n)?;
        check_len(what, "corr", self.corr.len(), self.n)?;
        check_len(what, "corr_JECUp", self.corr_jec_up.len(), self.n)?;
        check_len(what, "corr_JECDown", self.corr_jec_down.len(), self.n)?;
        check_len(what, "btagCSV", self.btag_csv.len(), self.n)?;
        check_len(what, "bTagWeight", self.btag_weight.len(), self.n)?;
        Ok(())
    }
}

/// Generator-particle columns, shared by the generator lepton, hadronic-tau
/// and jet readers; `pdg_id` is only present for kinds that store it.
#[derive(Debug, Clone, Default)]
pub struct GenParticleColumns {
    /// Number of generator particles in the event.
    pub n: usize,
    /// Transverse momenta.
    pub pt: Vec<f64>,
    /// Pseudorapidities.
    pub eta: Vec<f64>,
    /// Azimuthal angles.
    pub phi: Vec<f64>,
    /// Masses.
    pub mass: Vec<f64>,
    /// Signed PDG ids, where stored.
    pub pdg_id: Option<Vec<i32>>,
}

impl GenParticleColumns {
    /// Validate the capacity bound and that every column covers `n` entries.
    pub fn validate(&self) -> Result<()> {
        let what = "generator-particle columns";
        check_count(what, self.n)?;
        check_len(what, "pt", self.pt.len(), self.n)?;
        check_len(what, "eta", self.eta.len(), self.n)?;
        check_len(what, "phi", self.phi.len(), self.n)?;
        check_len(what, "mass", self.mass.len(), self.n)?;
        if let Some(col) = &self.pdg_id {
            check_len(what, "pdgId", col.len(), self.n)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_bound_is_fatal() {
        let cols = HadTauColumns { n: MAX_OBJECTS + 1, ..Default::default() };
        let err = cols.validate().unwrap_err();
        assert!(matches!(err, ttm_core::Error::Ingestion(_)));
    }

    #[test]
    fn test_short_column_is_fatal() {
        let cols = LeptonColumns { n: 1, ..Default::default() };
        assert!(cols.validate().is_err());
    }

    #[test]
    fn test_empty_block_is_valid() {
        assert!(LeptonColumns::default().validate().is_ok());
        assert!(HadTauColumns::default().validate().is_ok());
        assert!(JetColumns::default().validate().is_ok());
    }
}
