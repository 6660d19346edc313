//! Readers: flat column blocks → typed object collections.
//!
//! Several logical readers may share one underlying physical table (the
//! muon and electron readers both consume the common lepton block). The
//! association between a table name and its row-count column must be unique;
//! the [`TableRegistry`] enforces this at reader construction, which is the
//! explicit-object replacement for the static instance maps of the original
//! framework.

use std::collections::HashMap;

use ttm_core::{Error, Result, ELECTRON_PDG_ID, MUON_PDG_ID};

use crate::columns::{
    ElectronColumns, GenParticleColumns, HadTauColumns, JetColumns, LeptonColumns, MuonColumns,
};
use crate::gen::{GenHadTau, GenJet, GenLepton};
use crate::hadtau::RecoHadTau;
use crate::jet::RecoJet;
use crate::lepton::{ElectronVars, LeptonVars, MuonVars, RecoLepton};
use crate::particle::Particle;

/// Default lepton table name.
pub const DEFAULT_LEPTON_TABLE: &str = "selLeptons";
/// Default lepton row-count column.
pub const DEFAULT_LEPTON_COUNT: &str = "nselLeptons";
/// Default hadronic-tau table name.
pub const DEFAULT_HADTAU_TABLE: &str = "TauGood";
/// Default hadronic-tau row-count column.
pub const DEFAULT_HADTAU_COUNT: &str = "nTauGood";
/// Default jet table name.
pub const DEFAULT_JET_TABLE: &str = "Jet";
/// Default jet row-count column.
pub const DEFAULT_JET_COUNT: &str = "nJet";

/// Derive the physical column name of an attribute within a table.
pub fn column_name(table: &str, attribute: &str) -> String {
    format!("{table}_{attribute}")
}

/// Registry of table-name → row-count-column associations.
#[derive(Debug, Default)]
pub struct TableRegistry {
    assoc: HashMap<String, String>,
}

impl TableRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a (table, count-column) association.
    ///
    /// Re-registering the same pair is fine (readers share tables);
    /// registering the same table with a different count column is a fatal
    /// configuration error.
    pub fn register(&mut self, table: &str, count_column: &str) -> Result<()> {
        match self.assoc.get(table) {
            None => {
                self.assoc.insert(table.to_owned(), count_column.to_owned());
                Ok(())
            }
            Some(existing) if existing == count_column => Ok(()),
            Some(existing) => Err(Error::Config(format!(
                "association between count column and table name must be unique: \
                 present association '{count_column}' with '{table}' does not match \
                 previous association '{existing}' with '{table}'"
            ))),
        }
    }
}

fn shared_vars(cols: &LeptonColumns, i: usize) -> LeptonVars {
    LeptonVars {
        dxy: cols.dxy[i],
        dz: cols.dz[i],
        rel_iso: cols.rel_iso[i],
        mini_iso_charged: cols.mini_iso_charged[i],
        mini_iso_neutral: cols.mini_iso_neutral[i],
        sip3d: cols.sip3d[i],
        mva_tth: cols.mva_tth[i],
        jet_n_dau_charged: cols.jet_n_dau_charged[i],
        jet_pt_rel: cols.jet_pt_rel[i],
        jet_pt_ratio: cols.jet_pt_ratio[i],
        jet_btag_csv: cols.jet_btag_csv[i],
        tight_charge: cols.tight_charge[i],
        charge: cols.charge[i],
    }
}

fn p4_at(pt: &[f64], eta: &[f64], phi: &[f64], mass: &[f64], i: usize) -> Particle {
    Particle::new(pt[i], eta[i], phi[i], mass[i])
}

/// Reads muons out of the shared lepton block.
#[derive(Debug)]
pub struct MuonReader {
    table: String,
}

impl MuonReader {
    /// Create a reader on the default lepton table.
    pub fn new(registry: &mut TableRegistry) -> Result<Self> {
        Self::with_table(registry, DEFAULT_LEPTON_COUNT, DEFAULT_LEPTON_TABLE)
    }

    /// Create a reader on a custom table.
    pub fn with_table(
        registry: &mut TableRegistry,
        count_column: &str,
        table: &str,
    ) -> Result<Self> {
        registry.register(table, count_column)?;
        Ok(Self { table: table.to_owned() })
    }

    /// Name of the table this reader consumes.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Build the muon collection: entries of the lepton block with
    /// |PDG id| == 13, in ntuple order.
    pub fn read(&self, leptons: &LeptonColumns, muons: &MuonColumns) -> Result<Vec<RecoLepton>> {
        leptons.validate()?;
        muons.validate(leptons.n)?;
        let mut out = Vec::with_capacity(leptons.n);
        for i in 0..leptons.n {
            if leptons.pdg_id[i].abs() != MUON_PDG_ID {
                continue;
            }
            let vars = MuonVars {
                passes_loose_id_pog: muons.loose_id_pog[i] != 0,
                passes_medium_id_pog: muons.medium_id_pog[i] != 0,
                segment_compatibility: muons.segment_compatibility[i],
                dpt_div_pt: muons.dpt_div_pt.as_ref().map(|col| col[i]),
            };
            out.push(RecoLepton::muon(
                p4_at(&leptons.pt, &leptons.eta, &leptons.phi, &leptons.mass, i),
                leptons.pdg_id[i],
                shared_vars(leptons, i),
                vars,
            ));
        }
        Ok(out)
    }
}

/// Reads electrons out of the shared lepton block.
#[derive(Debug)]
pub struct ElectronReader {
    table: String,
}

impl ElectronReader {
    /// Create a reader on the default lepton table.
    pub fn new(registry: &mut TableRegistry) -> Result<Self> {
        Self::with_table(registry, DEFAULT_LEPTON_COUNT, DEFAULT_LEPTON_TABLE)
    }

    /// Create a reader on a custom table.
    pub fn with_table(
        registry: &mut TableRegistry,
        count_column: &str,
        table: &str,
    ) -> Result<Self> {
        registry.register(table, count_column)?;
        Ok(Self { table: table.to_owned() })
    }

    /// Name of the table this reader consumes.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Build the electron collection: entries of the lepton block with
    /// |PDG id| == 11, in ntuple order.
    pub fn read(
        &self,
        leptons: &LeptonColumns,
        electrons: &ElectronColumns,
    ) -> Result<Vec<RecoLepton>> {
        leptons.validate()?;
        electrons.validate(leptons.n)?;
        let mut out = Vec::with_capacity(leptons.n);
        for i in 0..leptons.n {
            if leptons.pdg_id[i].abs() != ELECTRON_PDG_ID {
                continue;
            }
            let vars = ElectronVars {
                mva_raw_pog: electrons.mva_raw_pog[i],
                mva_id_pog: electrons.mva_id_pog[i],
                n_lost_hits: electrons.n_lost_hits[i],
                passes_conversion_veto: electrons.conversion_veto[i] != 0,
                sigma_eta_eta: electrons.sigma_eta_eta[i],
                hoe: electrons.hoe[i],
                delta_eta: electrons.delta_eta[i],
                delta_phi: electrons.delta_phi[i],
                oo_e_minus_oo_p: electrons.oo_e_minus_oo_p[i],
            };
            out.push(RecoLepton::electron(
                p4_at(&leptons.pt, &leptons.eta, &leptons.phi, &leptons.mass, i),
                leptons.pdg_id[i],
                shared_vars(leptons, i),
                vars,
            ));
        }
        Ok(out)
    }
}

/// Reads the hadronic-tau collection.
#[derive(Debug)]
pub struct HadTauReader {
    table: String,
}

impl HadTauReader {
    /// Create a reader on the default hadronic-tau table.
    pub fn new(registry: &mut TableRegistry) -> Result<Self> {
        Self::with_table(registry, DEFAULT_HADTAU_COUNT, DEFAULT_HADTAU_TABLE)
    }

    /// Create a reader on a custom table.
    pub fn with_table(
        registry: &mut TableRegistry,
        count_column: &str,
        table: &str,
    ) -> Result<Self> {
        registry.register(table, count_column)?;
        Ok(Self { table: table.to_owned() })
    }

    /// Name of the table this reader consumes.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Build the hadronic-tau collection in ntuple order.
    pub fn read(&self, cols: &HadTauColumns) -> Result<Vec<RecoHadTau>> {
        cols.validate()?;
        let mut out = Vec::with_capacity(cols.n);
        for i in 0..cols.n {
            out.push(RecoHadTau {
                p4: p4_at(&cols.pt, &cols.eta, &cols.phi, &cols.mass, i),
                charge: cols.charge[i],
                dxy: cols.dxy[i],
                dz: cols.dz[i],
                decay_mode_finding: cols.id_decay_mode[i],
                decay_mode_finding_new_dms: cols.id_decay_mode_new_dms[i],
                id_mva_dr03: cols.id_mva_dr03[i],
                raw_mva_dr03: cols.raw_mva_dr03[i],
                id_mva_dr05: cols.id_mva_dr05[i],
                raw_mva_dr05: cols.raw_mva_dr05[i],
                id_cut_dr03: cols.id_cut_dr03[i],
                raw_cut_dr03: cols.raw_cut_dr03[i],
                id_cut_dr05: cols.id_cut_dr05[i],
                raw_cut_dr05: cols.raw_cut_dr05[i],
                anti_electron: cols.anti_electron[i],
                anti_muon: cols.anti_muon[i],
            });
        }
        Ok(out)
    }
}

/// Reads the jet collection.
#[derive(Debug)]
pub struct JetReader {
    table: String,
}

impl JetReader {
    /// Create a reader on the default jet table.
    pub fn new(registry: &mut TableRegistry) -> Result<Self> {
        Self::with_table(registry, DEFAULT_JET_COUNT, DEFAULT_JET_TABLE)
    }

    /// Create a reader on a custom table.
    pub fn with_table(
        registry: &mut TableRegistry,
        count_column: &str,
        table: &str,
    ) -> Result<Self> {
        registry.register(table, count_column)?;
        Ok(Self { table: table.to_owned() })
    }

    /// Name of the table this reader consumes.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Build the jet collection in ntuple order; truth matching is attached
    /// separately once the generator collections are available.
    pub fn read(&self, cols: &JetColumns) -> Result<Vec<RecoJet>> {
        cols.validate()?;
        let mut out = Vec::with_capacity(cols.n);
        for i in 0..cols.n {
            out.push(RecoJet::new(
                p4_at(&cols.pt, &cols.eta, &cols.phi, &cols.mass, i),
                cols.corr[i],
                cols.corr_jec_up[i],
                cols.corr_jec_down[i],
                cols.btag_csv[i],
                cols.btag_weight[i],
                i as i32,
            ));
        }
        Ok(out)
    }
}

/// Build generator leptons from a generator-particle block; the block must
/// carry PDG ids.
pub fn read_gen_leptons(cols: &GenParticleColumns) -> Result<Vec<GenLepton>> {
    cols.validate()?;
    let pdg_id = cols.pdg_id.as_ref().ok_or_else(|| {
        Error::Ingestion("generator-lepton columns lack the pdgId attribute".to_owned())
    })?;
    Ok((0..cols.n)
        .map(|i| GenLepton::new(p4_at(&cols.pt, &cols.eta, &cols.phi, &cols.mass, i), pdg_id[i]))
        .collect())
}

/// Build generator hadronic taus from a generator-particle block.
pub fn read_gen_hadtaus(cols: &GenParticleColumns) -> Result<Vec<GenHadTau>> {
    cols.validate()?;
    Ok((0..cols.n)
        .map(|i| GenHadTau { p4: p4_at(&cols.pt, &cols.eta, &cols.phi, &cols.mass, i) })
        .collect())
}

/// Build generator jets from a generator-particle block.
pub fn read_gen_jets(cols: &GenParticleColumns) -> Result<Vec<GenJet>> {
    cols.validate()?;
    Ok((0..cols.n)
        .map(|i| GenJet { p4: p4_at(&cols.pt, &cols.eta, &cols.phi, &cols.mass, i) })
        .collect())
}
