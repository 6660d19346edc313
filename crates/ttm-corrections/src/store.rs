//! Compiled correction store.
//!
//! The store is built once from a [`CorrectionConfig`] and passed by
//! reference into every scale-factor entry point; there is no global or
//! lazily-initialized state. Table validation happens here, so a store
//! that builds successfully never fails a lookup.

use tracing::{debug, info};
use ttm_core::Result;

use crate::lut::{Lut1, Lut2, RegionLut};
use crate::schema::{CorrectionConfig, Lut1Spec, Lut2Spec, RegionLutSpec};

/// |eta| boundary between the electron barrel and endcap tables.
pub const ELECTRON_BARREL_ENDCAP_SPLIT: f64 = 1.479;
/// |eta| boundary between the muon barrel and endcap tables.
pub const MUON_BARREL_ENDCAP_SPLIT: f64 = 1.2;

/// Compiled electron tables; `None` means neutral.
#[derive(Debug, Clone, Default)]
pub struct ElectronTables {
    /// Loose-identification efficiency ratio.
    pub id_loose: Option<Lut2>,
    /// Isolation efficiency ratio.
    pub iso: Option<Lut2>,
    /// Conversion-veto and missing-hits efficiency ratio.
    pub conv_veto: Option<Lut2>,
    /// Tight-identification efficiency ratio, split at 1.479.
    pub id_tight: Option<RegionLut>,
}

/// Compiled muon tables; `None` means neutral.
#[derive(Debug, Clone, Default)]
pub struct MuonTables {
    /// Loose-identification efficiency ratio.
    pub id_loose: Option<Lut2>,
    /// Isolation efficiency ratio, split at 1.2.
    pub iso: Option<RegionLut>,
    /// Impact-parameter-cut efficiency ratio over |eta|.
    pub ip: Option<Lut1>,
    /// Tight-identification efficiency ratio, split at 1.2.
    pub id_tight: Option<RegionLut>,
}

/// All compiled correction tables.
///
/// An empty store (the `Default`) yields the neutral factor 1.0 from every
/// scale-factor entry point.
#[derive(Debug, Clone, Default)]
pub struct CorrectionStore {
    /// Electron tables.
    pub electron: ElectronTables,
    /// Muon tables.
    pub muon: MuonTables,
}

fn build_lut1(spec: Lut1Spec) -> Result<Lut1> {
    Lut1::new(spec.edges, spec.values)
}

fn build_lut2(spec: Lut2Spec) -> Result<Lut2> {
    Lut2::new(spec.pt_edges, spec.abs_eta_edges, spec.values)
}

fn build_region(spec: RegionLutSpec, split_abs_eta: f64) -> Result<RegionLut> {
    Ok(RegionLut::new(split_abs_eta, build_lut1(spec.barrel)?, build_lut1(spec.endcap)?))
}

impl CorrectionStore {
    /// Compile a configuration into a store, validating every table.
    pub fn from_config(config: CorrectionConfig) -> Result<Self> {
        let mut store = Self::default();

        if let Some(e) = config.electron {
            store.electron = ElectronTables {
                id_loose: e.id_loose.map(build_lut2).transpose()?,
                iso: e.iso.map(build_lut2).transpose()?,
                conv_veto: e.conv_veto.map(build_lut2).transpose()?,
                id_tight: e
                    .id_tight
                    .map(|s| build_region(s, ELECTRON_BARREL_ENDCAP_SPLIT))
                    .transpose()?,
            };
            debug!(
                id_loose = store.electron.id_loose.is_some(),
                iso = store.electron.iso.is_some(),
                conv_veto = store.electron.conv_veto.is_some(),
                id_tight = store.electron.id_tight.is_some(),
                "compiled electron correction tables"
            );
        }

        if let Some(m) = config.muon {
            store.muon = MuonTables {
                id_loose: m.id_loose.map(build_lut2).transpose()?,
                iso: m.iso.map(|s| build_region(s, MUON_BARREL_ENDCAP_SPLIT)).transpose()?,
                ip: m.ip.map(build_lut1).transpose()?,
                id_tight: m
                    .id_tight
                    .map(|s| build_region(s, MUON_BARREL_ENDCAP_SPLIT))
                    .transpose()?,
            };
            debug!(
                id_loose = store.muon.id_loose.is_some(),
                iso = store.muon.iso.is_some(),
                ip = store.muon.ip.is_some(),
                id_tight = store.muon.id_tight.is_some(),
                "compiled muon correction tables"
            );
        }

        info!(version = config.version.as_deref().unwrap_or("unversioned"), "correction store built");
        Ok(store)
    }

    /// Parse and compile a JSON configuration string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_config(CorrectionConfig::from_json_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::lepton_sf::sf_lepton_id_iso_tight;
    use ttm_core::LeptonKind;

    #[test]
    fn test_empty_store_is_neutral() {
        let store = CorrectionStore::from_json_str("{}").unwrap();
        assert_relative_eq!(sf_lepton_id_iso_tight(&store, LeptonKind::Electron, 30.0, 1.0), 1.0);
        assert_relative_eq!(sf_lepton_id_iso_tight(&store, LeptonKind::Muon, 30.0, 1.0), 1.0);
    }

    #[test]
    fn test_malformed_table_is_fatal() {
        // descending pt edges
        let json = r#"{
            "muon": { "ip": { "edges": [2.4, 0.0], "values": [0.99] } }
        }"#;
        assert!(CorrectionStore::from_json_str(json).is_err());
    }

    #[test]
    fn test_region_split_assignment() {
        let json = r#"{
            "electron": {
                "id_tight": {
                    "barrel": { "edges": [10.0, 100.0], "values": [0.95] },
                    "endcap": { "edges": [10.0, 100.0], "values": [0.90] }
                }
            }
        }"#;
        let store = CorrectionStore::from_json_str(json).unwrap();
        let lut = store.electron.id_tight.unwrap();
        // electron split sits at 1.479, not the muon 1.2
        assert_relative_eq!(lut.eval(30.0, 1.3), 0.95);
        assert_relative_eq!(lut.eval(30.0, 1.479), 0.90);
    }
}
