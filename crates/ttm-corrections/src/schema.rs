//! JSON schema types for the injected correction tables.
//!
//! The measured scale-factor tables are configuration data, not code: they
//! are deserialized from JSON and compiled into a
//! [`CorrectionStore`](crate::CorrectionStore) once at startup. Every table
//! is optional; a missing table means the neutral factor 1.0.

use serde::{Deserialize, Serialize};

/// Top-level correction configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorrectionConfig {
    /// Electron identification/isolation tables.
    #[serde(default)]
    pub electron: Option<ElectronTablesSpec>,
    /// Muon identification/isolation tables.
    #[serde(default)]
    pub muon: Option<MuonTablesSpec>,
    /// Schema version tag.
    #[serde(default)]
    pub version: Option<String>,
}

impl CorrectionConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> ttm_core::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Electron scale-factor tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElectronTablesSpec {
    /// Loose-identification efficiency ratio over (pT, |eta|).
    #[serde(default)]
    pub id_loose: Option<Lut2Spec>,
    /// Isolation efficiency ratio over (pT, |eta|).
    #[serde(default)]
    pub iso: Option<Lut2Spec>,
    /// Conversion-veto and missing-hits efficiency ratio over (pT, |eta|).
    #[serde(default)]
    pub conv_veto: Option<Lut2Spec>,
    /// Tight-identification efficiency ratio, barrel/endcap pT tables.
    #[serde(default)]
    pub id_tight: Option<RegionLutSpec>,
}

/// Muon scale-factor tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MuonTablesSpec {
    /// Loose-identification efficiency ratio over (pT, |eta|).
    #[serde(default)]
    pub id_loose: Option<Lut2Spec>,
    /// Isolation efficiency ratio, barrel/endcap pT tables.
    #[serde(default)]
    pub iso: Option<RegionLutSpec>,
    /// Impact-parameter-cut efficiency ratio over |eta|.
    #[serde(default)]
    pub ip: Option<Lut1Spec>,
    /// Tight-identification efficiency ratio, barrel/endcap pT tables.
    #[serde(default)]
    pub id_tight: Option<RegionLutSpec>,
}

/// One-dimensional table: `values[i]` covers `[edges[i], edges[i+1])`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lut1Spec {
    /// Bin edges, strictly ascending.
    pub edges: Vec<f64>,
    /// One factor per bin.
    pub values: Vec<f64>,
}

/// Two-dimensional table over (pT, |eta|), pT-major.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lut2Spec {
    /// pT bin edges, strictly ascending.
    pub pt_edges: Vec<f64>,
    /// |eta| bin edges, strictly ascending.
    pub abs_eta_edges: Vec<f64>,
    /// One factor per (pT bin, |eta| bin) pair, pT-major.
    pub values: Vec<f64>,
}

/// Barrel/endcap pair of pT tables; the |eta| split is fixed per lepton
/// kind when the store is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionLutSpec {
    /// Barrel table.
    pub barrel: Lut1Spec,
    /// Endcap table.
    pub endcap: Lut1Spec,
}
