//! Common physics-object types

use serde::{Deserialize, Serialize};

/// PDG particle code of the electron (positive convention; the sign carries
/// the charge).
pub const ELECTRON_PDG_ID: i32 = 11;

/// PDG particle code of the muon.
pub const MUON_PDG_ID: i32 = 13;

/// Reconstructed lepton kind.
///
/// Exactly two kinds exist in this analysis; making the enum exhaustive
/// removes the "unrecognized lepton type" failure mode from every
/// downstream composition function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeptonKind {
    /// Electron (|PDG id| == 11)
    Electron,
    /// Muon (|PDG id| == 13)
    Muon,
}

impl LeptonKind {
    /// Map a signed PDG id onto a lepton kind.
    ///
    /// Returns `None` for ids that are not charged leptons of this analysis
    /// (taus decay before reconstruction and enter as hadronic taus).
    pub fn from_pdg_id(pdg_id: i32) -> Option<Self> {
        match pdg_id.abs() {
            ELECTRON_PDG_ID => Some(Self::Electron),
            MUON_PDG_ID => Some(Self::Muon),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pdg_id() {
        assert_eq!(LeptonKind::from_pdg_id(11), Some(LeptonKind::Electron));
        assert_eq!(LeptonKind::from_pdg_id(-11), Some(LeptonKind::Electron));
        assert_eq!(LeptonKind::from_pdg_id(13), Some(LeptonKind::Muon));
        assert_eq!(LeptonKind::from_pdg_id(-13), Some(LeptonKind::Muon));
        assert_eq!(LeptonKind::from_pdg_id(15), None);
        assert_eq!(LeptonKind::from_pdg_id(211), None);
    }
}
