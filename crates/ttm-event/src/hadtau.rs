//! Reconstructed hadronically decaying taus.

use crate::particle::Particle;

/// A reconstructed hadronic tau.
///
/// Each identification family is carried as a binary working-point flag
/// (integer-valued, larger = tighter) plus, where the ntuple stores one,
/// the raw discriminant score the working point was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecoHadTau {
    /// Four-momentum of the visible decay products.
    pub p4: Particle,
    /// Reconstructed electric charge.
    pub charge: i32,
    /// Transverse impact parameter of the leading track, cm.
    pub dxy: f64,
    /// Longitudinal impact parameter of the leading track, cm.
    pub dz: f64,
    /// Decay-mode-finding flag (classic decay modes).
    pub decay_mode_finding: i32,
    /// Decay-mode-finding flag including the new decay modes.
    pub decay_mode_finding_new_dms: i32,
    /// MVA-isolation working point, ΔR = 0.3 cone.
    pub id_mva_dr03: i32,
    /// Raw MVA-isolation score, ΔR = 0.3 cone.
    pub raw_mva_dr03: f64,
    /// MVA-isolation working point, ΔR = 0.5 cone.
    pub id_mva_dr05: i32,
    /// Raw MVA-isolation score, ΔR = 0.5 cone.
    pub raw_mva_dr05: f64,
    /// Cut-based combined-isolation working point, ΔR = 0.3 cone.
    pub id_cut_dr03: i32,
    /// Raw combined-isolation sum, ΔR = 0.3 cone, GeV.
    pub raw_cut_dr03: f64,
    /// Cut-based combined-isolation working point, ΔR = 0.5 cone.
    pub id_cut_dr05: i32,
    /// Raw combined-isolation sum, ΔR = 0.5 cone, GeV.
    pub raw_cut_dr05: f64,
    /// Anti-electron discriminator working point.
    pub anti_electron: i32,
    /// Anti-muon discriminator working point.
    pub anti_muon: i32,
}
