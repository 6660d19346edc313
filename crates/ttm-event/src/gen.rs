//! Generator-level (truth) particles.
//!
//! Read-only records matched against reconstructed objects; jets keep
//! index-based references into these collections (see [`crate::jet`]).

use crate::particle::Particle;

/// Generic generator-level particle: kinematics plus the PDG type code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenParticle {
    /// Four-momentum.
    pub p4: Particle,
    /// Signed PDG particle code.
    pub pdg_id: i32,
}

/// Generator-level charged lepton.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenLepton {
    /// Four-momentum.
    pub p4: Particle,
    /// Signed PDG particle code.
    pub pdg_id: i32,
    /// Electric charge, +1 or -1.
    pub charge: i32,
}

impl GenLepton {
    /// Build a generator lepton; the charge is fixed by the PDG convention
    /// (negatively charged leptons carry positive ids).
    pub fn new(p4: Particle, pdg_id: i32) -> Self {
        Self { p4, pdg_id, charge: -pdg_id.signum() }
    }
}

/// Generator-level hadronically decaying tau (visible decay products).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenHadTau {
    /// Four-momentum of the visible decay products.
    pub p4: Particle,
}

/// Generator-level jet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenJet {
    /// Four-momentum.
    pub p4: Particle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen_lepton_charge_from_pdg_id() {
        let p4 = Particle::new(20.0, 0.5, 1.0, 0.0);
        assert_eq!(GenLepton::new(p4, 11).charge, -1);
        assert_eq!(GenLepton::new(p4, -11).charge, 1);
        assert_eq!(GenLepton::new(p4, 13).charge, -1);
        assert_eq!(GenLepton::new(p4, -13).charge, 1);
    }
}
