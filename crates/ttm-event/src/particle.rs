//! Kinematic record shared by all physics objects.

/// Lorentz vector in the (pT, eta, phi, mass) parameterization.
///
/// Immutable after construction; selectors only ever read it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Transverse momentum, GeV.
    pub pt: f64,
    /// Pseudorapidity.
    pub eta: f64,
    /// Azimuthal angle, radians.
    pub phi: f64,
    /// Mass, GeV.
    pub mass: f64,
}

impl Particle {
    /// Create a new kinematic record.
    pub fn new(pt: f64, eta: f64, phi: f64, mass: f64) -> Self {
        Self { pt, eta, phi, mass }
    }

    /// Absolute pseudorapidity, the variable most cut thresholds bind on.
    pub fn abs_eta(&self) -> f64 {
        self.eta.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs_eta() {
        assert_eq!(Particle::new(10.0, -2.1, 0.0, 0.0).abs_eta(), 2.1);
        assert_eq!(Particle::new(10.0, 2.1, 0.0, 0.0).abs_eta(), 2.1);
    }
}
