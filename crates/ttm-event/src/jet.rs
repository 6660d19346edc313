//! Reconstructed jets and their truth matching.

use crate::particle::Particle;

/// Index-based reference to the generator-level object a jet was matched to.
///
/// The matching categories are mutually exclusive, so a jet carries at most
/// one of them; indices point into the per-event generator collections,
/// which outlive the jets within an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenMatch {
    /// Matched to a generator lepton.
    Lepton(usize),
    /// Matched to a generator hadronic tau.
    HadTau(usize),
    /// Matched to a generator jet.
    Jet(usize),
}

/// A reconstructed jet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecoJet {
    /// Four-momentum (after nominal energy correction).
    pub p4: Particle,
    /// Nominal jet-energy-correction factor.
    pub corr: f64,
    /// +1 sigma shifted jet-energy-correction factor.
    pub corr_jec_up: f64,
    /// -1 sigma shifted jet-energy-correction factor.
    pub corr_jec_down: f64,
    /// CSV b-tagging discriminant value.
    pub btag_csv: f64,
    /// Data/MC correction weight for b-tagging efficiency and mistag rate.
    pub btag_weight: f64,
    /// Index of the jet in the ntuple.
    pub idx: i32,
    /// Truth match, if any.
    pub gen_match: Option<GenMatch>,
}

impl RecoJet {
    /// Create an unmatched jet; call [`RecoJet::with_gen_match`] once the
    /// truth matching has been resolved.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        p4: Particle,
        corr: f64,
        corr_jec_up: f64,
        corr_jec_down: f64,
        btag_csv: f64,
        btag_weight: f64,
        idx: i32,
    ) -> Self {
        Self { p4, corr, corr_jec_up, corr_jec_down, btag_csv, btag_weight, idx, gen_match: None }
    }

    /// Attach the truth-match reference.
    pub fn with_gen_match(mut self, gen_match: GenMatch) -> Self {
        self.gen_match = Some(gen_match);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_most_one_gen_match() {
        let jet = RecoJet::new(Particle::new(40.0, 0.3, 2.0, 8.0), 1.0, 1.02, 0.98, 0.7, 1.0, 0);
        assert_eq!(jet.gen_match, None);

        let matched = jet.with_gen_match(GenMatch::HadTau(2));
        assert_eq!(matched.gen_match, Some(GenMatch::HadTau(2)));
        // replacing the match keeps exactly one category set
        let rematched = matched.with_gen_match(GenMatch::Jet(0));
        assert_eq!(rematched.gen_match, Some(GenMatch::Jet(0)));
    }
}
