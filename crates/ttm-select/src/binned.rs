//! Score-binned secondary cuts.
//!
//! The fakeable selection tiers share one pattern: a continuous per-object
//! score selects a discrete bin, and each bin carries its own secondary
//! thresholds. The bin tables are validated at construction; a bin index
//! outside the table at evaluation time is a logic error and asserts
//! (it must never default silently).

use ttm_core::{Error, Result};

/// Per-bin (nearby-jet pT-ratio, b-tag) cuts selected by the lepton-MVA
/// score: bin 0 for scores at or above the edge, bin 1 below (and so on for
/// additional edges, in descending order).
#[derive(Debug, Clone)]
pub struct ScoreBinnedCuts {
    /// Bin edges, strictly descending; `edges.len() + 1` bins.
    edges: Vec<f64>,
    /// Lower cut on the lepton-to-jet pT ratio, per bin.
    min_jet_pt_ratio: Vec<f64>,
    /// Upper cut on the nearby-jet b-tag discriminant, per bin.
    max_jet_btag_csv: Vec<f64>,
}

impl ScoreBinnedCuts {
    /// Build a binned-cut table; fails if the edges are not strictly
    /// descending or the per-bin tables do not cover `edges.len() + 1` bins.
    pub fn new(
        edges: Vec<f64>,
        min_jet_pt_ratio: Vec<f64>,
        max_jet_btag_csv: Vec<f64>,
    ) -> Result<Self> {
        if edges.windows(2).any(|w| w[0] <= w[1]) {
            return Err(Error::Config(format!(
                "score bin edges must be strictly descending, got {edges:?}"
            )));
        }
        let n_bins = edges.len() + 1;
        if min_jet_pt_ratio.len() != n_bins || max_jet_btag_csv.len() != n_bins {
            return Err(Error::Config(format!(
                "score-binned cut tables must cover {n_bins} bins, got {} and {}",
                min_jet_pt_ratio.len(),
                max_jet_btag_csv.len()
            )));
        }
        Ok(Self { edges, min_jet_pt_ratio, max_jet_btag_csv })
    }

    /// The common two-bin form: one edge, one cut pair per side. Infallible,
    /// used by the selector defaults.
    pub fn two_bin(edge: f64, pass_bin: (f64, f64), fail_bin: (f64, f64)) -> Self {
        Self {
            edges: vec![edge],
            min_jet_pt_ratio: vec![pass_bin.0, fail_bin.0],
            max_jet_btag_csv: vec![pass_bin.1, fail_bin.1],
        }
    }

    /// Bin index for a score: the number of edges the score falls below.
    pub fn bin(&self, score: f64) -> usize {
        self.edges.iter().take_while(|&&edge| score < edge).count()
    }

    /// Evaluate the bin-dependent cuts for an object with the given score.
    pub fn passes(&self, score: f64, jet_pt_ratio: f64, jet_btag_csv: f64) -> bool {
        let idx = self.bin(score);
        assert!(idx < self.min_jet_pt_ratio.len(), "score bin index {idx} out of range");
        jet_pt_ratio >= self.min_jet_pt_ratio[idx] && jet_btag_csv <= self.max_jet_btag_csv[idx]
    }
}

/// |eta| regions (central / transition / forward) with ascending edges,
/// used by the electron selectors for the detector-geometry-dependent cuts.
#[derive(Debug, Clone)]
pub struct EtaRegions {
    /// Region edges in |eta|, strictly ascending; `edges.len() + 1` regions.
    edges: Vec<f64>,
}

impl Default for EtaRegions {
    /// The analysis' standard electron split: central / transition /
    /// forward at 0.8 and 1.479.
    fn default() -> Self {
        Self { edges: vec![0.8, 1.479] }
    }
}

impl EtaRegions {
    /// Build an |eta| partition; fails if the edges are not strictly
    /// ascending or any edge is negative.
    pub fn new(edges: Vec<f64>) -> Result<Self> {
        if edges.iter().any(|&e| e < 0.0) || edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::Config(format!(
                "|eta| region edges must be non-negative and strictly ascending, got {edges:?}"
            )));
        }
        Ok(Self { edges })
    }

    /// Number of regions.
    pub fn n_regions(&self) -> usize {
        self.edges.len() + 1
    }

    /// Region index for an object at |eta|.
    pub fn region(&self, abs_eta: f64) -> usize {
        self.edges.iter().take_while(|&&edge| abs_eta >= edge).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_at_edge_is_upper_bin() {
        let cuts =
            ScoreBinnedCuts::new(vec![0.75], vec![0.30, -1.0e+3], vec![0.605, 0.89]).unwrap();
        assert_eq!(cuts.bin(0.75), 0);
        assert_eq!(cuts.bin(0.749), 1);
        assert_eq!(cuts.bin(0.9), 0);
        assert_eq!(cuts.bin(-5.0), 1);
    }

    #[test]
    fn test_bin_dependent_cuts() {
        let cuts =
            ScoreBinnedCuts::new(vec![0.75], vec![0.30, -1.0e+3], vec![0.605, 0.89]).unwrap();
        // bin 0: tight ratio cut, tight btag cut
        assert!(cuts.passes(0.75, 0.30, 0.605));
        assert!(!cuts.passes(0.75, 0.29, 0.605));
        assert!(!cuts.passes(0.75, 0.30, 0.606));
        // bin 1: no ratio cut, looser btag cut
        assert!(cuts.passes(0.749, -10.0, 0.89));
        assert!(!cuts.passes(0.749, -10.0, 0.90));
    }

    #[test]
    fn test_table_length_mismatch_rejected() {
        assert!(ScoreBinnedCuts::new(vec![0.75], vec![0.30], vec![0.605, 0.89]).is_err());
        assert!(ScoreBinnedCuts::new(vec![0.5, 0.75], vec![0.0; 3], vec![0.0; 3]).is_err());
    }

    #[test]
    fn test_eta_regions() {
        let regions = EtaRegions::new(vec![0.8, 1.479]).unwrap();
        assert_eq!(regions.n_regions(), 3);
        assert_eq!(regions.region(0.0), 0);
        assert_eq!(regions.region(0.8), 1);
        assert_eq!(regions.region(1.479), 2);
        assert_eq!(regions.region(2.5), 2);
    }
}
