//! Binned lookup tables for scale factors.
//!
//! Bin edges are strictly ascending and bins are half-open `[lo, hi)`.
//! Lookups outside the tabulated domain return the neutral factor 1.0
//! silently; malformed tables are rejected at construction instead.

use ttm_core::{Error, Result};

/// Neutral correction factor.
pub const NEUTRAL_SF: f64 = 1.0;

fn check_edges(what: &str, edges: &[f64]) -> Result<()> {
    if edges.len() < 2 {
        return Err(Error::Validation(format!(
            "{what}: need at least two bin edges, got {}",
            edges.len()
        )));
    }
    if edges.iter().any(|e| !e.is_finite()) {
        return Err(Error::Validation(format!("{what}: bin edges must be finite, got {edges:?}")));
    }
    if edges.windows(2).any(|w| w[0] >= w[1]) {
        return Err(Error::Validation(format!(
            "{what}: bin edges must be strictly ascending, got {edges:?}"
        )));
    }
    Ok(())
}

/// Bin index of `x` in half-open bins over `edges`, or `None` outside.
fn find_bin(edges: &[f64], x: f64) -> Option<usize> {
    if x < edges[0] || x >= edges[edges.len() - 1] {
        return None;
    }
    Some(edges.partition_point(|&e| e <= x) - 1)
}

/// One-dimensional lookup table.
#[derive(Debug, Clone, PartialEq)]
pub struct Lut1 {
    edges: Vec<f64>,
    values: Vec<f64>,
}

impl Lut1 {
    /// Build a 1D table; `values` holds one factor per bin, so its length
    /// must be `edges.len() - 1`.
    pub fn new(edges: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        check_edges("Lut1", &edges)?;
        if values.len() + 1 != edges.len() {
            return Err(Error::Validation(format!(
                "Lut1: {} edges require {} values, got {}",
                edges.len(),
                edges.len() - 1,
                values.len()
            )));
        }
        Ok(Self { edges, values })
    }

    /// Factor for `x`; 1.0 outside the tabulated domain.
    pub fn eval(&self, x: f64) -> f64 {
        match find_bin(&self.edges, x) {
            Some(i) => self.values[i],
            None => NEUTRAL_SF,
        }
    }
}

/// Two-dimensional lookup table over (pT, |eta|), row-major in pT.
#[derive(Debug, Clone, PartialEq)]
pub struct Lut2 {
    pt_edges: Vec<f64>,
    abs_eta_edges: Vec<f64>,
    values: Vec<f64>,
}

impl Lut2 {
    /// Build a 2D table; `values` holds one factor per (pT bin, |eta| bin)
    /// pair, pT-major.
    pub fn new(pt_edges: Vec<f64>, abs_eta_edges: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        check_edges("Lut2 pt", &pt_edges)?;
        check_edges("Lut2 abs_eta", &abs_eta_edges)?;
        let n_bins = (pt_edges.len() - 1) * (abs_eta_edges.len() - 1);
        if values.len() != n_bins {
            return Err(Error::Validation(format!(
                "Lut2: {} x {} bins require {n_bins} values, got {}",
                pt_edges.len() - 1,
                abs_eta_edges.len() - 1,
                values.len()
            )));
        }
        Ok(Self { pt_edges, abs_eta_edges, values })
    }

    /// Factor for (pT, |eta|); 1.0 outside the tabulated domain in either
    /// coordinate.
    pub fn eval(&self, pt: f64, abs_eta: f64) -> f64 {
        let (Some(i), Some(j)) = (find_bin(&self.pt_edges, pt), find_bin(&self.abs_eta_edges, abs_eta))
        else {
            return NEUTRAL_SF;
        };
        self.values[i * (self.abs_eta_edges.len() - 1) + j]
    }
}

/// A pair of 1D pT tables split at an |eta| boundary, the layout the
/// detector-geometry-dependent factors come in.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionLut {
    split_abs_eta: f64,
    barrel: Lut1,
    endcap: Lut1,
}

impl RegionLut {
    /// Combine barrel and endcap tables split at `split_abs_eta`.
    pub fn new(split_abs_eta: f64, barrel: Lut1, endcap: Lut1) -> Self {
        Self { split_abs_eta, barrel, endcap }
    }

    /// Factor for (pT, |eta|): the barrel table below the split, the endcap
    /// table at and above it.
    pub fn eval(&self, pt: f64, abs_eta: f64) -> f64 {
        if abs_eta < self.split_abs_eta {
            self.barrel.eval(pt)
        } else {
            self.endcap.eval(pt)
        }
    }
}
