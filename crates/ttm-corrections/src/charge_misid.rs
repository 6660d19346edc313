//! Charge-misassignment probability for leptons passing the tight-charge
//! requirement, applied as an event weight to opposite-sign control-region
//! events to estimate the charge-flip background in the same-sign signal
//! region.

use ttm_core::LeptonKind;

/// pT bin edges of the measured electron grid, GeV.
const PT_EDGES: [f64; 3] = [10.0, 25.0, 50.0];
/// |eta| boundary between the barrel and endcap rows.
const BARREL_ENDCAP_SPLIT: f64 = 1.479;
/// Outer edge of the endcap row.
const MAX_ABS_ETA: f64 = 2.5;

/// Measured probabilities, barrel row then endcap row; the last pT bin is
/// open-ended.
const PROB_BARREL: [f64; 3] = [0.0301, 0.0287, 0.0293];
const PROB_ENDCAP: [f64; 3] = [0.1728, 0.1974, 0.3457];

/// Charge-misassignment probability for a lepton of the given kind, pT and
/// eta. Muons and electrons outside the measured grid return 1.0.
pub fn prob_charge_misid(kind: LeptonKind, pt: f64, eta: f64) -> f64 {
    let LeptonKind::Electron = kind else { return 1.0 };

    let abs_eta = eta.abs();
    let row = if abs_eta < BARREL_ENDCAP_SPLIT {
        &PROB_BARREL
    } else if abs_eta < MAX_ABS_ETA {
        &PROB_ENDCAP
    } else {
        return 1.0;
    };

    if pt < PT_EDGES[0] {
        1.0
    } else if pt < PT_EDGES[1] {
        row[0]
    } else if pt < PT_EDGES[2] {
        row[1]
    } else {
        row[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_barrel_grid() {
        let e = LeptonKind::Electron;
        assert_relative_eq!(prob_charge_misid(e, 15.0, 0.5), 0.0301);
        assert_relative_eq!(prob_charge_misid(e, 30.0, 1.0), 0.0287);
        assert_relative_eq!(prob_charge_misid(e, 60.0, -1.0), 0.0293);
    }

    #[test]
    fn test_endcap_grid() {
        let e = LeptonKind::Electron;
        assert_relative_eq!(prob_charge_misid(e, 15.0, 1.479), 0.1728);
        assert_relative_eq!(prob_charge_misid(e, 30.0, -2.0), 0.1974);
        assert_relative_eq!(prob_charge_misid(e, 60.0, 2.0), 0.3457);
    }

    #[test]
    fn test_outside_grid_is_neutral() {
        let e = LeptonKind::Electron;
        assert_relative_eq!(prob_charge_misid(e, 30.0, 3.0), 1.0);
        assert_relative_eq!(prob_charge_misid(e, 30.0, 2.5), 1.0);
        assert_relative_eq!(prob_charge_misid(e, 9.9, 1.0), 1.0);
    }

    #[test]
    fn test_muon_is_neutral() {
        assert_relative_eq!(prob_charge_misid(LeptonKind::Muon, 30.0, 1.0), 1.0);
    }
}
