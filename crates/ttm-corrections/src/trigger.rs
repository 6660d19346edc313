//! Trigger-efficiency scale factors for the single- and double-lepton
//! trigger paths (flat per-channel values from the trigger-efficiency
//! measurement).

use ttm_core::LeptonKind;

/// Single-lepton trigger-efficiency scale factor.
pub fn sf_trigger_eff(kind: LeptonKind, pt: f64) -> f64 {
    match kind {
        LeptonKind::Electron => {
            if pt > 40.0 {
                0.99
            } else {
                0.95
            }
        }
        LeptonKind::Muon => 0.98,
    }
}

/// Two-lepton trigger-efficiency scale factor: the same-flavor channels
/// carry a measured value (the two-electron one keyed on the harder
/// lepton), the mixed channel is neutral.
pub fn sf_trigger_eff_2l(lepton1: (LeptonKind, f64), lepton2: (LeptonKind, f64)) -> f64 {
    match (lepton1.0, lepton2.0) {
        (LeptonKind::Electron, LeptonKind::Electron) => {
            if lepton1.1.max(lepton2.1) > 40.0 {
                0.99
            } else {
                0.95
            }
        }
        (LeptonKind::Muon, LeptonKind::Muon) => 0.98,
        _ => 1.00,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dielectron_keyed_on_harder_lepton() {
        let e = LeptonKind::Electron;
        assert_relative_eq!(sf_trigger_eff_2l((e, 45.0), (e, 30.0)), 0.99);
        assert_relative_eq!(sf_trigger_eff_2l((e, 30.0), (e, 45.0)), 0.99);
        assert_relative_eq!(sf_trigger_eff_2l((e, 30.0), (e, 20.0)), 0.95);
        // threshold is strict
        assert_relative_eq!(sf_trigger_eff_2l((e, 40.0), (e, 40.0)), 0.95);
    }

    #[test]
    fn test_dimuon_and_mixed() {
        let e = LeptonKind::Electron;
        let m = LeptonKind::Muon;
        assert_relative_eq!(sf_trigger_eff_2l((m, 50.0), (m, 10.0)), 0.98);
        assert_relative_eq!(sf_trigger_eff_2l((e, 50.0), (m, 10.0)), 1.00);
        assert_relative_eq!(sf_trigger_eff_2l((m, 50.0), (e, 10.0)), 1.00);
    }

    #[test]
    fn test_single_lepton() {
        assert_relative_eq!(sf_trigger_eff(LeptonKind::Electron, 41.0), 0.99);
        assert_relative_eq!(sf_trigger_eff(LeptonKind::Electron, 40.0), 0.95);
        assert_relative_eq!(sf_trigger_eff(LeptonKind::Muon, 15.0), 0.98);
    }
}
