//! Lepton identification and isolation scale factors.
//!
//! Factors compose multiplicatively per tier: tight = loose ×
//! tight-to-loose, fakeable = loose × fakeable-to-loose. Every entry point
//! has a one-lepton and a two-lepton form; the two-lepton form is the
//! product over the pair.

use ttm_core::LeptonKind;

use crate::lut::NEUTRAL_SF;
use crate::store::CorrectionStore;

fn eval_or_neutral<T>(table: &Option<T>, eval: impl FnOnce(&T) -> f64) -> f64 {
    table.as_ref().map_or(NEUTRAL_SF, eval)
}

/// Loose identification and isolation scale factor: id × iso for
/// electrons, id × iso × impact-parameter for muons.
pub fn sf_lepton_id_iso_loose(
    store: &CorrectionStore,
    kind: LeptonKind,
    pt: f64,
    abs_eta: f64,
) -> f64 {
    match kind {
        LeptonKind::Electron => {
            let e = &store.electron;
            eval_or_neutral(&e.id_loose, |t| t.eval(pt, abs_eta))
                * eval_or_neutral(&e.iso, |t| t.eval(pt, abs_eta))
        }
        LeptonKind::Muon => {
            let m = &store.muon;
            eval_or_neutral(&m.id_loose, |t| t.eval(pt, abs_eta))
                * eval_or_neutral(&m.iso, |t| t.eval(pt, abs_eta))
                * eval_or_neutral(&m.ip, |t| t.eval(abs_eta))
        }
    }
}

/// Tight-to-loose scale factor: conversion-veto × tight-id for electrons,
/// tight-id for muons.
pub fn sf_lepton_id_iso_tight_to_loose(
    store: &CorrectionStore,
    kind: LeptonKind,
    pt: f64,
    abs_eta: f64,
) -> f64 {
    match kind {
        LeptonKind::Electron => {
            let e = &store.electron;
            eval_or_neutral(&e.conv_veto, |t| t.eval(pt, abs_eta))
                * eval_or_neutral(&e.id_tight, |t| t.eval(pt, abs_eta))
        }
        LeptonKind::Muon => eval_or_neutral(&store.muon.id_tight, |t| t.eval(pt, abs_eta)),
    }
}

/// Fakeable-to-loose scale factor.
///
/// Placeholder pending a dedicated measurement of the fakeable tier; until
/// then the fakeable factor equals the loose one.
pub fn sf_lepton_id_iso_fakeable_to_loose(
    _store: &CorrectionStore,
    _kind: LeptonKind,
    _pt: f64,
    _abs_eta: f64,
) -> f64 {
    NEUTRAL_SF
}

/// Tight identification and isolation scale factor: loose ×
/// tight-to-loose.
pub fn sf_lepton_id_iso_tight(
    store: &CorrectionStore,
    kind: LeptonKind,
    pt: f64,
    abs_eta: f64,
) -> f64 {
    sf_lepton_id_iso_loose(store, kind, pt, abs_eta)
        * sf_lepton_id_iso_tight_to_loose(store, kind, pt, abs_eta)
}

/// Fakeable identification and isolation scale factor: loose ×
/// fakeable-to-loose.
pub fn sf_lepton_id_iso_fakeable(
    store: &CorrectionStore,
    kind: LeptonKind,
    pt: f64,
    abs_eta: f64,
) -> f64 {
    sf_lepton_id_iso_loose(store, kind, pt, abs_eta)
        * sf_lepton_id_iso_fakeable_to_loose(store, kind, pt, abs_eta)
}

/// Two-lepton loose scale factor.
pub fn sf_dilepton_id_iso_loose(
    store: &CorrectionStore,
    lepton1: (LeptonKind, f64, f64),
    lepton2: (LeptonKind, f64, f64),
) -> f64 {
    sf_lepton_id_iso_loose(store, lepton1.0, lepton1.1, lepton1.2)
        * sf_lepton_id_iso_loose(store, lepton2.0, lepton2.1, lepton2.2)
}

/// Two-lepton tight-to-loose scale factor.
pub fn sf_dilepton_id_iso_tight_to_loose(
    store: &CorrectionStore,
    lepton1: (LeptonKind, f64, f64),
    lepton2: (LeptonKind, f64, f64),
) -> f64 {
    sf_lepton_id_iso_tight_to_loose(store, lepton1.0, lepton1.1, lepton1.2)
        * sf_lepton_id_iso_tight_to_loose(store, lepton2.0, lepton2.1, lepton2.2)
}

/// Two-lepton fakeable-to-loose scale factor.
pub fn sf_dilepton_id_iso_fakeable_to_loose(
    store: &CorrectionStore,
    lepton1: (LeptonKind, f64, f64),
    lepton2: (LeptonKind, f64, f64),
) -> f64 {
    sf_lepton_id_iso_fakeable_to_loose(store, lepton1.0, lepton1.1, lepton1.2)
        * sf_lepton_id_iso_fakeable_to_loose(store, lepton2.0, lepton2.1, lepton2.2)
}

/// Two-lepton tight scale factor: loose × tight-to-loose.
pub fn sf_dilepton_id_iso_tight(
    store: &CorrectionStore,
    lepton1: (LeptonKind, f64, f64),
    lepton2: (LeptonKind, f64, f64),
) -> f64 {
    sf_dilepton_id_iso_loose(store, lepton1, lepton2)
        * sf_dilepton_id_iso_tight_to_loose(store, lepton1, lepton2)
}

/// Two-lepton fakeable scale factor: loose × fakeable-to-loose.
pub fn sf_dilepton_id_iso_fakeable(
    store: &CorrectionStore,
    lepton1: (LeptonKind, f64, f64),
    lepton2: (LeptonKind, f64, f64),
) -> f64 {
    sf_dilepton_id_iso_loose(store, lepton1, lepton2)
        * sf_dilepton_id_iso_fakeable_to_loose(store, lepton1, lepton2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn populated_store() -> CorrectionStore {
        CorrectionStore::from_json_str(
            r#"{
            "electron": {
                "id_loose": {
                    "pt_edges": [10.0, 100.0],
                    "abs_eta_edges": [0.0, 2.5],
                    "values": [0.96]
                },
                "iso": {
                    "pt_edges": [10.0, 100.0],
                    "abs_eta_edges": [0.0, 2.5],
                    "values": [0.99]
                },
                "conv_veto": {
                    "pt_edges": [10.0, 100.0],
                    "abs_eta_edges": [0.0, 2.5],
                    "values": [0.98]
                },
                "id_tight": {
                    "barrel": { "edges": [10.0, 100.0], "values": [0.95] },
                    "endcap": { "edges": [10.0, 100.0], "values": [0.90] }
                }
            },
            "muon": {
                "id_loose": {
                    "pt_edges": [10.0, 100.0],
                    "abs_eta_edges": [0.0, 2.4],
                    "values": [0.99]
                },
                "iso": {
                    "barrel": { "edges": [10.0, 100.0], "values": [0.995] },
                    "endcap": { "edges": [10.0, 100.0], "values": [0.985] }
                },
                "ip": { "edges": [0.0, 2.4], "values": [0.998] },
                "id_tight": {
                    "barrel": { "edges": [10.0, 100.0], "values": [0.97] },
                    "endcap": { "edges": [10.0, 100.0], "values": [0.94] }
                }
            }
        }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_electron_loose_is_id_times_iso() {
        let store = populated_store();
        let sf = sf_lepton_id_iso_loose(&store, LeptonKind::Electron, 30.0, 1.0);
        assert_relative_eq!(sf, 0.96 * 0.99);
    }

    #[test]
    fn test_muon_loose_includes_ip() {
        let store = populated_store();
        let barrel = sf_lepton_id_iso_loose(&store, LeptonKind::Muon, 30.0, 1.0);
        assert_relative_eq!(barrel, 0.99 * 0.995 * 0.998);
        // past the 1.2 split the endcap iso table applies
        let endcap = sf_lepton_id_iso_loose(&store, LeptonKind::Muon, 30.0, 1.3);
        assert_relative_eq!(endcap, 0.99 * 0.985 * 0.998);
    }

    #[test]
    fn test_tight_is_loose_times_tight_to_loose() {
        let store = populated_store();
        for (kind, abs_eta) in [
            (LeptonKind::Electron, 0.5),
            (LeptonKind::Electron, 2.0),
            (LeptonKind::Muon, 0.5),
            (LeptonKind::Muon, 2.0),
        ] {
            let loose = sf_lepton_id_iso_loose(&store, kind, 30.0, abs_eta);
            let ratio = sf_lepton_id_iso_tight_to_loose(&store, kind, 30.0, abs_eta);
            let tight = sf_lepton_id_iso_tight(&store, kind, 30.0, abs_eta);
            assert_relative_eq!(tight, loose * ratio);
        }
    }

    #[test]
    fn test_fakeable_equals_loose() {
        let store = populated_store();
        let e = (LeptonKind::Electron, 30.0, 1.0);
        let m = (LeptonKind::Muon, 25.0, 1.5);
        assert_relative_eq!(sf_dilepton_id_iso_fakeable_to_loose(&store, e, m), 1.0);
        assert_relative_eq!(
            sf_dilepton_id_iso_fakeable(&store, e, m),
            sf_dilepton_id_iso_loose(&store, e, m)
        );
    }

    #[test]
    fn test_dilepton_tight_factorizes() {
        let store = populated_store();
        let e = (LeptonKind::Electron, 30.0, 1.0);
        let m = (LeptonKind::Muon, 25.0, 1.5);
        let expected = sf_lepton_id_iso_tight(&store, e.0, e.1, e.2)
            * sf_lepton_id_iso_tight(&store, m.0, m.1, m.2);
        assert_relative_eq!(sf_dilepton_id_iso_tight(&store, e, m), expected);
    }
}
