//! Jet selection: kinematic acceptance and b-tag working points.

use ttm_event::RecoJet;

use crate::Selector;

/// CSV discriminant value of the loose b-tag working point.
pub const BTAG_CSV_WP_LOOSE: f64 = 0.605;
/// CSV discriminant value of the medium b-tag working point.
pub const BTAG_CSV_WP_MEDIUM: f64 = 0.89;

/// Kinematic jet selection.
#[derive(Debug, Clone)]
pub struct JetSelector {
    /// Lower cut on pT, GeV.
    pub min_pt: f64,
    /// Upper cut on |eta|.
    pub max_abs_eta: f64,
}

impl Default for JetSelector {
    fn default() -> Self {
        Self { min_pt: 25.0, max_abs_eta: 2.4 }
    }
}

impl Selector<RecoJet> for JetSelector {
    fn passes(&self, jet: &RecoJet) -> bool {
        jet.p4.pt >= self.min_pt && jet.p4.abs_eta() <= self.max_abs_eta
    }
}

/// Kinematic jet selection plus the loose CSV b-tag working point.
#[derive(Debug, Clone)]
pub struct JetSelectorBtagLoose {
    /// Kinematic acceptance.
    pub kinematics: JetSelector,
    /// Lower cut on the CSV discriminant.
    pub min_btag_csv: f64,
}

impl Default for JetSelectorBtagLoose {
    fn default() -> Self {
        Self { kinematics: JetSelector::default(), min_btag_csv: BTAG_CSV_WP_LOOSE }
    }
}

impl Selector<RecoJet> for JetSelectorBtagLoose {
    fn passes(&self, jet: &RecoJet) -> bool {
        self.kinematics.passes(jet) && jet.btag_csv >= self.min_btag_csv
    }
}

/// Kinematic jet selection plus the medium CSV b-tag working point.
#[derive(Debug, Clone)]
pub struct JetSelectorBtagMedium {
    /// Kinematic acceptance.
    pub kinematics: JetSelector,
    /// Lower cut on the CSV discriminant.
    pub min_btag_csv: f64,
}

impl Default for JetSelectorBtagMedium {
    fn default() -> Self {
        Self { kinematics: JetSelector::default(), min_btag_csv: BTAG_CSV_WP_MEDIUM }
    }
}

impl Selector<RecoJet> for JetSelectorBtagMedium {
    fn passes(&self, jet: &RecoJet) -> bool {
        self.kinematics.passes(jet) && jet.btag_csv >= self.min_btag_csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttm_event::Particle;

    fn jet(pt: f64, eta: f64, btag_csv: f64) -> RecoJet {
        RecoJet::new(Particle::new(pt, eta, 0.0, 8.0), 1.0, 1.02, 0.98, btag_csv, 1.0, 0)
    }

    #[test]
    fn test_kinematic_boundaries() {
        let sel = JetSelector::default();
        assert!(sel.passes(&jet(25.0, 2.4, 0.0)));
        assert!(sel.passes(&jet(25.0, -2.4, 0.0)));
        assert!(!sel.passes(&jet(24.999, 0.0, 0.0)));
        assert!(!sel.passes(&jet(25.0, 2.401, 0.0)));
    }

    #[test]
    fn test_btag_working_points() {
        let loose = JetSelectorBtagLoose::default();
        let medium = JetSelectorBtagMedium::default();
        // between the working points: loose only
        let j = jet(40.0, 1.0, 0.7);
        assert!(loose.passes(&j));
        assert!(!medium.passes(&j));
        // exactly at each working point
        assert!(loose.passes(&jet(40.0, 1.0, 0.605)));
        assert!(medium.passes(&jet(40.0, 1.0, 0.89)));
        assert!(!loose.passes(&jet(40.0, 1.0, 0.604)));
    }

    #[test]
    fn test_btag_still_requires_kinematics() {
        let medium = JetSelectorBtagMedium::default();
        assert!(!medium.passes(&jet(10.0, 1.0, 0.99)));
    }
}
