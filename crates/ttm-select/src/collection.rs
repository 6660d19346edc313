//! Generic collection selection.

use crate::Selector;

/// Applies one selector across an object collection, producing the ordered
/// passing subset. Operates on non-owning references: no copies, no
/// deduplication, no reordering.
#[derive(Debug, Default, Clone)]
pub struct CollectionSelector<S> {
    selector: S,
}

impl<S> CollectionSelector<S> {
    /// Wrap a selector.
    pub fn new(selector: S) -> Self {
        Self { selector }
    }

    /// The wrapped selector.
    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// Select the subsequence of `particles` passing the selector,
    /// preserving relative order.
    pub fn select<'a, T>(&self, particles: &[&'a T]) -> Vec<&'a T>
    where
        S: Selector<T>,
    {
        particles.iter().copied().filter(|p| self.selector.passes(p)).collect()
    }
}

/// Loose muon collection selector.
pub type MuonCollectionSelectorLoose = CollectionSelector<crate::MuonSelectorLoose>;
/// Fakeable muon collection selector.
pub type MuonCollectionSelectorFakeable = CollectionSelector<crate::MuonSelectorFakeable>;
/// Tight muon collection selector.
pub type MuonCollectionSelectorTight = CollectionSelector<crate::MuonSelectorTight>;
/// Cut-based muon collection selector.
pub type MuonCollectionSelectorCutBased = CollectionSelector<crate::MuonSelectorCutBased>;
/// MVA-based muon collection selector.
pub type MuonCollectionSelectorMvaBased = CollectionSelector<crate::MuonSelectorMvaBased>;

/// Loose electron collection selector.
pub type ElectronCollectionSelectorLoose = CollectionSelector<crate::ElectronSelectorLoose>;
/// Fakeable electron collection selector.
pub type ElectronCollectionSelectorFakeable = CollectionSelector<crate::ElectronSelectorFakeable>;
/// Tight electron collection selector.
pub type ElectronCollectionSelectorTight = CollectionSelector<crate::ElectronSelectorTight>;
/// Cut-based electron collection selector.
pub type ElectronCollectionSelectorCutBased = CollectionSelector<crate::ElectronSelectorCutBased>;
/// MVA-based electron collection selector.
pub type ElectronCollectionSelectorMvaBased = CollectionSelector<crate::ElectronSelectorMvaBased>;

/// Loose hadronic-tau collection selector.
pub type HadTauCollectionSelectorLoose = CollectionSelector<crate::HadTauSelectorLoose>;
/// Fakeable hadronic-tau collection selector.
pub type HadTauCollectionSelectorFakeable = CollectionSelector<crate::HadTauSelectorFakeable>;
/// Tight hadronic-tau collection selector.
pub type HadTauCollectionSelectorTight = CollectionSelector<crate::HadTauSelectorTight>;

/// Kinematic jet collection selector.
pub type JetCollectionSelector = CollectionSelector<crate::JetSelector>;
/// Loose b-tag jet collection selector.
pub type JetCollectionSelectorBtagLoose = CollectionSelector<crate::JetSelectorBtagLoose>;
/// Medium b-tag jet collection selector.
pub type JetCollectionSelectorBtagMedium = CollectionSelector<crate::JetSelectorBtagMedium>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_preserving_subsequence() {
        let values = [3_i32, 1, 4, 1, 5, 9, 2, 6];
        let refs: Vec<&i32> = values.iter().collect();
        let even = CollectionSelector::new(|v: &i32| v % 2 == 0);
        assert_eq!(even.select(&refs), vec![&4, &2, &6]);
    }

    #[test]
    fn test_always_true_is_identity() {
        let values = [1_i32, 1, 2];
        let refs: Vec<&i32> = values.iter().collect();
        let all = CollectionSelector::new(|_: &i32| true);
        // duplicates preserved, nothing dropped
        assert_eq!(all.select(&refs), refs);
    }

    #[test]
    fn test_always_false_is_empty() {
        let values = [1_i32, 2, 3];
        let refs: Vec<&i32> = values.iter().collect();
        let none = CollectionSelector::new(|_: &i32| false);
        assert!(none.select(&refs).is_empty());
    }
}
