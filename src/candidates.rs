use crate::item::Item;
use crate::itemset::ItemSet;
use itertools::Itertools;
use std::collections::BTreeSet;

// All `k` item combinations of `domain`. Callers must not depend on the
// order the candidates come back in.
pub fn generate_candidates(domain: &BTreeSet<Item>, k: usize) -> Vec<ItemSet> {
    if k == 0 || k > domain.len() {
        return vec![];
    }
    domain
        .iter()
        .cloned()
        .combinations(k)
        .map(ItemSet::new)
        .collect()
}
