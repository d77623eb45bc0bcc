use crate::itemset::ItemSet;
use crate::support::SupportCounts;
use std::collections::BTreeSet;
use tracing::info;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Closures {
    // Frequent itemsets with no frequent proper superset.
    pub maximal: BTreeSet<ItemSet>,
    // Frequent itemsets with no proper superset of the same support.
    pub closed: BTreeSet<ItemSet>,
}

/// Derives the maximal and closed itemsets in one pass from the largest
/// itemsets down. Any superset of an itemset of size s has already been
/// visited by the time s is reached, so comparing against the sets accepted
/// so far is enough. Quadratic in the number of frequent itemsets.
pub fn find_closures(frequent: &SupportCounts) -> Closures {
    let max_size = match frequent.keys().map(|itemset| itemset.len()).max() {
        Some(size) => size,
        None => return Closures::default(),
    };

    let mut maximal: Vec<&ItemSet> = vec![];
    let mut closed: Vec<(&ItemSet, u32)> = vec![];
    for size in (1..max_size + 1).rev() {
        for (itemset, &count) in frequent.iter().filter(|&(i, _)| i.len() == size) {
            if !maximal.iter().any(|m| itemset.is_subset_of(m)) {
                maximal.push(itemset);
            }
            let absorbed = closed
                .iter()
                .any(|&(c, c_count)| c_count == count && itemset.is_subset_of(c));
            if !absorbed {
                closed.push((itemset, count));
            }
        }
    }

    info!(
        maximal = maximal.len(),
        closed = closed.len(),
        "derived maximal and closed itemsets"
    );
    Closures {
        maximal: maximal.into_iter().cloned().collect(),
        closed: closed.into_iter().map(|(c, _)| c.clone()).collect(),
    }
}
