use crate::itemset::ItemSet;
use rayon::prelude::*;
use std::collections::BTreeMap;

// Itemsets mapped to the number of transactions containing them.
pub type SupportCounts = BTreeMap<ItemSet, u32>;

// Number of transactions which contain every item of `itemset`.
pub fn count_support(itemset: &ItemSet, transactions: &[ItemSet]) -> u32 {
    transactions
        .iter()
        .filter(|transaction| itemset.is_subset_of(transaction))
        .count() as u32
}

// Counts each itemset independently, spread over the rayon pool. The
// transactions are only read, and every worker produces its own entries.
pub fn count_support_batch(itemsets: &[ItemSet], transactions: &[ItemSet]) -> SupportCounts {
    itemsets
        .par_iter()
        .map(|itemset| (itemset.clone(), count_support(itemset, transactions)))
        .collect()
}
