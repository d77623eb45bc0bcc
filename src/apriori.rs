use crate::candidates::generate_candidates;
use crate::domain::{extract_domain, item_domain};
use crate::error::MiningError;
use crate::item::Item;
use crate::itemset::ItemSet;
use crate::support::{count_support_batch, SupportCounts};
use std::collections::BTreeSet;
use tracing::{debug, info};

// State carried from one level of the search to the next.
struct LevelState {
    // Size of the candidates generated at this level.
    k: usize,
    // Items of the itemsets accepted at the previous level.
    domain: BTreeSet<Item>,
    // Every itemset accepted so far, across all levels.
    frequent: Vec<ItemSet>,
}

impl LevelState {
    fn initial(domain: BTreeSet<Item>) -> LevelState {
        LevelState {
            k: 1,
            domain,
            frequent: vec![],
        }
    }

    fn is_done(&self, max_k: usize) -> bool {
        self.domain.is_empty() || self.k > max_k
    }
}

// Mines one level: counts every k-combination of the domain and keeps
// those with count >= min_count. The next domain is made of the items in
// the accepted itemsets, as only those can appear in a larger frequent
// itemset.
fn next_level(state: LevelState, transactions: &[ItemSet], min_count: u32) -> LevelState {
    let candidates = generate_candidates(&state.domain, state.k);
    let counts = count_support_batch(&candidates, transactions);
    let accepted: Vec<ItemSet> = counts
        .into_iter()
        .filter(|&(_, count)| count >= min_count)
        .map(|(itemset, _)| itemset)
        .collect();
    debug!(
        level = state.k,
        domain = state.domain.len(),
        candidates = candidates.len(),
        accepted = accepted.len(),
        "mined level"
    );

    let domain = item_domain(&accepted);
    let mut frequent = state.frequent;
    frequent.extend(accepted);
    LevelState {
        k: state.k + 1,
        domain,
        frequent,
    }
}

/// Level-wise search for every itemset contained in at least `min_count`
/// transactions. The returned counts come from one final pass over the
/// whole accumulated set. A `min_count` of 0 is treated as 1, so itemsets
/// which never occur are never reported.
pub fn mine_frequent_itemsets(
    transactions: &[ItemSet],
    min_count: u32,
) -> Result<SupportCounts, MiningError> {
    if transactions.is_empty() {
        return Err(MiningError::EmptyDataset);
    }
    let min_count = min_count.max(1);

    let domain = extract_domain(transactions);
    let max_k = domain.len();
    let mut state = LevelState::initial(domain);
    while !state.is_done(max_k) {
        state = next_level(state, transactions, min_count);
    }

    let frequent = count_support_batch(&state.frequent, transactions);
    info!(
        frequent = frequent.len(),
        levels = state.k - 1,
        min_count,
        "finished mining frequent itemsets"
    );
    Ok(frequent)
}

#[cfg(test)]
mod tests {
    use super::mine_frequent_itemsets;
    use crate::dataset::Dataset;
    use crate::error::MiningError;
    use crate::generate_rules::generate_rules;
    use crate::itemset::ItemSet;

    fn scenario() -> Dataset {
        Dataset::from_tokens(vec![
            vec!["A", "B"],
            vec!["A", "B", "C"],
            vec!["A"],
            vec!["B", "C"],
            vec!["A", "C"],
        ])
    }

    #[test]
    fn test_mine_frequent_itemsets() {
        let dataset = scenario();
        let frequent = mine_frequent_itemsets(dataset.transactions(), 2).unwrap();
        let expected = [
            (vec!["A"], 4),
            (vec!["B"], 3),
            (vec!["C"], 3),
            (vec!["A", "B"], 2),
            (vec!["A", "C"], 2),
            (vec!["B", "C"], 2),
        ];
        assert_eq!(frequent.len(), expected.len());
        for &(ref tokens, count) in expected.iter() {
            let itemset = dataset.itemset_of(tokens).unwrap();
            assert_eq!(frequent.get(&itemset), Some(&count));
        }
        let abc = dataset.itemset_of(&["A", "B", "C"]).unwrap();
        assert!(!frequent.contains_key(&abc));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let dataset = scenario();
        let frequent = mine_frequent_itemsets(dataset.transactions(), 1).unwrap();
        let abc = dataset.itemset_of(&["A", "B", "C"]).unwrap();
        assert_eq!(frequent.get(&abc), Some(&1));
        assert_eq!(frequent.len(), 7);

        let frequent = mine_frequent_itemsets(dataset.transactions(), 3).unwrap();
        let singles: Vec<&ItemSet> = frequent.keys().collect();
        assert_eq!(singles.len(), 3);
        assert!(singles.iter().all(|i| i.len() == 1));
    }

    #[test]
    fn test_nothing_frequent() {
        let dataset = scenario();
        let frequent = mine_frequent_itemsets(dataset.transactions(), 6).unwrap();
        assert!(frequent.is_empty());
    }

    #[test]
    fn test_zero_min_count_skips_absent_itemsets() {
        let dataset = Dataset::from_tokens(vec![vec!["a", "b"], vec!["c"]]);
        let frequent = mine_frequent_itemsets(dataset.transactions(), 0).unwrap();
        assert_eq!(frequent.len(), 4);
        assert!(frequent.values().all(|&count| count > 0));
        let ac = dataset.itemset_of(&["a", "c"]).unwrap();
        assert!(!frequent.contains_key(&ac));

        let rules = generate_rules(&frequent, dataset.transactions()).unwrap();
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn test_empty_dataset() {
        match mine_frequent_itemsets(&[], 1) {
            Err(MiningError::EmptyDataset) => {}
            other => panic!("expected EmptyDataset, got {:?}", other),
        }
    }

    #[test]
    fn test_single_transaction() {
        let dataset = Dataset::from_tokens(vec![vec!["a", "b", "c", "d"]]);
        let frequent = mine_frequent_itemsets(dataset.transactions(), 1).unwrap();
        // Every non-empty subset of {a,b,c,d}.
        assert_eq!(frequent.len(), 15);
        assert!(frequent.values().all(|&count| count == 1));
    }
}
