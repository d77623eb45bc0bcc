//! Property tests for the miner over small random transaction databases.

use apriori::generate_rules;
use apriori::support::count_support;
use apriori::{find_closures, mine_frequent_itemsets, Dataset, ItemSet};
use proptest::prelude::*;

/// Up to 12 transactions over the items a..f.
fn transactions() -> impl Strategy<Value = Vec<Vec<String>>> {
    let item = prop::sample::select(vec!["a", "b", "c", "d", "e", "f"]);
    let transaction = prop::collection::vec(item.prop_map(String::from), 1..5);
    prop::collection::vec(transaction, 1..12)
}

fn subsets_one_smaller(itemset: &ItemSet) -> Vec<ItemSet> {
    itemset
        .items()
        .iter()
        .map(|&skip| {
            itemset
                .items()
                .iter()
                .cloned()
                .filter(|&item| item != skip)
                .collect()
        })
        .collect()
}

proptest! {
    #[test]
    fn frequent_itemsets_are_downward_closed(rows in transactions(), min_count in 1u32..4) {
        let dataset = Dataset::from_tokens(rows);
        let frequent = mine_frequent_itemsets(dataset.transactions(), min_count).unwrap();
        for (itemset, &count) in frequent.iter() {
            prop_assert!(count >= min_count);
            if itemset.len() > 1 {
                for subset in subsets_one_smaller(itemset) {
                    prop_assert!(frequent.contains_key(&subset));
                }
            }
        }
    }

    #[test]
    fn support_is_monotone(rows in transactions()) {
        let dataset = Dataset::from_tokens(rows);
        let transactions = dataset.transactions();
        let frequent = mine_frequent_itemsets(transactions, 1).unwrap();
        for itemset in frequent.keys() {
            let count = count_support(itemset, transactions);
            for subset in subsets_one_smaller(itemset) {
                prop_assert!(count_support(&subset, transactions) >= count);
            }
        }
    }

    #[test]
    fn every_occurring_itemset_is_found(rows in transactions()) {
        let dataset = Dataset::from_tokens(rows);
        let frequent = mine_frequent_itemsets(dataset.transactions(), 1).unwrap();
        for transaction in dataset.transactions() {
            prop_assert!(frequent.contains_key(transaction));
        }
    }

    #[test]
    fn closures_are_correct(rows in transactions(), min_count in 1u32..4) {
        let dataset = Dataset::from_tokens(rows);
        let frequent = mine_frequent_itemsets(dataset.transactions(), min_count).unwrap();
        let closures = find_closures(&frequent);
        for m in closures.maximal.iter() {
            prop_assert!(frequent.keys().all(|f| !m.is_proper_subset_of(f)));
        }
        for c in closures.closed.iter() {
            let count = frequent[c];
            prop_assert!(frequent
                .iter()
                .all(|(f, &f_count)| !(c.is_proper_subset_of(f) && f_count == count)));
        }
        // Every maximal itemset is closed, and both are drawn from the
        // frequent itemsets.
        prop_assert!(closures.maximal.is_subset(&closures.closed));
        prop_assert!(closures.closed.iter().all(|c| frequent.contains_key(c)));
    }

    #[test]
    fn rules_partition_their_itemset(rows in transactions(), min_count in 1u32..4) {
        let dataset = Dataset::from_tokens(rows);
        let frequent = mine_frequent_itemsets(dataset.transactions(), min_count).unwrap();
        let rules = generate_rules(&frequent, dataset.transactions()).unwrap();
        let expected: usize = frequent
            .keys()
            .map(|i| (1usize << i.len()) - 2)
            .sum();
        prop_assert_eq!(rules.len(), expected);
        for rule in rules.iter() {
            prop_assert!(!rule.antecedent().is_empty());
            prop_assert!(!rule.consequent().is_empty());
            prop_assert!(rule.antecedent().is_disjoint(rule.consequent()));
            prop_assert!(frequent.contains_key(&rule.itemset()));
            prop_assert!(rule.confidence() > 0.0 && rule.confidence() <= 1.0);
            prop_assert!(rule.all_confidence() <= rule.confidence());
            prop_assert!(rule.cosine() > 0.0 && rule.cosine() <= 1.0 + 1e-9);
        }
    }
}
