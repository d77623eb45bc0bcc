//! Apriori frequent itemset mining, with maximal and closed itemset
//! derivation and association rule generation.
//!
//! The miner is brute force: candidates are all combinations of the items
//! still in play at each level, and support is counted by testing every
//! candidate against every transaction.

pub mod apriori;
pub mod candidates;
pub mod closure;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod generate_rules;
pub mod item;
pub mod itemizer;
pub mod itemset;
pub mod support;
pub mod transaction_reader;

pub use crate::apriori::mine_frequent_itemsets;
pub use crate::closure::{find_closures, Closures};
pub use crate::config::{MinSupport, MiningConfig};
pub use crate::dataset::Dataset;
pub use crate::error::MiningError;
pub use crate::generate_rules::{filter_rules, generate_rules, Rule};
pub use crate::item::Item;
pub use crate::itemizer::Itemizer;
pub use crate::itemset::ItemSet;
pub use crate::support::SupportCounts;

use std::collections::BTreeSet;

/// Everything a run produces, ready for presentation.
#[derive(Clone, Debug)]
pub struct MiningResult {
    pub num_transactions: usize,
    // The support threshold as an absolute transaction count.
    pub min_count: u32,
    pub frequent: SupportCounts,
    pub maximal: BTreeSet<ItemSet>,
    pub closed: BTreeSet<ItemSet>,
    // Every rule, before any confidence filtering.
    pub rules: Vec<Rule>,
}

impl MiningResult {
    // Rules passing the configured minimum confidence.
    pub fn confident_rules(&self, config: &MiningConfig) -> Vec<&Rule> {
        filter_rules(&self.rules, config.min_confidence, 0.0)
    }
}

pub fn mine(dataset: &Dataset, config: &MiningConfig) -> Result<MiningResult, MiningError> {
    config.validate()?;
    let transactions = dataset.transactions();
    let min_count = config.min_support.min_count(transactions.len());
    let frequent = mine_frequent_itemsets(transactions, min_count)?;
    let Closures { maximal, closed } = find_closures(&frequent);
    let rules = generate_rules(&frequent, transactions)?;
    Ok(MiningResult {
        num_transactions: transactions.len(),
        min_count,
        frequent,
        maximal,
        closed,
        rules,
    })
}
