use crate::itemset::ItemSet;
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Transaction database contains no transactions; nothing to mine")]
    EmptyDataset,

    // Every subset of a frequent itemset occurs at least as often as the
    // itemset itself, so this only fires if support counting is broken.
    #[error("Itemset {itemset:?} has zero support but is a subset of a frequent itemset")]
    ZeroSupport { itemset: ItemSet },

    #[error("Failed to read transactions: {0}")]
    Io(#[from] io::Error),
}
