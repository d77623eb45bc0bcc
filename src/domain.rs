use crate::item::Item;
use crate::itemset::ItemSet;
use std::collections::BTreeSet;

pub fn item_domain<'a, I>(itemsets: I) -> BTreeSet<Item>
where
    I: IntoIterator<Item = &'a ItemSet>,
{
    itemsets
        .into_iter()
        .flat_map(|itemset| itemset.items().iter().cloned())
        .collect()
}

// Every item observed across the transaction database.
pub fn extract_domain(transactions: &[ItemSet]) -> BTreeSet<Item> {
    item_domain(transactions)
}
