use crate::error::MiningError;
use crate::itemizer::Itemizer;
use crate::itemset::ItemSet;
use crate::transaction_reader::TransactionReader;
use std::path::Path;
use tracing::info;

/// The transaction database: every transaction held in memory, in input
/// order, along with the itemizer that names their items.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    transactions: Vec<ItemSet>,
    itemizer: Itemizer,
}

impl Dataset {
    pub fn new(transactions: Vec<ItemSet>, itemizer: Itemizer) -> Dataset {
        Dataset {
            transactions,
            itemizer,
        }
    }

    pub fn read<P: AsRef<Path>>(path: P) -> Result<Dataset, MiningError> {
        let mut itemizer = Itemizer::new();
        let transactions = TransactionReader::open(&path, &mut itemizer)?
            .collect::<Result<Vec<ItemSet>, _>>()?;
        info!(
            path = %path.as_ref().display(),
            transactions = transactions.len(),
            items = itemizer.len(),
            "loaded dataset"
        );
        Ok(Dataset::new(transactions, itemizer))
    }

    pub fn from_tokens<T, R, S>(rows: T) -> Dataset
    where
        T: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut itemizer = Itemizer::new();
        let transactions: Vec<ItemSet> = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|token| itemizer.id_of(token.as_ref()))
                    .collect::<ItemSet>()
            })
            .collect();
        Dataset::new(transactions, itemizer)
    }

    pub fn transactions(&self) -> &[ItemSet] {
        &self.transactions
    }

    pub fn num_transactions(&self) -> usize {
        self.transactions.len()
    }

    pub fn itemizer(&self) -> &Itemizer {
        &self.itemizer
    }

    // Builds the itemset for `tokens`, or None if any token never occurs.
    pub fn itemset_of(&self, tokens: &[&str]) -> Option<ItemSet> {
        tokens.iter().map(|token| self.itemizer.get(token)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Dataset;

    #[test]
    fn test_from_tokens() {
        let dataset = Dataset::from_tokens(vec![vec!["a", "b"], vec!["b", "c", "b"]]);
        assert_eq!(dataset.num_transactions(), 2);
        assert_eq!(dataset.itemizer().len(), 3);
        assert_eq!(dataset.transactions()[1].len(), 2);
        assert_eq!(
            dataset.itemset_of(&["b", "a"]),
            Some(dataset.transactions()[0].clone())
        );
        assert_eq!(dataset.itemset_of(&["a", "z"]), None);
    }
}
