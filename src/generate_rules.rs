use crate::error::MiningError;
use crate::itemizer::Itemizer;
use crate::itemset::ItemSet;
use crate::support::{count_support, SupportCounts};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use std::hash::{Hash, Hasher};
use tracing::info;

#[derive(Clone, Debug)]
pub struct Rule {
    antecedent: ItemSet,
    consequent: ItemSet,
    count: u32,
    support: OrderedFloat<f64>,
    confidence: OrderedFloat<f64>,
    lift: OrderedFloat<f64>,
    all_confidence: OrderedFloat<f64>,
    cosine: OrderedFloat<f64>,
}

impl PartialEq for Rule {
    fn eq(&self, other: &Rule) -> bool {
        self.antecedent == other.antecedent && self.consequent == other.consequent
    }
}

impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.antecedent.hash(state);
        self.consequent.hash(state);
    }
}

impl Rule {
    // Scores the rule antecedent ==> consequent from the support counts of
    // the whole itemset (`ac_count`), the antecedent (`a_count`) and the
    // consequent (`c_count`), over `num_transactions` transactions.
    pub fn from_counts(
        antecedent: ItemSet,
        consequent: ItemSet,
        ac_count: u32,
        a_count: u32,
        c_count: u32,
        num_transactions: usize,
    ) -> Result<Rule, MiningError> {
        if a_count == 0 {
            return Err(MiningError::ZeroSupport {
                itemset: antecedent,
            });
        }
        if c_count == 0 {
            return Err(MiningError::ZeroSupport {
                itemset: consequent,
            });
        }

        let n = num_transactions as f64;
        let (ac, a, c) = (ac_count as f64, a_count as f64, c_count as f64);
        let confidence = ac / a;
        let lift = confidence / (c / n);
        let all_confidence = ac / a.max(c);
        let cosine = ac / (a * c).sqrt();

        Ok(Rule {
            antecedent,
            consequent,
            count: ac_count,
            support: OrderedFloat::from(ac / n),
            confidence: OrderedFloat::from(confidence),
            lift: OrderedFloat::from(lift),
            all_confidence: OrderedFloat::from(all_confidence),
            cosine: OrderedFloat::from(cosine),
        })
    }

    // Counts the antecedent and consequent against the transactions rather
    // than trusting any previously computed counts.
    fn make(
        antecedent: ItemSet,
        consequent: ItemSet,
        ac_count: u32,
        transactions: &[ItemSet],
    ) -> Result<Rule, MiningError> {
        let a_count = count_support(&antecedent, transactions);
        let c_count = count_support(&consequent, transactions);
        Rule::from_counts(
            antecedent,
            consequent,
            ac_count,
            a_count,
            c_count,
            transactions.len(),
        )
    }

    pub fn to_string(&self, itemizer: &Itemizer) -> String {
        [
            self.antecedent.to_string(itemizer),
            " ==> ".to_owned(),
            self.consequent.to_string(itemizer),
        ]
        .join("")
    }

    pub fn antecedent(&self) -> &ItemSet {
        &self.antecedent
    }

    pub fn consequent(&self) -> &ItemSet {
        &self.consequent
    }

    // The itemset the rule was split from.
    pub fn itemset(&self) -> ItemSet {
        self.antecedent.union(&self.consequent)
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn support(&self) -> f64 {
        self.support.into()
    }

    pub fn confidence(&self) -> f64 {
        self.confidence.into()
    }

    pub fn lift(&self) -> f64 {
        self.lift.into()
    }

    pub fn all_confidence(&self) -> f64 {
        self.all_confidence.into()
    }

    pub fn cosine(&self) -> f64 {
        self.cosine.into()
    }
}

// One rule for each way of splitting the itemset into a non-empty
// antecedent and a non-empty consequent.
fn rules_for_itemset(
    itemset: &ItemSet,
    count: u32,
    transactions: &[ItemSet],
) -> Result<Vec<Rule>, MiningError> {
    let mut rules = vec![];
    for size in 1..itemset.len() {
        for items in itemset.items().iter().cloned().combinations(size) {
            let antecedent = ItemSet::new(items);
            let consequent = itemset.difference(&antecedent);
            rules.push(Rule::make(antecedent, consequent, count, transactions)?);
        }
    }
    Ok(rules)
}

/// Generates every rule derivable from the frequent itemsets, without any
/// filtering. Rules come out grouped by source itemset, in the order of
/// `frequent`.
pub fn generate_rules(
    frequent: &SupportCounts,
    transactions: &[ItemSet],
) -> Result<Vec<Rule>, MiningError> {
    let rules: Vec<Vec<Rule>> = frequent
        .par_iter()
        .filter(|&(itemset, _)| itemset.len() > 1)
        .map(|(itemset, &count)| rules_for_itemset(itemset, count, transactions))
        .collect::<Result<_, _>>()?;
    let rules: Vec<Rule> = rules.into_iter().flatten().collect();
    info!(rules = rules.len(), "generated rules");
    Ok(rules)
}

// Keeps the rules at or above both thresholds.
pub fn filter_rules(rules: &[Rule], min_confidence: f64, min_lift: f64) -> Vec<&Rule> {
    rules
        .iter()
        .filter(|rule| rule.confidence() >= min_confidence && rule.lift() >= min_lift)
        .collect()
}
