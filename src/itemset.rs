use crate::item::Item;
use crate::itemizer::Itemizer;
use std::cmp::Ordering;
use std::iter::FromIterator;

/// A set of distinct items. Items are kept sorted by id, so two itemsets
/// built from the same items in any order compare and hash equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct ItemSet {
    items: Vec<Item>,
}

impl ItemSet {
    pub fn new(mut items: Vec<Item>) -> ItemSet {
        items.sort();
        items.dedup();
        ItemSet { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: Item) -> bool {
        self.items.binary_search(&item).is_ok()
    }

    // Both sides are sorted, so walk them together.
    pub fn is_subset_of(&self, other: &ItemSet) -> bool {
        if self.len() > other.len() {
            return false;
        }
        let mut op = 0;
        for &item in &self.items {
            while op < other.items.len() && other.items[op] < item {
                op += 1;
            }
            if op == other.items.len() || other.items[op] != item {
                return false;
            }
            op += 1;
        }
        true
    }

    pub fn is_proper_subset_of(&self, other: &ItemSet) -> bool {
        self.len() < other.len() && self.is_subset_of(other)
    }

    pub fn union(&self, other: &ItemSet) -> ItemSet {
        let (a, b) = (&self.items, &other.items);
        let mut c: Vec<Item> = Vec::with_capacity(a.len() + b.len());
        let mut ap = 0;
        let mut bp = 0;
        while ap < a.len() && bp < b.len() {
            if a[ap] < b[bp] {
                c.push(a[ap]);
                ap += 1;
            } else if b[bp] < a[ap] {
                c.push(b[bp]);
                bp += 1;
            } else {
                // a[ap] == b[bp]
                c.push(a[ap]);
                ap += 1;
                bp += 1;
            }
        }
        c.extend_from_slice(&a[ap..]);
        c.extend_from_slice(&b[bp..]);
        ItemSet { items: c }
    }

    pub fn difference(&self, other: &ItemSet) -> ItemSet {
        self.items
            .iter()
            .filter(|&&item| !other.contains(item))
            .cloned()
            .collect()
    }

    pub fn is_disjoint(&self, other: &ItemSet) -> bool {
        self.items.iter().all(|&item| !other.contains(item))
    }

    pub fn to_string(&self, itemizer: &Itemizer) -> String {
        let mut tokens: Vec<&str> = self.items.iter().map(|&id| itemizer.str_of(id)).collect();
        ensure_sorted(&mut tokens);
        tokens.join(" ")
    }
}

impl FromIterator<Item> for ItemSet {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> ItemSet {
        ItemSet::new(iter.into_iter().collect())
    }
}

// Smaller itemsets first, then lexicographically by item id. This lets
// result sets iterate level by level.
impl Ord for ItemSet {
    fn cmp(&self, other: &ItemSet) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.items.cmp(&other.items))
    }
}

impl PartialOrd for ItemSet {
    fn partial_cmp(&self, other: &ItemSet) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// If all items in the itemset convert to an integer, order by that integer,
// otherwise order lexicographically.
pub fn ensure_sorted(a: &mut [&str]) {
    let all_items_convert_to_ints = a.iter().all(|x| x.parse::<u32>().is_ok());
    if all_items_convert_to_ints {
        a.sort_by_key(|x| x.parse::<u32>().unwrap_or(0));
    } else {
        a.sort();
    }
}
