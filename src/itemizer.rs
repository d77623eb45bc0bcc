use crate::item::Item;
use std::collections::HashMap;

/// Maps the string tokens read from a dataset to dense `Item` ids, and back.
#[derive(Clone, Debug, Default)]
pub struct Itemizer {
    item_str_to_id: HashMap<String, Item>,
    item_id_to_str: Vec<String>,
}

impl Itemizer {
    pub fn new() -> Itemizer {
        Itemizer {
            item_str_to_id: HashMap::new(),
            item_id_to_str: Vec::new(),
        }
    }

    // Returns the id for `item`, allocating a new one on first sight.
    pub fn id_of(&mut self, item: &str) -> Item {
        if let Some(&id) = self.item_str_to_id.get(item) {
            return id;
        }
        let id = Item::with_id(self.item_id_to_str.len() as u32);
        self.item_str_to_id.insert(String::from(item), id);
        self.item_id_to_str.push(String::from(item));
        id
    }

    pub fn get(&self, item: &str) -> Option<Item> {
        self.item_str_to_id.get(item).cloned()
    }

    pub fn str_of(&self, id: Item) -> &str {
        &self.item_id_to_str[id.as_index()]
    }

    pub fn to_id_vec(&mut self, items: &[&str]) -> Vec<Item> {
        items.iter().map(|s| self.id_of(s)).collect()
    }

    pub fn len(&self) -> usize {
        self.item_id_to_str.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_id_to_str.is_empty()
    }
}
