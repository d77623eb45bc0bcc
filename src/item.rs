// Items are interned by the Itemizer, so an Item is just a dense id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Item {
    id: u32,
}

impl Item {
    pub fn with_id(id: u32) -> Item {
        Item { id }
    }

    pub fn as_index(&self) -> usize {
        self.id as usize
    }
}
