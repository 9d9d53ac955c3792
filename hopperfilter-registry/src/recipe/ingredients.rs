use crate::Identifier;

/// What a single crafting grid slot accepts. Every slot consumes one item.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum IngredientSlot {
    Single(Identifier),
    Many(Vec<Identifier>),
}

impl IngredientSlot {
    pub fn item(item: Identifier) -> Self {
        Self::Single(item)
    }
}
