//! Consumable item ledger gating food-based interactions.

/// Broad item categories. Only Food and Toy carry rules; Accessory and
/// Medicine are inert inventory entries the host may display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ItemCategory {
    Food,
    Toy,
    Accessory,
    Medicine,
}

/// One inventory entry. `name` and `icon` are presentation data the rules
/// never read.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub category: ItemCategory,
    pub quantity: u32,
}

impl InventoryItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        category: ItemCategory,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            category,
            quantity,
        }
    }
}

/// The session inventory. Quantities never go below zero; a food item at
/// quantity zero is not usable for feeding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    pub items: Vec<InventoryItem>,
}

impl InventoryState {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }

    pub fn get(&self, id: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// True when a food item with this id exists and has at least one unit.
    pub fn usable_food(&self, id: &str) -> bool {
        self.get(id)
            .is_some_and(|item| item.category == ItemCategory::Food && item.quantity > 0)
    }

    /// True when a toy item with this id exists at any quantity.
    pub fn has_toy(&self, id: &str) -> bool {
        self.get(id)
            .is_some_and(|item| item.category == ItemCategory::Toy)
    }

    /// Decrements the item's quantity by one. Returns false (and leaves the
    /// ledger untouched) when the item is missing or already at zero.
    pub fn consume(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) if item.quantity > 0 => {
                item.quantity -= 1;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> InventoryState {
        InventoryState::new(vec![
            InventoryItem::new("kibble", "Dog Kibble", "🍖", ItemCategory::Food, 2),
            InventoryItem::new("ball", "Tennis Ball", "🎾", ItemCategory::Toy, 1),
            InventoryItem::new("biscuit", "Biscuit", "🍪", ItemCategory::Food, 0),
        ])
    }

    #[test]
    fn usable_food_requires_category_and_quantity() {
        let inv = ledger();
        assert!(inv.usable_food("kibble"));
        assert!(!inv.usable_food("biscuit")); // quantity 0
        assert!(!inv.usable_food("ball")); // wrong category
        assert!(!inv.usable_food("bone")); // unknown id
    }

    #[test]
    fn consume_decrements_exactly_one() {
        let mut inv = ledger();
        assert!(inv.consume("kibble"));
        assert_eq!(inv.get("kibble").unwrap().quantity, 1);
        assert!(!inv.consume("biscuit"));
        assert_eq!(inv.get("biscuit").unwrap().quantity, 0);
    }
}
