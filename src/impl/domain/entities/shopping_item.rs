/// Column of an item row, in persisted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemColumn {
    Name,
    Quantity,
    Price,
    Category,
    Notes,
}

impl ItemColumn {
    pub const ALL: [ItemColumn; 5] = [
        ItemColumn::Name,
        ItemColumn::Quantity,
        ItemColumn::Price,
        ItemColumn::Category,
        ItemColumn::Notes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ItemColumn::Name => "Item Name",
            ItemColumn::Quantity => "Quantity",
            ItemColumn::Price => "Price",
            ItemColumn::Category => "Category",
            ItemColumn::Notes => "Notes",
        }
    }
}

/// One line entry of a shopping log.
///
/// Every field is kept as the raw string the user typed (quantity and price
/// included), which is also how items are persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingItem {
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub category: String,
    pub notes: String,
}

impl ShoppingItem {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
        category: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            price: price.into(),
            category: category.into(),
            notes: notes.into(),
        }
    }

    pub fn get(&self, column: ItemColumn) -> &str {
        match column {
            ItemColumn::Name => &self.name,
            ItemColumn::Quantity => &self.quantity,
            ItemColumn::Price => &self.price,
            ItemColumn::Category => &self.category,
            ItemColumn::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, column: ItemColumn, value: impl Into<String>) {
        let value = value.into();
        match column {
            ItemColumn::Name => self.name = value,
            ItemColumn::Quantity => self.quantity = value,
            ItemColumn::Price => self.price = value,
            ItemColumn::Category => self.category = value,
            ItemColumn::Notes => self.notes = value,
        }
    }

    /// Applies `f` to every field, in column order.
    pub(crate) fn map_fields<F>(self, mut f: F) -> Self
    where
        F: FnMut(String) -> String,
    {
        Self {
            name: f(self.name),
            quantity: f(self.quantity),
            price: f(self.price),
            category: f(self.category),
            notes: f(self.notes),
        }
    }
}
