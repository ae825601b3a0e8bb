use super::shopping_item::ShoppingItem;

/// Unvalidated snapshot of the form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingLogDraft {
    pub date: String,
    pub goal: String,
    pub items: Vec<ShoppingItem>,
}

/// A shopping log that passed either save-time validation or structural
/// import validation.
///
/// Only constructible inside the crate, so a record that skipped both checks
/// can't reach storage.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingLog {
    date: String,
    goal: f64,
    items: Vec<ShoppingItem>,
}

impl ShoppingLog {
    pub(crate) fn from_parts(date: String, goal: f64, items: Vec<ShoppingItem>) -> Self {
        Self { date, goal, items }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn goal(&self) -> f64 {
        self.goal
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub(crate) fn into_parts(self) -> (String, f64, Vec<ShoppingItem>) {
        (self.date, self.goal, self.items)
    }
}
