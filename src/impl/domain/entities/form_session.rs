use chrono::{DateTime, Utc};

use crate::domain::logic::save_debounce::SaveDebounce;

use super::{
    field::FieldId,
    removal_state::RemovalState,
    shopping_item::{ItemColumn, ShoppingItem},
    shopping_log::{ShoppingLog, ShoppingLogDraft},
};

/// All mutable state of one form session.
///
/// Created fresh on session init and mutated only by the form editing, save,
/// load, remove and import operations.
#[derive(Debug, Clone)]
pub struct FormSession {
    date: String,
    goal: String,
    rows: Vec<ShoppingItem>,
    invalid_field: Option<FieldId>,
    removal: RemovalState,
    pub(crate) debounce: SaveDebounce,
}

impl FormSession {
    pub(crate) fn new(debounce: SaveDebounce) -> Self {
        Self {
            date: String::new(),
            goal: String::new(),
            rows: Vec::new(),
            invalid_field: None,
            removal: RemovalState::Idle,
            debounce,
        }
    }

    // Field access.
    // ---

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn rows(&self) -> &[ShoppingItem] {
        &self.rows
    }

    pub fn set_date(&mut self, value: impl Into<String>) {
        self.date = value.into();
    }

    pub fn set_goal(&mut self, value: impl Into<String>) {
        self.goal = value.into();
    }

    /// Appends an empty row and returns its index.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(ShoppingItem::default());
        self.rows.len() - 1
    }

    /// Appends a prefilled row and returns its index.
    pub fn push_row(&mut self, item: ShoppingItem) -> usize {
        self.rows.push(item);
        self.rows.len() - 1
    }

    /// Returns false if the row doesn't exist.
    pub fn set_cell(&mut self, row: usize, column: ItemColumn, value: impl Into<String>) -> bool {
        match self.rows.get_mut(row) {
            Some(item) => {
                item.set(column, value);
                true
            }
            None => false,
        }
    }

    // Invalid-field marking.
    // ---

    /// Field currently flagged for correction, if any.
    pub fn invalid_field(&self) -> Option<FieldId> {
        self.invalid_field
    }

    pub(crate) fn mark_invalid(&mut self, field: FieldId) {
        self.invalid_field = Some(field);
    }

    pub(crate) fn clear_invalid(&mut self) {
        self.invalid_field = None;
    }

    /// Time of the last accepted save in this session.
    pub fn last_saved_at(&self) -> Option<DateTime<Utc>> {
        self.debounce.last_success()
    }

    // Row removal.
    // ---

    pub fn removal_state(&self) -> RemovalState {
        self.removal
    }

    /// Asks to remove the last row. Returns false (and stays idle) when there
    /// are no rows.
    pub fn request_removal(&mut self) -> bool {
        match self.rows.len() {
            0 => false,
            n => {
                self.removal = RemovalState::PendingConfirmation { row: n - 1 };
                true
            }
        }
    }

    /// Removes the pending row, if any, and goes back to idle.
    pub fn confirm_removal(&mut self) -> Option<ShoppingItem> {
        let removed = match self.removal {
            RemovalState::PendingConfirmation { row } if row < self.rows.len() => {
                if matches!(self.invalid_field, Some(FieldId::Item { row: r, .. }) if r >= row) {
                    self.invalid_field = None;
                }
                Some(self.rows.remove(row))
            }
            _ => None,
        };
        self.removal = RemovalState::Idle;
        removed
    }

    pub fn cancel_removal(&mut self) {
        self.removal = RemovalState::Idle;
    }

    // Conversion.
    // ---

    pub fn to_draft(&self) -> ShoppingLogDraft {
        ShoppingLogDraft {
            date: self.date.clone(),
            goal: self.goal.clone(),
            items: self.rows.clone(),
        }
    }

    /// Replaces the whole form with the contents of a stored log.
    pub(crate) fn populate(&mut self, log: &ShoppingLog) {
        self.date = log.date().to_string();
        self.goal = log.goal().to_string();
        self.rows = log.items().to_vec();
        self.invalid_field = None;
        self.removal = RemovalState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn session() -> FormSession {
        FormSession::new(SaveDebounce::new(TimeDelta::seconds(2)))
    }

    #[test]
    fn removal_requires_a_row() {
        let mut s = session();
        assert!(!s.request_removal());
        assert_eq!(s.removal_state(), RemovalState::Idle);
        assert_eq!(s.confirm_removal(), None);
    }

    #[test]
    fn confirm_removes_last_row() {
        let mut s = session();
        s.push_row(ShoppingItem::new("Milk", "1", "2", "Dairy", ""));
        s.push_row(ShoppingItem::new("Eggs", "12", "3", "Dairy", ""));

        assert!(s.request_removal());
        assert_eq!(
            s.removal_state(),
            RemovalState::PendingConfirmation { row: 1 }
        );

        let removed = s.confirm_removal().map(|item| item.name);
        assert_eq!(removed.as_deref(), Some("Eggs"));
        assert_eq!(s.rows().len(), 1);
        assert_eq!(s.removal_state(), RemovalState::Idle);
    }

    #[test]
    fn cancel_keeps_rows() {
        let mut s = session();
        s.add_row();
        assert!(s.request_removal());
        s.cancel_removal();
        assert_eq!(s.removal_state(), RemovalState::Idle);
        assert_eq!(s.rows().len(), 1);
        // Confirming after a cancel is a no-op.
        assert_eq!(s.confirm_removal(), None);
        assert_eq!(s.rows().len(), 1);
    }

    #[test]
    fn populate_replaces_rows_and_formats_goal() {
        let mut s = session();
        s.add_row();
        s.add_row();
        s.request_removal();
        let log = ShoppingLog::from_parts(
            "2024-01-01".to_string(),
            100.0,
            vec![ShoppingItem::new("Milk", "2", "3.50", "Dairy", "")],
        );
        s.populate(&log);
        assert_eq!(s.date(), "2024-01-01");
        assert_eq!(s.goal(), "100");
        assert_eq!(s.rows(), log.items());
        assert_eq!(s.removal_state(), RemovalState::Idle);
    }
}
