use crate::entities::{
    FieldId, FieldRule, FieldViolation, ItemColumn, ShoppingLogDraft,
};

use super::field_validator::{parse_non_negative, validate};

pub(crate) const MAX_TEXT_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DraftRejection {
    Field(FieldViolation),
    NoItems,
}

/// Rule and required-ness for each item column.
pub(crate) fn item_rule(column: ItemColumn) -> (FieldRule, bool) {
    match column {
        ItemColumn::Name => (FieldRule::Text { max_len: MAX_TEXT_LEN }, true),
        ItemColumn::Quantity => (FieldRule::Integer, true),
        ItemColumn::Price => (FieldRule::Price, true),
        ItemColumn::Category => (FieldRule::Text { max_len: MAX_TEXT_LEN }, true),
        ItemColumn::Notes => (FieldRule::Text { max_len: MAX_TEXT_LEN }, false),
    }
}

/// Validates a whole form snapshot, stopping at the first bad field.
pub(crate) struct DraftValidator<'a> {
    draft: &'a ShoppingLogDraft,
}

impl<'a> DraftValidator<'a> {
    pub(crate) fn new(draft: &'a ShoppingLogDraft) -> Self {
        Self { draft }
    }

    /// Returns the parsed goal on success.
    pub(crate) fn validate(&self) -> Result<f64, DraftRejection> {
        check(FieldId::Date, &self.draft.date, FieldRule::Date, true)?;
        check(FieldId::Goal, &self.draft.goal, FieldRule::Number, true)?;

        for (row, item) in self.draft.items.iter().enumerate() {
            for column in ItemColumn::ALL {
                let (rule, required) = item_rule(column);
                check(FieldId::Item { row, column }, item.get(column), rule, required)?;
            }
        }

        if self.draft.items.is_empty() {
            return Err(DraftRejection::NoItems);
        }

        parse_non_negative(&self.draft.goal).map_err(|error| {
            DraftRejection::Field(FieldViolation {
                field: FieldId::Goal,
                error,
            })
        })
    }
}

fn check(field: FieldId, value: &str, rule: FieldRule, required: bool) -> Result<(), DraftRejection> {
    validate(value, rule, required)
        .map_err(|error| DraftRejection::Field(FieldViolation { field, error }))
}
