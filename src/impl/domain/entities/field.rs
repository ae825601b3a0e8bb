use std::fmt;

use super::shopping_item::ItemColumn;

/// Type rule a raw field value is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Date,
    Number,
    Integer,
    Price,
    Text { max_len: usize },
}

/// Identifies one input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Date,
    Goal,
    Item { row: usize, column: ItemColumn },
}

impl FieldId {
    /// Human-readable name used in validation messages. Rows are 1-based.
    pub fn label(&self) -> String {
        match self {
            FieldId::Date => "Shopping Date".to_string(),
            FieldId::Goal => "Financial Goal".to_string(),
            FieldId::Item { row, column } => format!("item {} {}", row + 1, column.label()),
        }
    }
}

/// Constraint a value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    InvalidDate,
    NotANumber,
    NotADecimal,
    Negative,
    NotPositiveInteger,
    TooManyDecimals { max: usize },
    TooLong { max: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required => write!(f, "a value is required"),
            ValidationError::InvalidDate => write!(f, "must be a valid calendar date"),
            ValidationError::NotANumber => write!(f, "must be a number"),
            ValidationError::NotADecimal => write!(f, "must be a plain decimal number"),
            ValidationError::Negative => write!(f, "must not be negative"),
            ValidationError::NotPositiveInteger => write!(f, "must be a whole number of at least 1"),
            ValidationError::TooManyDecimals { max } => {
                write!(f, "must have at most {max} decimal places")
            }
            ValidationError::TooLong { max } => write!(f, "must be at most {max} characters"),
        }
    }
}

/// A validation failure pinned to the field that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: FieldId,
    pub error: ValidationError,
}

impl FieldViolation {
    pub fn message(&self) -> String {
        format!("Invalid input for {}: {}.", self.field.label(), self.error)
    }
}
