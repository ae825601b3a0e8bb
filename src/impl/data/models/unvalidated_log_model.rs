use std::fmt;

use fractic_server_error::ServerError;
use serde_json::Value;

use crate::{
    data::models::shopping_log_model::coerce_goal,
    entities::{ShoppingItem, ShoppingLog},
    errors::{InvalidItemStructure, InvalidJson, InvalidLogStructure},
};

/// Parsed but unchecked JSON from an external source (ex. an uploaded file).
///
/// The only way out is [`UnvalidatedLogModel::validate`].
#[derive(Debug, Clone)]
pub(crate) struct UnvalidatedLogModel(Value);

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum StructuralError {
    NotAnObject,
    Date,
    Goal,
    Items,
    ItemNotArray { index: usize },
    ItemArity { index: usize, len: usize },
    ItemFieldType { index: usize, field: usize },
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralError::NotAnObject => write!(f, "parsed data is not an object"),
            StructuralError::Date => write!(f, "missing or invalid 'date' property"),
            StructuralError::Goal => {
                write!(f, "missing or invalid 'goal' property, must be a number")
            }
            StructuralError::Items => write!(f, "missing or invalid 'items' property"),
            StructuralError::ItemNotArray { index } => write!(f, "items[{index}] is not an array"),
            StructuralError::ItemArity { index, len } => write!(
                f,
                "items[{index}] has {len} entries, expected {}",
                ITEM_ARITY
            ),
            StructuralError::ItemFieldType { index, field } => {
                write!(f, "items[{index}][{field}] is not a string")
            }
        }
    }
}

impl StructuralError {
    pub(crate) fn into_server_error(self) -> ServerError {
        let details = self.to_string();
        match self {
            StructuralError::ItemNotArray { .. }
            | StructuralError::ItemArity { .. }
            | StructuralError::ItemFieldType { .. } => InvalidItemStructure::new(&details),
            _ => InvalidLogStructure::new(&details),
        }
    }
}

const ITEM_ARITY: usize = 5;

impl UnvalidatedLogModel {
    pub(crate) fn from_bytes(bytes: &[u8]) -> Result<Self, ServerError> {
        serde_json::from_slice(bytes)
            .map(UnvalidatedLogModel)
            .map_err(|e| InvalidJson::with_debug(&e))
    }

    /// Shape check only: field contents are trusted as-is. A string goal is
    /// coerced to a number.
    pub(crate) fn validate(self) -> Result<ShoppingLog, StructuralError> {
        let Value::Object(mut record) = self.0 else {
            return Err(StructuralError::NotAnObject);
        };

        let date = match record.remove("date") {
            Some(Value::String(s)) => s,
            _ => return Err(StructuralError::Date),
        };

        let goal = match record.remove("goal") {
            Some(Value::Number(n)) => n.as_f64().ok_or(StructuralError::Goal)?,
            Some(Value::String(s)) => coerce_goal(&s).ok_or(StructuralError::Goal)?,
            _ => return Err(StructuralError::Goal),
        };

        let raw_items = match record.remove("items") {
            Some(Value::Array(items)) => items,
            _ => return Err(StructuralError::Items),
        };

        let items = raw_items
            .into_iter()
            .enumerate()
            .map(|(index, raw)| parse_item(index, raw))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ShoppingLog::from_parts(date, goal, items))
    }
}

fn parse_item(index: usize, raw: Value) -> Result<ShoppingItem, StructuralError> {
    let Value::Array(fields) = raw else {
        return Err(StructuralError::ItemNotArray { index });
    };
    let [name, quantity, price, category, notes] = <[Value; ITEM_ARITY]>::try_from(fields)
        .map_err(|fields| StructuralError::ItemArity {
            index,
            len: fields.len(),
        })?;
    let as_string = |field: usize, v: Value| match v {
        Value::String(s) => Ok(s),
        _ => Err(StructuralError::ItemFieldType { index, field }),
    };
    Ok(ShoppingItem {
        name: as_string(0, name)?,
        quantity: as_string(1, quantity)?,
        price: as_string(2, price)?,
        category: as_string(3, category)?,
        notes: as_string(4, notes)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(json: &str) -> Result<ShoppingLog, StructuralError> {
        UnvalidatedLogModel::from_bytes(json.as_bytes())
            .expect("test input should be valid JSON")
            .validate()
    }

    #[test]
    fn coerces_string_goal() {
        let log = validate(
            r#"{"date":"2024-01-01","goal":"100","items":[["Milk","2","3.50","Dairy",""]]}"#,
        )
        .unwrap();
        assert_eq!(log.goal(), 100.0);
        assert_eq!(log.date(), "2024-01-01");
        assert_eq!(
            log.items(),
            &[ShoppingItem::new("Milk", "2", "3.50", "Dairy", "")]
        );
    }

    #[test]
    fn blank_string_goal_coerces_to_zero() {
        for goal in [r#""""#, r#""   ""#] {
            let json = format!(r#"{{"date":"2024-01-01","goal":{goal},"items":[]}}"#);
            assert_eq!(validate(&json).unwrap().goal(), 0.0, "{goal}");
        }
    }

    #[test]
    fn accepts_numeric_goal() {
        let log = validate(r#"{"date":"2024-01-01","goal":42.5,"items":[]}"#).unwrap();
        assert_eq!(log.goal(), 42.5);
        assert!(log.items().is_empty());
    }

    #[test]
    fn rejects_non_objects() {
        assert_eq!(validate("null"), Err(StructuralError::NotAnObject));
        assert_eq!(validate("[1,2]"), Err(StructuralError::NotAnObject));
        assert_eq!(validate("\"log\""), Err(StructuralError::NotAnObject));
    }

    #[test]
    fn rejects_bad_top_level_fields() {
        assert_eq!(
            validate(r#"{"goal":1,"items":[]}"#),
            Err(StructuralError::Date)
        );
        assert_eq!(
            validate(r#"{"date":20240101,"goal":1,"items":[]}"#),
            Err(StructuralError::Date)
        );
        assert_eq!(
            validate(r#"{"date":"2024-01-01","goal":"lots","items":[]}"#),
            Err(StructuralError::Goal)
        );
        assert_eq!(
            validate(r#"{"date":"2024-01-01","goal":null,"items":[]}"#),
            Err(StructuralError::Goal)
        );
        assert_eq!(
            validate(r#"{"date":"2024-01-01","goal":1,"items":{}}"#),
            Err(StructuralError::Items)
        );
    }

    #[test]
    fn rejects_bad_items() {
        assert_eq!(
            validate(r#"{"date":"d","goal":1,"items":[["a","1","2","c"]]}"#),
            Err(StructuralError::ItemArity { index: 0, len: 4 })
        );
        assert_eq!(
            validate(r#"{"date":"d","goal":1,"items":[["a","1","2","c",""],"x"]}"#),
            Err(StructuralError::ItemNotArray { index: 1 })
        );
        assert_eq!(
            validate(r#"{"date":"d","goal":1,"items":[["a",1,"2","c",""]]}"#),
            Err(StructuralError::ItemFieldType { index: 0, field: 1 })
        );
        assert_eq!(
            validate(r#"{"date":"d","goal":1,"items":[["a","1","2","c","",7]]}"#),
            Err(StructuralError::ItemArity { index: 0, len: 6 })
        );
    }

    #[test]
    fn invalid_json_is_rejected_before_validation() {
        assert!(UnvalidatedLogModel::from_bytes(b"{not json").is_err());
    }
}
