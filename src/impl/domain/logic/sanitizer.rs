use crate::entities::{ShoppingLog, ShoppingLogDraft};

/// Strips executable and markup content from user text before it is stored.
pub trait Sanitizer: Send + Sync {
    fn sanitize(&self, input: &str) -> String;
}

/// HTML sanitizer backed by `ammonia`'s default allow-list. Script and style
/// elements are dropped along with their content.
pub struct AmmoniaSanitizer;

impl Sanitizer for AmmoniaSanitizer {
    fn sanitize(&self, input: &str) -> String {
        ammonia::clean(input)
    }
}

/// Builds the storable log from a validated draft, sanitizing every string
/// field.
pub(crate) fn sanitize_draft(
    draft: ShoppingLogDraft,
    goal: f64,
    sanitizer: &dyn Sanitizer,
) -> ShoppingLog {
    ShoppingLog::from_parts(
        sanitizer.sanitize(&draft.date),
        goal,
        draft
            .items
            .into_iter()
            .map(|item| item.map_fields(|field| sanitizer.sanitize(&field)))
            .collect(),
    )
}
