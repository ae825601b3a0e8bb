use crate::{
    entities::{DocumentTable, FormSession, ItemColumn, LogConfig},
    presentation::utils::format_amount,
};

const EMPTY_CELL: &str = "N/A";

/// Builds the printable table from what is currently in the form (not from
/// storage), so unsaved edits show up in the export.
pub(crate) struct DocumentBuilder<'a> {
    config: &'a LogConfig,
}

impl<'a> DocumentBuilder<'a> {
    pub(crate) fn new(config: &'a LogConfig) -> Self {
        Self { config }
    }

    pub(crate) fn build(&self, session: &FormSession) -> DocumentTable {
        let date = match session.date().trim() {
            "" => "No Date".to_string(),
            d => d.to_string(),
        };
        let goal = match session.goal().trim() {
            "" => "No Goal".to_string(),
            g => self.format_goal(g),
        };

        DocumentTable {
            title: self.config.document_title.clone(),
            summary: vec![
                format!("Shopping Date: {date}"),
                format!("Financial Goal: {goal}"),
            ],
            headers: ItemColumn::ALL
                .iter()
                .map(|c| c.label().to_string())
                .collect(),
            rows: session
                .rows()
                .iter()
                .map(|item| {
                    ItemColumn::ALL
                        .iter()
                        .map(|c| match item.get(*c) {
                            "" => EMPTY_CELL.to_string(),
                            v => v.to_string(),
                        })
                        .collect()
                })
                .collect(),
        }
    }

    fn format_goal(&self, raw: &str) -> String {
        match (self.config.currency, raw.parse::<f64>()) {
            (Some(currency), Ok(amount)) if amount.is_finite() => format_amount(amount, currency),
            _ => raw.to_string(),
        }
    }
}
