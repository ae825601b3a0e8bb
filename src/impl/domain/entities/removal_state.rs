/// Confirmation flow for removing an item row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemovalState {
    #[default]
    Idle,
    PendingConfirmation { row: usize },
}
