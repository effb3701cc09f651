use crate::Card;

/// The error type for [`Table::play_turn()`](crate::Table::play_turn).
///
/// Both variants are contract violations by the caller or a player
/// implementation; the table state is left untouched when one is returned.
#[derive(Debug, PartialEq, Eq)]
pub enum TableError {
    CardNotInHand { seat: usize, card: Card },
    GameFinished,
}

impl std::error::Error for TableError {}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::CardNotInHand { seat, card } => write!(
                f,
                "Player in seat {} tried to play {}, which is not in their hand",
                seat, card
            ),
            TableError::GameFinished => write!(f, "The game is already over"),
        }
    }
}
