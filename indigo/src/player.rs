use crate::{utils::VecExtensions, Card};

/// What a player observes of the table when it is asked to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableView {
    pub pile_len: usize,
    /// `None` exactly when the pile is empty.
    pub top_card: Option<Card>,
}

impl TableView {
    pub fn empty() -> Self {
        Self {
            pile_len: 0,
            top_card: None,
        }
    }
}

/// The decision made by a [`Player`] on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Play(Card),
    /// The player leaves the game. Nothing is placed on the table.
    Quit,
}

/// The decision step of a player.
///
/// The table keeps the hand and the score in a [`PlayerState`]; implementations
/// only pick which card of `hand` to play.
pub trait Player {
    fn name(&self) -> &str;

    /// Must return a card from `hand`, or [`Choice::Quit`].
    fn play(&mut self, hand: &[Card], view: TableView) -> Choice;
}

/// The state for a single player during one game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerState {
    hand: Vec<Card>,
    cards_won: usize,
    score: usize,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn cards_won(&self) -> usize {
        self.cards_won
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Appends dealt cards to the hand, keeping their order.
    pub fn receive(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    pub fn has_empty_hand(&self) -> bool {
        self.hand.is_empty()
    }

    /// Takes `card` out of the hand. Returns `false` if it was not there.
    pub fn remove(&mut self, card: Card) -> bool {
        self.hand.remove_first_where(|&c| c == card).is_some()
    }

    pub fn win_cards(&mut self, cards: usize, points: usize) {
        self.cards_won += cards;
        self.score += points;
    }
}
