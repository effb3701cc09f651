use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::warn;

use crate::Card;

/// The cards that have not been dealt yet.
///
/// The deck is shuffled once, when it is created, and afterwards only ever
/// shrinks from the front.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full, shuffled 52-card deck.
    pub fn new(rng: &mut StdRng) -> Self {
        let mut cards: Vec<Card> = Card::all().collect();
        cards.shuffle(rng);
        Self { cards }
    }

    /// A deck that deals exactly `cards`, in order. Useful for scripted games.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes up to `count` cards from the front of the deck.
    ///
    /// Asking for more cards than remain is not an error: the rest of the deck
    /// is returned, which may be nothing at all.
    pub fn draw(&mut self, count: usize) -> Vec<Card> {
        if count > self.cards.len() {
            warn!(
                requested = count,
                remaining = self.cards.len(),
                "The remaining cards are insufficient to meet the request"
            );
        }
        let count = count.min(self.cards.len());
        self.cards.drain(..count).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::SeedableRng;

    use super::*;
    use crate::{card, DECK_SIZE};

    #[test]
    fn new_deck_holds_every_card_once() {
        let mut deck = Deck::new(&mut StdRng::seed_from_u64(7));
        assert_eq!(deck.len(), DECK_SIZE);
        let drawn: BTreeSet<Card> = deck.draw(DECK_SIZE).into_iter().collect();
        assert_eq!(drawn.len(), DECK_SIZE);
        assert!(deck.is_empty());
    }

    #[test]
    fn same_seed_same_order() {
        let mut a = Deck::new(&mut StdRng::seed_from_u64(42));
        let mut b = Deck::new(&mut StdRng::seed_from_u64(42));
        assert_eq!(a.draw(DECK_SIZE), b.draw(DECK_SIZE));
    }

    #[test]
    fn draws_from_the_front() {
        let mut deck = Deck::from_cards(vec![card!("A♠"), card!("2♠"), card!("3♠")]);
        assert_eq!(deck.draw(2), vec![card!("A♠"), card!("2♠")]);
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn insufficient_draw_returns_the_rest() {
        let mut deck = Deck::from_cards(vec![card!("A♠"), card!("2♠"), card!("3♠")]);
        assert_eq!(deck.draw(6).len(), 3);
        assert!(deck.is_empty());
        assert!(deck.draw(6).is_empty());
    }
}
