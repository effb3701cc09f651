use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::{Card, Choice, Player, TableView};

/// Breaks ties between equally good cards.
pub trait Picker {
    /// `candidates` is never empty.
    fn pick(&mut self, candidates: &[Card]) -> Card;
}

/// Picks uniformly at random.
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Picker for RandomPicker {
    fn pick(&mut self, candidates: &[Card]) -> Card {
        *candidates
            .choose(&mut self.rng)
            .expect("pick called without candidates")
    }
}

/// The greedy card selection of the computer player.
///
/// It never looks further than its own hand and the top card of the pile:
/// - a lone card in hand is played,
/// - a lone candidate (card sharing suit or rank with the top card) is played,
/// - with no pile or no candidate, prefer cards whose suit, else rank, repeats
///   in hand,
/// - with several candidates, prefer the suit matches, else the rank matches.
///
/// Candidates are counted per match, so a card sharing both suit and rank with
/// the top card counts as two candidates.
pub struct ComputerStrategy<P> {
    picker: P,
}

impl<P: Picker> ComputerStrategy<P> {
    pub fn new(picker: P) -> Self {
        Self { picker }
    }

    /// Returns `None` only for an empty hand.
    pub fn select(&mut self, hand: &[Card], view: TableView) -> Option<Card> {
        if hand.len() <= 1 {
            return hand.first().copied();
        }

        let (suit_matches, rank_matches): (Vec<Card>, Vec<Card>) = match view.top_card {
            Some(top) => (
                hand.iter().copied().filter(|c| c.suit == top.suit).collect(),
                hand.iter().copied().filter(|c| c.rank == top.rank).collect(),
            ),
            None => (Vec::new(), Vec::new()),
        };
        let candidates: Vec<Card> = suit_matches
            .iter()
            .chain(rank_matches.iter())
            .copied()
            .collect();

        let card = match candidates.len() {
            1 => {
                debug!(card = %candidates[0], "Playing the only candidate");
                candidates[0]
            }
            _ if view.pile_len == 0 || candidates.is_empty() => self.without_candidates(hand),
            _ => self.among_candidates(&suit_matches, &rank_matches, &candidates),
        };
        Some(card)
    }

    fn without_candidates(&mut self, hand: &[Card]) -> Card {
        let suit_counts = hand.iter().counts_by(|c| c.suit);
        let same_suit: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|c| suit_counts[&c.suit] > 1)
            .collect();
        if !same_suit.is_empty() {
            debug!(options = same_suit.len(), "Playing a card of a repeated suit");
            return self.picker.pick(&same_suit);
        }

        let rank_counts = hand.iter().counts_by(|c| c.rank);
        let same_rank: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|c| rank_counts[&c.rank] > 1)
            .collect();
        if !same_rank.is_empty() {
            debug!(options = same_rank.len(), "Playing a card of a repeated rank");
            return self.picker.pick(&same_rank);
        }

        debug!(options = hand.len(), "Playing any card");
        self.picker.pick(hand)
    }

    fn among_candidates(
        &mut self,
        suit_matches: &[Card],
        rank_matches: &[Card],
        candidates: &[Card],
    ) -> Card {
        if suit_matches.len() > 1 {
            debug!(options = suit_matches.len(), "Playing a card of the top suit");
            self.picker.pick(suit_matches)
        } else if rank_matches.len() > 1 {
            debug!(options = rank_matches.len(), "Playing a card of the top rank");
            self.picker.pick(rank_matches)
        } else {
            debug!(options = candidates.len(), "Playing any candidate");
            self.picker.pick(candidates)
        }
    }
}

/// The scripted opponent.
pub struct ComputerPlayer<P = RandomPicker> {
    name: String,
    strategy: ComputerStrategy<P>,
}

impl ComputerPlayer<RandomPicker> {
    pub fn new(name: &str, rng: StdRng) -> Self {
        Self::with_picker(name, RandomPicker::new(rng))
    }
}

impl<P: Picker> ComputerPlayer<P> {
    pub fn with_picker(name: &str, picker: P) -> Self {
        Self {
            name: String::from(name),
            strategy: ComputerStrategy::new(picker),
        }
    }
}

impl<P: Picker> Player for ComputerPlayer<P> {
    fn name(&self) -> &str {
        &self.name
    }

    fn play(&mut self, hand: &[Card], view: TableView) -> Choice {
        match self.strategy.select(hand, view) {
            Some(card) => Choice::Play(card),
            // Only reachable if the table asks a player with nothing in hand.
            None => Choice::Quit,
        }
    }
}
