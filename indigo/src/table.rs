use std::cmp::Ordering;

use serde::Serialize;
use tracing::{debug, info};

use crate::{Card, Choice, Deck, Player, PlayerState, TableError, TableView};

/// Cards turned face up on the table before the first turn.
pub const INITIAL_PILE_SIZE: usize = 4;
/// Cards dealt to a player whenever their hand runs out.
pub const HAND_SIZE: usize = 6;
/// Extra points for the player who won more cards than the other.
pub const MOST_CARDS_BONUS: usize = 3;

/// A player together with the state the table tracks for it.
pub struct Seat<'a> {
    pub player: &'a mut dyn Player,
    pub state: PlayerState,
}

/// The pile won by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Capture {
    pub cards: usize,
    pub points: usize,
}

/// The final tally, after the leftover pile and the bonus were handed out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FinalScore {
    pub scores: [usize; 2],
    pub cards_won: [usize; 2],
    /// The seat that got the cards left on the table, and what they were worth.
    pub leftover: (usize, Capture),
    pub bonus_to: Option<usize>,
}

impl FinalScore {
    /// The seat with the higher score, or `None` on a tie.
    pub fn winner(&self) -> Option<usize> {
        match self.scores[0].cmp(&self.scores[1]) {
            Ordering::Greater => Some(0),
            Ordering::Less => Some(1),
            Ordering::Equal => None,
        }
    }
}

/// Summarizes the outcome of one call to [`Table::play_turn()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Played {
        seat: usize,
        card: Card,
        capture: Option<Capture>,
        /// Number of cards dealt to `seat` after it emptied its hand.
        replenished: usize,
    },
    Quit {
        seat: usize,
    },
    GameOver(FinalScore),
}

impl TurnOutcome {
    pub fn is_continuing(&self) -> bool {
        matches!(self, TurnOutcome::Played { .. })
    }
}

/// The game board: the pile, the deck and the two seats.
///
/// Seats are addressed by index (0 or 1). Turns strictly alternate between
/// them, starting with the seat chosen at construction.
pub struct Table<'a> {
    seats: [Seat<'a>; 2],
    deck: Deck,
    pile: Vec<Card>,
    current: usize,
    first: usize,
    last_winner: Option<usize>,
    finished: bool,
}

impl<'a> Table<'a> {
    /// Lays out the initial pile and deals a hand to seat 0, then seat 1.
    ///
    /// Panics if `first` is not 0 or 1.
    pub fn new(players: [&'a mut dyn Player; 2], first: usize, mut deck: Deck) -> Self {
        assert!(first < 2, "first seat must be 0 or 1, got {}", first);
        let pile = deck.draw(INITIAL_PILE_SIZE);
        let [p0, p1] = players;
        let mut table = Self {
            seats: [
                Seat {
                    player: p0,
                    state: PlayerState::new(),
                },
                Seat {
                    player: p1,
                    state: PlayerState::new(),
                },
            ],
            deck,
            pile,
            current: first,
            first,
            last_winner: None,
            finished: false,
        };
        table.deal(0);
        table.deal(1);
        info!(
            pile = %table.pile.iter().map(Card::to_string).collect::<Vec<_>>().join(" "),
            first = table.seats[first].player.name(),
            "Table set up"
        );
        table
    }

    pub fn view(&self) -> TableView {
        TableView {
            pile_len: self.pile.len(),
            top_card: self.pile.last().copied(),
        }
    }

    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    pub fn top_card(&self) -> Option<Card> {
        self.pile.last().copied()
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn first(&self) -> usize {
        self.first
    }

    pub fn last_winner(&self) -> Option<usize> {
        self.last_winner
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn state(&self, seat: usize) -> &PlayerState {
        &self.seats[seat].state
    }

    pub fn name(&self, seat: usize) -> &str {
        self.seats[seat].player.name()
    }

    /// Plays one turn of the current seat.
    ///
    /// The returned outcome tells whether the game continues. A quit leaves
    /// the table exactly as it was.
    pub fn play_turn(&mut self) -> Result<TurnOutcome, TableError> {
        if self.finished {
            return Err(TableError::GameFinished);
        }
        if self.seats.iter().all(|s| s.state.has_empty_hand()) && self.deck.is_empty() {
            return Ok(TurnOutcome::GameOver(self.finish()));
        }

        let seat = self.current;
        let view = self.view();
        let Seat { player, state } = &mut self.seats[seat];
        let card = match player.play(state.hand(), view) {
            Choice::Play(card) => card,
            Choice::Quit => {
                info!(player = player.name(), "Player quit");
                return Ok(TurnOutcome::Quit { seat });
            }
        };
        if !state.remove(card) {
            return Err(TableError::CardNotInHand { seat, card });
        }

        // Nothing can be won from an empty table.
        let wins = matches!(view.top_card, Some(top) if card.matches(top));
        self.pile.push(card);
        let capture = if wins {
            let capture = self.take_pile(seat);
            self.last_winner = Some(seat);
            Some(capture)
        } else {
            None
        };
        debug!(seat, %card, ?capture, pile = self.pile.len(), "Card played");

        let replenished = if self.seats[seat].state.has_empty_hand() && !self.deck.is_empty() {
            self.deal(seat)
        } else {
            0
        };

        self.current = 1 - seat;
        Ok(TurnOutcome::Played {
            seat,
            card,
            capture,
            replenished,
        })
    }

    /// Plays turns until the game is over or a player quits.
    ///
    /// `observer` sees every outcome, including the last one, which is also
    /// returned.
    pub fn run<F>(&mut self, mut observer: F) -> Result<TurnOutcome, TableError>
    where
        F: FnMut(&Table<'_>, &TurnOutcome),
    {
        loop {
            let outcome = self.play_turn()?;
            observer(&*self, &outcome);
            if !outcome.is_continuing() {
                return Ok(outcome);
            }
        }
    }

    fn deal(&mut self, seat: usize) -> usize {
        let cards = self.deck.draw(HAND_SIZE);
        let dealt = cards.len();
        self.seats[seat].state.receive(cards);
        dealt
    }

    fn take_pile(&mut self, seat: usize) -> Capture {
        let capture = Capture {
            cards: self.pile.len(),
            points: self.pile.iter().filter(|c| c.rank.is_scoring()).count(),
        };
        self.seats[seat]
            .state
            .win_cards(capture.cards, capture.points);
        self.pile.clear();
        capture
    }

    fn finish(&mut self) -> FinalScore {
        let leftover_to = self.last_winner.unwrap_or(self.first);
        let leftover = self.take_pile(leftover_to);

        let cards_won = [self.seats[0].state.cards_won(), self.seats[1].state.cards_won()];
        let bonus_to = match cards_won[0].cmp(&cards_won[1]) {
            Ordering::Greater => Some(0),
            Ordering::Less => Some(1),
            Ordering::Equal => None,
        };
        if let Some(seat) = bonus_to {
            self.seats[seat].state.win_cards(0, MOST_CARDS_BONUS);
        }
        self.finished = true;

        let score = FinalScore {
            scores: [self.seats[0].state.score(), self.seats[1].state.score()],
            cards_won,
            leftover: (leftover_to, leftover),
            bonus_to,
        };
        info!(?score, "Game over");
        score
    }
}
