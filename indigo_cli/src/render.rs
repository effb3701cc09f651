use indigo::{Table, TurnOutcome};
use itertools::Itertools;

pub fn initial_pile(table: &Table) -> String {
    format!("Initial cards on the table: {}", table.pile().iter().join(" "))
}

pub fn pile_status(table: &Table) -> String {
    match table.top_card() {
        Some(top) => format!(
            "\n{} cards on the table, and the top card is {}",
            table.pile().len(),
            top
        ),
        None => String::from("\nNo cards on the table"),
    }
}

pub fn score(table: &Table) -> String {
    let (p0, p1) = (table.state(0), table.state(1));
    format!(
        "Score: {} {} - {} {}\nCards: {} {} - {} {}",
        table.name(0),
        p0.score(),
        table.name(1),
        p1.score(),
        table.name(0),
        p0.cards_won(),
        table.name(1),
        p1.cards_won(),
    )
}

/// The lines printed after a turn. Plays by `human_seat` are not echoed,
/// the human just typed them.
pub fn outcome(table: &Table, outcome: &TurnOutcome, human_seat: usize) -> String {
    let mut lines = Vec::new();
    match outcome {
        TurnOutcome::Played {
            seat,
            card,
            capture,
            ..
        } => {
            if *seat != human_seat {
                lines.push(format!("{} plays {}", table.name(*seat), card));
            }
            if capture.is_some() {
                lines.push(format!("{} wins cards", table.name(*seat)));
                lines.push(score(table));
            }
            lines.push(pile_status(table));
        }
        TurnOutcome::Quit { .. } => lines.push(String::from("Game Over")),
        TurnOutcome::GameOver(_) => {
            lines.push(score(table));
            lines.push(String::from("Game Over"));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use indigo::{card, Card, Choice, Deck, Player, TableView};

    use super::*;

    struct Leftmost(&'static str);

    impl Player for Leftmost {
        fn name(&self) -> &str {
            self.0
        }

        fn play(&mut self, hand: &[Card], _view: TableView) -> Choice {
            hand.first().copied().map_or(Choice::Quit, Choice::Play)
        }
    }

    fn deck() -> Deck {
        let codes = [
            "10♣", "3♣", "4♥", "5♦", // pile
            "K♦", "2♥", "6♠", "7♠", "8♠", "9♠", // Player
            "2♣", "2♦", "6♥", "7♥", "8♥", "9♥", // Computer
        ];
        Deck::from_cards(codes.iter().map(|s| s.parse().unwrap()).collect())
    }

    #[test]
    fn describes_the_table() {
        let (mut human, mut computer) = (Leftmost("Player"), Leftmost("Computer"));
        let mut table = Table::new([&mut human, &mut computer], 0, deck());
        assert_eq!(initial_pile(&table), "Initial cards on the table: 10♣ 3♣ 4♥ 5♦");
        assert_eq!(
            pile_status(&table),
            "\n4 cards on the table, and the top card is 5♦"
        );

        let first = table.play_turn().unwrap();
        assert_eq!(
            outcome(&table, &first, 0),
            "Player wins cards\n\
             Score: Player 2 - Computer 0\n\
             Cards: Player 5 - Computer 0\n\
             \nNo cards on the table"
        );

        let second = table.play_turn().unwrap();
        assert_eq!(
            outcome(&table, &second, 0),
            "Computer plays 2♣\n\n1 cards on the table, and the top card is 2♣"
        );
        assert_eq!(table.top_card(), Some(card!("2♣")));
    }

    #[test]
    fn describes_the_end() {
        let (mut human, mut computer) = (Leftmost("Player"), Leftmost("Computer"));
        let mut table = Table::new([&mut human, &mut computer], 1, Deck::from_cards(vec![]));
        let last = table.play_turn().unwrap();
        assert_eq!(
            outcome(&table, &last, 0),
            "Score: Player 0 - Computer 0\nCards: Player 0 - Computer 0\nGame Over"
        );
        assert_eq!(
            outcome(&table, &TurnOutcome::Quit { seat: 0 }, 0),
            "Game Over"
        );
    }
}
