use indigo::{ComputerPlayer, Deck, Table, TurnOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

pub const SEAT_NAMES: [&str; 2] = ["Computer 1", "Computer 2"];

/// Results of a series of computer-vs-computer games.
#[derive(Debug, Default, Serialize)]
pub struct SimulationSummary {
    pub games: usize,
    pub wins: [usize; 2],
    pub ties: usize,
    pub total_scores: [usize; 2],
    pub most_cards_bonuses: [usize; 2],
}

impl SimulationSummary {
    pub fn average_score(&self, seat: usize) -> f64 {
        self.total_scores[seat] as f64 / self.games.max(1) as f64
    }

    pub fn report(&self) -> String {
        let mut report = format!("End result after {} games:", self.games);
        for seat in 0..2 {
            report += &format!(
                "\n- {} wins by {} (average score {:.2}, most cards {} times)",
                self.wins[seat],
                SEAT_NAMES[seat],
                self.average_score(seat),
                self.most_cards_bonuses[seat],
            );
        }
        report += &format!("\n- {} ties", self.ties);
        report
    }
}

/// Plays `num_games` games between two computer players. The seats take
/// turns going first.
pub fn simulate(num_games: usize, rng: &mut StdRng) -> anyhow::Result<SimulationSummary> {
    let mut summary = SimulationSummary::default();
    for game_idx in 0..num_games {
        let mut player_1 = ComputerPlayer::new(SEAT_NAMES[0], StdRng::seed_from_u64(rng.gen()));
        let mut player_2 = ComputerPlayer::new(SEAT_NAMES[1], StdRng::seed_from_u64(rng.gen()));
        let deck = Deck::new(rng);
        let mut table = Table::new([&mut player_1, &mut player_2], game_idx % 2, deck);

        let TurnOutcome::GameOver(score) = table.run(|_, _| {})? else {
            anyhow::bail!("Computer player left game {}", game_idx);
        };
        match score.winner() {
            Some(seat) => {
                debug!(winner = SEAT_NAMES[seat], game_idx, scores = ?score.scores);
                summary.wins[seat] += 1;
            }
            None => {
                debug!(game_idx, "Tie");
                summary.ties += 1;
            }
        }
        if let Some(seat) = score.bonus_to {
            summary.most_cards_bonuses[seat] += 1;
        }
        for seat in 0..2 {
            summary.total_scores[seat] += score.scores[seat];
        }
        summary.games += 1;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_game_is_counted() {
        let summary = simulate(20, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(summary.games, 20);
        assert_eq!(summary.wins[0] + summary.wins[1] + summary.ties, 20);
        // 20 scoring cards per deck, plus at most one bonus per game.
        let total: usize = summary.total_scores.iter().sum();
        let bonuses: usize = summary.most_cards_bonuses.iter().sum();
        assert_eq!(total, 20 * 20 + 3 * bonuses);
    }

    #[test]
    fn same_seed_same_summary() {
        let a = simulate(5, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = simulate(5, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a.wins, b.wins);
        assert_eq!(a.total_scores, b.total_scores);
    }

    #[test]
    fn report_and_json() {
        let summary = SimulationSummary {
            games: 4,
            wins: [3, 1],
            ties: 0,
            total_scores: [60, 40],
            most_cards_bonuses: [2, 2],
        };
        assert_eq!(
            summary.report(),
            "End result after 4 games:\n\
             - 3 wins by Computer 1 (average score 15.00, most cards 2 times)\n\
             - 1 wins by Computer 2 (average score 10.00, most cards 2 times)\n\
             - 0 ties"
        );
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["wins"], serde_json::json!([3, 1]));
        assert_eq!(json["games"], 4);
    }
}
