use std::io::{self, BufRead, Write};

use indigo::{Card, Choice, Player, TableView};
use tracing::{trace, warn};

/// A human at the terminal, choosing cards by their position in the hand.
pub struct ConsolePlayer<R, W> {
    name: String,
    input: R,
    output: W,
    // A re-usable buffer for reading lines.
    buf: String,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(name: &str, input: R, output: W) -> Self {
        Self {
            name: String::from(name),
            input,
            output,
            buf: String::new(),
        }
    }

    /// Asks until the answer is a valid position or `exit`.
    fn choose_card(&mut self, hand: &[Card]) -> io::Result<Choice> {
        let listing = hand
            .iter()
            .enumerate()
            .map(|(i, card)| format!("{}){}", i + 1, card))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.output, "Cards in hand: {}", listing)?;

        loop {
            writeln!(self.output, "Choose a card to play (1-{}):", hand.len())?;
            self.output.flush()?;
            match read_answer(&mut self.input, &mut self.buf)? {
                None => return Ok(Choice::Quit),
                Some(answer) if answer.eq_ignore_ascii_case("exit") => return Ok(Choice::Quit),
                Some(answer) => {
                    let position = answer.parse::<usize>().ok().and_then(|n| n.checked_sub(1));
                    if let Some(&card) = position.and_then(|i| hand.get(i)) {
                        return Ok(Choice::Play(card));
                    }
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn play(&mut self, hand: &[Card], _view: TableView) -> Choice {
        self.choose_card(hand).unwrap_or_else(|err| {
            warn!(%err, "Console unusable, leaving the game");
            Choice::Quit
        })
    }
}

/// Asks whether the human goes first. `None` if the input ended.
pub fn ask_play_first(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<Option<bool>> {
    let mut buf = String::new();
    loop {
        writeln!(output, "Play first?")?;
        output.flush()?;
        match read_answer(input, &mut buf)? {
            None => return Ok(None),
            Some(answer) if answer.eq_ignore_ascii_case("yes") => return Ok(Some(true)),
            Some(answer) if answer.eq_ignore_ascii_case("no") => return Ok(Some(false)),
            Some(_) => {}
        }
    }
}

/// Reads one trimmed line into `buf`. `None` means end of input.
fn read_answer<'b>(input: &mut impl BufRead, buf: &'b mut String) -> io::Result<Option<&'b str>> {
    buf.clear(); // because read_line() appends to the buffer
    if input.read_line(buf)? == 0 {
        return Ok(None);
    }
    let answer = buf.trim();
    trace!(answer, "Console input");
    Ok(Some(answer))
}
