use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

use crate::console::{Console, Input};
use crate::game::{Game, GuessOutcome, Hint, Status, Turn};
use crate::options::Settings;
use crate::phrases::Phrases;

const AFFIRMATIVE: [&str; 4] = ["yes", "yep", "y", "true"];
const NEGATIVE: [&str; 4] = ["no", "nope", "n", "false"];

/// How a single game ended.
pub enum GameEnd {
    /// Won or lost
    Finished(Game),
    /// Input ran out before the game was over
    Abandoned,
}

/// Parse an answer to "play again?", `None` if it is not recognized.
///
/// # Example
///
/// ```
/// use hangman::session::parse_answer;
/// assert_eq!(parse_answer("Yep"), Some(true));
/// assert_eq!(parse_answer("n"), Some(false));
/// assert_eq!(parse_answer("maybe"), None);
/// ```
pub fn parse_answer(answer: &str) -> Option<bool> {
    let answer = answer.to_lowercase();
    if AFFIRMATIVE.contains(&answer.as_str()) {
        Some(true)
    } else if NEGATIVE.contains(&answer.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Plays games on one console until the player stops or input runs out.
pub struct Session<R, W, G> {
    console: Console<R, W>,
    settings: Settings,
    phrases: Phrases,
    rng: G,
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    pub fn new(console: Console<R, W>, settings: Settings, phrases: Phrases, rng: G) -> Self {
        Session {
            console,
            settings,
            phrases,
            rng,
        }
    }

    /// runs games until the player declines another one
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let game = match self.play_game()? {
                GameEnd::Finished(game) => game,
                GameEnd::Abandoned => {
                    debug!("input exhausted during a game");
                    return Ok(());
                }
            };
            self.print_summary(&game)?;

            match self.play_again()? {
                Some(true) => continue,
                Some(false) => return Ok(()),
                None => {
                    debug!("input exhausted before an answer");
                    return Ok(());
                }
            }
        }
    }

    /// Set up one game and play it until it is over.
    pub fn play_game(&mut self) -> io::Result<GameEnd> {
        let Some(phrase) = self.choose_phrase()? else {
            return Ok(GameEnd::Abandoned);
        };
        let mut game = Game::new(phrase, &self.settings);
        info!(
            lives = game.lives(),
            hints = game.hints(),
            letters = game.n_remaining(),
            "game started"
        );

        while game.status() == Status::Playing {
            self.print_turn(&game)?;

            let input = match self.console.read_line()? {
                Input::Line(line) => line,
                Input::Exhausted => return Ok(GameEnd::Abandoned),
            };

            match game.play(&input, &mut self.rng) {
                Turn::Hint(Hint::Reveal(letter)) => writeln!(self.console, "Try: {letter}")?,
                Turn::Hint(Hint::Exhausted) => writeln!(self.console, "No more hints allowed!")?,
                Turn::Guess(GuessOutcome::Correct) => {
                    writeln!(self.console, "{}", "Correct!".green())?
                }
                Turn::Guess(GuessOutcome::Wrong) => writeln!(self.console, "{}", "Wrong!".red())?,
                Turn::Guess(_) => {}
            }
        }

        info!(status = ?game.status(), guesses = game.guesses(), "game over");
        Ok(GameEnd::Finished(game))
    }

    /// Ask for a category until one yields a phrase, `None` if input ran out.
    fn choose_phrase(&mut self) -> io::Result<Option<String>> {
        let ids: Vec<String> = self.phrases.categories().map(|c| c.id().to_string()).collect();
        for category in self.phrases.categories() {
            writeln!(self.console, "{category}")?;
        }
        writeln!(self.console, "Pick a category [{}]:", list_choices(&ids))?;

        loop {
            let line = match self.console.read_line()? {
                Input::Line(line) => line,
                Input::Exhausted => return Ok(None),
            };

            let picked = line
                .trim()
                .parse::<i64>()
                .ok()
                .and_then(|id| match self.phrases.pick_by_id(id, &mut self.rng) {
                    Ok(phrase) => Some(phrase.to_owned()),
                    Err(err) => {
                        debug!(%err, "category rejected");
                        None
                    }
                });

            match picked {
                Some(phrase) => return Ok(Some(phrase)),
                None => writeln!(self.console, "Category not recognized.")?,
            }
        }
    }

    fn print_turn(&mut self, game: &Game) -> io::Result<()> {
        writeln!(self.console, "{game}")?;
        writeln!(self.console, "{} letters remaining.", game.n_remaining())?;
        writeln!(self.console, "Lives remaining: {}", game.lives())?;
        writeln!(
            self.console,
            "Guess a letter or phrase (? for a hint [{} remaining]):",
            game.hints()
        )
    }

    fn print_summary(&mut self, game: &Game) -> io::Result<()> {
        match game.status() {
            Status::Won => {
                writeln!(self.console, "{}", "You won!".green().bold())?;
                writeln!(self.console, "You took {} guesses.", game.guesses())?;
            }
            Status::Lost => writeln!(self.console, "{}", "You lost!".red().bold())?,
            Status::Playing => return Ok(()),
        }
        writeln!(self.console, "Phrase: {}", game.phrase())
    }

    /// `None` if input ran out before a recognized answer
    fn play_again(&mut self) -> io::Result<Option<bool>> {
        writeln!(self.console, "Would you like to play again?")?;
        loop {
            match self.console.read_line()? {
                Input::Line(line) => match parse_answer(&line) {
                    Some(answer) => return Ok(Some(answer)),
                    None => writeln!(self.console, "Failed to parse answer, please type again.")?,
                },
                Input::Exhausted => return Ok(None),
            }
        }
    }

    #[cfg(test)]
    fn into_console(self) -> Console<R, W> {
        self.console
    }
}

/// "1, 2, or 3"
fn list_choices(ids: &[String]) -> String {
    match ids {
        [] => String::new(),
        [only] => only.clone(),
        [rest @ .., last] => format!("{}, or {}", rest.join(", "), last),
    }
}
