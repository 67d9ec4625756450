pub mod letters;

use letters::Letters;

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use tracing::debug;

use crate::options::Settings;

/// The input that asks for a hint instead of guessing.
pub const HINT_REQUEST: &str = "?";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter is in the phrase
    Correct,
    /// The letter is not in the phrase, or the phrase guess was wrong
    Wrong,
    /// The whole phrase was guessed
    Solved,
    /// The letter was guessed before
    Repeated,
    /// Empty input, or the game is already over
    Ignored,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Hint {
    Reveal(char),
    Exhausted,
}

/// What a single line of input did to the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    Guess(GuessOutcome),
    Hint(Hint),
}

/// One game of hangman, from setup until it is won or lost.
#[derive(Clone, Debug)]
pub struct Game {
    phrase: String,
    letters: Letters,
    lives: u32,
    hints: u32,
    guesses: u32,
}

impl Game {
    pub fn new(phrase: impl Into<String>, settings: &Settings) -> Self {
        let phrase = phrase.into();
        let letters = Letters::new(&phrase);
        Game {
            phrase,
            letters,
            lives: settings.lives,
            hints: settings.max_hints,
            guesses: 0,
        }
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn hints(&self) -> u32 {
        self.hints
    }

    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    pub fn letters(&self) -> &Letters {
        &self.letters
    }

    pub fn n_remaining(&self) -> usize {
        self.letters.n_remaining()
    }

    /// A game is won as soon as nothing is hidden, even on the last life.
    pub fn status(&self) -> Status {
        if self.letters.is_complete() {
            Status::Won
        } else if self.lives == 0 {
            Status::Lost
        } else {
            Status::Playing
        }
    }

    pub fn is_over(&self) -> bool {
        self.status() != Status::Playing
    }

    /// Handle one line of input: a hint request, a letter or a phrase.
    pub fn play<R: Rng + ?Sized>(&mut self, input: &str, rng: &mut R) -> Turn {
        match input {
            HINT_REQUEST => Turn::Hint(self.hint(rng)),
            _ => Turn::Guess(self.guess(input)),
        }
    }

    /// Guess a single letter, or the whole phrase if the input is longer.
    ///
    /// # Example
    ///
    /// ```
    /// use hangman::game::{Game, GuessOutcome, Status};
    /// use hangman::options::Settings;
    /// let mut game = Game::new("Word", &Settings::default());
    /// assert_eq!(game.guess("w"), GuessOutcome::Correct);
    /// assert_eq!(game.guess("w"), GuessOutcome::Repeated);
    /// assert_eq!(game.guess("wOrD"), GuessOutcome::Solved);
    /// assert_eq!(game.status(), Status::Won);
    /// ```
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::Ignored;
        }

        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (None, _) => GuessOutcome::Ignored,
            (Some(letter), None) => self.guess_letter(letter),
            (Some(_), Some(_)) => self.guess_phrase(input),
        }
    }

    fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        match self.letters.guess(letter) {
            None => GuessOutcome::Repeated,
            Some(true) => {
                self.guesses += 1;
                GuessOutcome::Correct
            }
            Some(false) => {
                self.guesses += 1;
                self.lose_life();
                GuessOutcome::Wrong
            }
        }
    }

    fn guess_phrase(&mut self, guess: &str) -> GuessOutcome {
        self.guesses += 1;
        if guess.eq_ignore_ascii_case(&self.phrase) {
            self.letters.reveal_all();
            GuessOutcome::Solved
        } else {
            self.lose_life();
            GuessOutcome::Wrong
        }
    }

    fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    /// Reveal a random hidden letter, if any hints are left.
    ///
    /// The letter is only shown, the player still has to guess it.
    pub fn hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Hint {
        if self.hints == 0 {
            return Hint::Exhausted;
        }
        match self.letters.remaining().choose(rng) {
            Some(&letter) => {
                self.hints -= 1;
                debug!(hints_left = self.hints, "hint used");
                Hint::Reveal(letter)
            }
            None => Hint::Exhausted,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters.mask(&self.phrase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn create_game(phrase: &str, lives: u32, max_hints: u32) -> Game {
        let settings = Settings {
            lives,
            max_hints,
            ..Settings::default()
        };
        Game::new(phrase, &settings)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(5031)
    }

    #[test]
    fn setup() {
        let game = create_game("Perth and Kinross", 10, 2);
        assert_eq!(game.status(), Status::Playing);
        assert_eq!(game.guesses(), 0);
        assert_eq!(game.lives(), 10);
        assert_eq!(game.hints(), 2);
        assert_eq!(game.n_remaining(), 12);
        assert_eq!(game.to_string(), "----- --- -------");
    }

    #[test]
    fn only_correct() {
        let mut game = create_game("Word", 10, 2);
        for letter in ["W", "o", "r", "d"] {
            assert_eq!(game.guess(letter), GuessOutcome::Correct);
        }
        assert_eq!(game.status(), Status::Won);
        assert_eq!(game.guesses(), 4);
        assert_eq!(game.lives(), 10);
        assert_eq!(game.to_string(), "Word");
    }

    #[test]
    fn order_does_not_matter() {
        let mut game = create_game("Dundee", 10, 2);
        for letter in ["E", "n", "u", "D"] {
            game.guess(letter);
        }
        assert_eq!(game.status(), Status::Won);
    }

    #[test]
    fn only_wrong() {
        let mut game = create_game("Word", 4, 2);
        for letter in ["a", "b", "c", "e"] {
            assert_eq!(game.guess(letter), GuessOutcome::Wrong);
        }
        assert_eq!(game.lives(), 0);
        assert_eq!(game.status(), Status::Lost);
        assert_eq!(game.n_remaining(), 4);
    }

    #[test]
    fn incorrect_full_guesses() {
        let mut game = create_game("Word", 3, 2);
        for _ in 0..3 {
            assert_eq!(game.guess("abc"), GuessOutcome::Wrong);
        }
        assert_eq!(game.status(), Status::Lost);
        assert_eq!(game.guesses(), 3);
    }

    #[test]
    fn full_guess_any_casing() {
        let mut game = create_game("Word", 10, 2);
        assert_eq!(game.guess("worLd"), GuessOutcome::Wrong);
        assert_eq!(game.guess("woRd"), GuessOutcome::Solved);
        assert_eq!(game.n_remaining(), 0);
        assert_eq!(game.status(), Status::Won);
        assert_eq!(game.guesses(), 2);
    }

    #[test]
    fn repeated_letter_changes_nothing() {
        let mut game = create_game("Word", 10, 2);
        assert_eq!(game.guess("a"), GuessOutcome::Wrong);
        assert_eq!(game.guess("w"), GuessOutcome::Correct);
        let before = game.clone();

        for letter in ["a", "A", "w", "W", " "] {
            assert_eq!(game.guess(letter), GuessOutcome::Repeated);
        }
        assert_eq!(game.lives(), before.lives());
        assert_eq!(game.guesses(), before.guesses());
        assert_eq!(game.letters(), before.letters());
    }

    #[test]
    fn empty_guess_is_ignored() {
        let mut game = create_game("Word", 10, 2);
        assert_eq!(game.guess(""), GuessOutcome::Ignored);
        assert_eq!(game.guesses(), 0);
        assert_eq!(game.lives(), 10);
    }

    #[test]
    fn multibyte_letter_is_a_letter_guess() {
        let mut game = create_game("Word", 10, 2);
        assert_eq!(game.guess("é"), GuessOutcome::Wrong);
        assert_eq!(game.guess("é"), GuessOutcome::Repeated);
    }

    #[test]
    fn won_on_last_life() {
        let mut game = create_game("ab", 1, 0);
        game.guess("a");
        game.guess("b");
        assert_eq!(game.status(), Status::Won);
    }

    #[test]
    fn lost_with_letters_left() {
        let mut game = create_game("Inverness", 1, 0);
        game.guess("i");
        assert_eq!(game.guess("z"), GuessOutcome::Wrong);
        assert_eq!(game.status(), Status::Lost);
        assert!(game.n_remaining() > 0);
    }

    #[test]
    fn no_guesses_after_game_over() {
        let mut game = create_game("Word", 1, 2);
        game.guess("x");
        assert_eq!(game.guess("w"), GuessOutcome::Ignored);
        assert_eq!(game.guesses(), 1);
    }

    #[test]
    fn hint_reveals_remaining_letter() {
        let mut game = create_game("a", 10, 2);
        let mut rng = rng();
        assert_eq!(game.hint(&mut rng), Hint::Reveal('a'));
        assert_eq!(game.hints(), 1);
        assert_eq!(game.n_remaining(), 1);
        assert_eq!(game.guess("a"), GuessOutcome::Correct);
        assert_eq!(game.status(), Status::Won);
        assert_eq!(game.guesses(), 1);
    }

    #[test]
    fn hints_only_reveal_hidden_letters() {
        let mut game = create_game("Edinburgh", 10, 50);
        game.guess("e");
        game.guess("d");
        let mut rng = rng();
        for _ in 0..50 {
            match game.hint(&mut rng) {
                Hint::Reveal(letter) => assert!(game.letters().is_remaining(letter)),
                Hint::Exhausted => panic!("hints left"),
            }
        }
        assert_eq!(game.hints(), 0);
        assert_eq!(game.n_remaining(), 7);
    }

    #[test]
    fn run_out_of_hints() {
        let mut game = create_game("a", 10, 2);
        let mut rng = rng();
        let before = game.letters().clone();
        assert!(matches!(game.play("?", &mut rng), Turn::Hint(Hint::Reveal('a'))));
        assert!(matches!(game.play("?", &mut rng), Turn::Hint(Hint::Reveal('a'))));
        assert_eq!(game.play("?", &mut rng), Turn::Hint(Hint::Exhausted));
        assert_eq!(game.play("?", &mut rng), Turn::Hint(Hint::Exhausted));
        assert_eq!(game.hints(), 0);
        assert_eq!(game.letters(), &before);
        assert_eq!(game.guesses(), 0);
    }

    #[test]
    fn question_mark_in_phrase_guess() {
        let mut game = create_game("Word", 10, 2);
        assert_eq!(game.play("??", &mut rng()), Turn::Guess(GuessOutcome::Wrong));
        assert_eq!(game.hints(), 2);
    }

    #[test]
    fn invariant_holds_for_any_guess_sequence() {
        let mut game = create_game("Dumfries and Galloway", 30, 0);
        for guess in "The quick brown fox jumps over the lazy dog"
            .split("")
            .chain(["dumfries", "x"])
        {
            game.guess(guess);
            let letters = game.letters();
            for letter in letters.remaining() {
                assert!(!letters.is_guessed(letter));
            }
        }
    }
}
