use rustc_hash::FxHashSet;

/// Spaces are shown from the start and never need guessing.
pub const SPACE: char = ' ';

/// Shown in place of letters that have not been guessed yet.
pub const PLACEHOLDER: char = '-';

/// Fold a character so that guesses compare case-insensitively.
pub fn fold(c: char) -> char {
    c.to_ascii_lowercase()
}

/// The guessed and still hidden letters of one phrase.
///
/// Both sets hold folded characters and never overlap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Letters {
    guessed: FxHashSet<char>,
    remaining: FxHashSet<char>,
}

impl Letters {
    pub fn new(phrase: &str) -> Self {
        let mut remaining: FxHashSet<char> = phrase.chars().map(fold).collect();
        remaining.remove(&SPACE);

        let mut guessed = FxHashSet::default();
        guessed.insert(SPACE);

        Letters { guessed, remaining }
    }

    pub fn is_guessed(&self, c: char) -> bool {
        self.guessed.contains(&fold(c))
    }

    #[cfg(test)]
    pub(crate) fn is_remaining(&self, c: char) -> bool {
        self.remaining.contains(&fold(c))
    }

    /// Record a guessed letter.
    ///
    /// Returns `None` for a letter that was already guessed, otherwise
    /// whether the letter was still hidden in the phrase.
    pub fn guess(&mut self, c: char) -> Option<bool> {
        let c = fold(c);
        if !self.guessed.insert(c) {
            return None;
        }
        Some(self.remaining.remove(&c))
    }

    /// Move every hidden letter over to the guessed ones.
    pub fn reveal_all(&mut self) {
        self.guessed.extend(self.remaining.drain());
    }

    pub fn n_remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }

    /// The hidden letters, sorted.
    pub fn remaining(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.remaining.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Render the phrase with hidden letters replaced by [`PLACEHOLDER`].
    ///
    /// # Example
    ///
    /// ```
    /// use hangman::game::letters::Letters;
    /// let mut letters = Letters::new("St Andrews");
    /// letters.guess('s');
    /// assert_eq!(letters.mask("St Andrews"), "S- ------s");
    /// ```
    pub fn mask(&self, phrase: &str) -> String {
        phrase
            .chars()
            .map(|c| match self.is_guessed(c) {
                true => c,
                false => PLACEHOLDER,
            })
            .collect()
    }
}
