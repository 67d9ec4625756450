pub mod category;
pub mod data;

pub use category::Category;

use rand::seq::SliceRandom;
use rand::Rng;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The phrase source {} was not found.", path.display())]
    Missing { path: PathBuf },
    #[error("The phrase source was empty.")]
    Empty { path: PathBuf },
    #[error("Failed to read the phrase source {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Category {0} not recognized.")]
    UnrecognizedCategory(i64),
    #[error("No custom phrases are provided.")]
    NoCustomPhrases,
}

/// Where the phrase of each game comes from.
#[derive(Debug, Clone, Default)]
pub struct Phrases {
    /// Phrases from the user's file, if one was loaded
    custom: Option<Vec<String>>,
}

impl Phrases {
    /// Only the built-in categories
    pub fn built_in() -> Self {
        Phrases { custom: None }
    }

    pub fn with_custom(custom: Vec<String>) -> Self {
        Phrases {
            custom: Some(custom),
        }
    }

    /// Load the custom category from a phrase source file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let custom = data::import(path)?;
        if custom.is_empty() {
            return Err(Error::Empty {
                path: path.to_path_buf(),
            });
        }
        info!(path = %path.display(), phrases = custom.len(), "loaded phrase source");
        Ok(Phrases::with_custom(custom))
    }

    pub fn has_custom(&self) -> bool {
        self.custom.is_some()
    }

    /// The categories a player may pick from, in menu order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(|c| *c != Category::Custom || self.has_custom())
    }

    fn list(&self, category: Category) -> Option<Vec<&str>> {
        match category.built_in() {
            Some(list) => Some(list.to_vec()),
            None => self
                .custom
                .as_ref()
                .map(|custom| custom.iter().map(String::as_str).collect()),
        }
    }

    /// Pick a random phrase from a category.
    ///
    /// # Example
    ///
    /// ```
    /// use hangman::phrases::{Category, Phrases};
    /// let phrases = Phrases::with_custom(vec!["Word".to_string()]);
    /// let mut rng = rand::thread_rng();
    /// assert_eq!(phrases.pick(Category::Custom, &mut rng).unwrap(), "Word");
    /// assert!(Phrases::built_in().pick(Category::Custom, &mut rng).is_err());
    /// ```
    pub fn pick<R: Rng + ?Sized>(&self, category: Category, rng: &mut R) -> Result<&str, Error> {
        let list = self.list(category).ok_or(Error::NoCustomPhrases)?;
        let phrase = list.choose(rng).copied().ok_or(Error::NoCustomPhrases)?;
        debug!(category = category.name(), "picked phrase");
        Ok(phrase)
    }

    /// Same as [`Phrases::pick`], starting from the id the player typed.
    pub fn pick_by_id<R: Rng + ?Sized>(&self, id: i64, rng: &mut R) -> Result<&str, Error> {
        let category = Category::from_id(id).ok_or(Error::UnrecognizedCategory(id))?;
        self.pick(category, rng)
    }
}
