use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_LIVES: u32 = 10;
pub const DEFAULT_MAX_HINTS: u32 = 2;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The amount of lives must be a positive number.")]
    InvalidLives(i64),
    #[error("The amount of hints must be a non-negative number.")]
    InvalidHints(i64),
    #[error("The amount of {option} must be at most {}.", u32::MAX)]
    TooLarge { option: &'static str, value: i64 },
    #[error(transparent)]
    Parse(#[from] clap::Error),
}

/// Guess the phrase before you run out of lives
#[derive(Parser, Debug)]
#[command(version, args_override_self = true)]
pub struct Cli {
    /// Wrong guesses allowed per game
    #[arg(long, default_value_t = DEFAULT_LIVES as i64, allow_negative_numbers = true)]
    pub lives: i64,

    /// Hints available per game
    #[arg(long = "max-hints", default_value_t = DEFAULT_MAX_HINTS as i64, allow_negative_numbers = true)]
    pub max_hints: i64,

    /// Seed for picking phrases and hints
    #[arg(long)]
    pub seed: Option<u64>,

    /// File with one custom phrase per line, the last one given is used
    #[arg(value_name = "PHRASE_SOURCE", allow_hyphen_values = true)]
    pub phrase_source: Vec<PathBuf>,
}

/// Validated options, fixed for the whole session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub lives: u32,
    pub max_hints: u32,
    pub phrase_source: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            lives: DEFAULT_LIVES,
            max_hints: DEFAULT_MAX_HINTS,
            phrase_source: None,
            seed: None,
        }
    }
}

impl TryFrom<Cli> for Settings {
    type Error = Error;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.lives < 1 {
            return Err(Error::InvalidLives(cli.lives));
        }
        if cli.max_hints < 0 {
            return Err(Error::InvalidHints(cli.max_hints));
        }
        let lives = u32::try_from(cli.lives).map_err(|_| Error::TooLarge {
            option: "lives",
            value: cli.lives,
        })?;
        let max_hints = u32::try_from(cli.max_hints).map_err(|_| Error::TooLarge {
            option: "hints",
            value: cli.max_hints,
        })?;

        Ok(Settings {
            lives,
            max_hints,
            phrase_source: cli.phrase_source.into_iter().last(),
            seed: cli.seed,
        })
    }
}

/// Parse and validate the process arguments, program name first.
///
/// # Example
///
/// ```
/// use hangman::options::parse_from;
/// let settings = parse_from(["hangman", "--lives", "4", "phrases.txt"]).unwrap();
/// assert_eq!(settings.lives, 4);
/// assert_eq!(settings.max_hints, 2);
/// assert!(parse_from(["hangman", "--lives", "0"]).is_err());
/// ```
pub fn parse_from<I, T>(args: I) -> Result<Settings, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    let settings = Settings::try_from(cli)?;
    debug!(?settings, "parsed options");
    Ok(settings)
}
