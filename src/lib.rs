pub mod console;
pub mod game;
pub mod logging;
pub mod options;
pub mod phrases;
pub mod session;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::ffi::OsString;
use std::io::{BufRead, Write};
use tracing::info;

use console::Console;
use phrases::Phrases;
use session::Session;

/// Parse the arguments, load the phrase source and play until done.
///
/// Invalid options are reported on `writer` and no game is played.
/// A phrase source that is missing or empty is reported and the
/// built-in categories are used on their own.
pub fn run<I, T, R, W>(args: I, reader: R, mut writer: W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: BufRead,
    W: Write,
{
    let settings = match options::parse_from(args) {
        Ok(settings) => settings,
        Err(options::Error::Parse(err)) => {
            write!(writer, "{err}").context("Writing usage")?;
            return Ok(());
        }
        Err(err) => {
            info!(%err, "invalid options");
            writeln!(writer, "{err}").context("Writing options error")?;
            return Ok(());
        }
    };

    let phrases = match &settings.phrase_source {
        None => Phrases::built_in(),
        Some(path) => match Phrases::load(path) {
            Ok(phrases) => phrases,
            Err(err) => {
                info!(%err, "continuing without custom phrases");
                writeln!(writer, "{err}").context("Writing phrase source error")?;
                Phrases::built_in()
            }
        },
    };

    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let console = Console::new(reader, writer);
    Session::new(console, settings, phrases, rng)
        .run()
        .context("Playing on the console")
}
