use std::io;

use hangman::logging;

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    hangman::run(std::env::args_os(), io::stdin().lock(), io::stdout().lock())
}
