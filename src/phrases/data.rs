use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{self, prelude::*, BufReader};
use std::path::Path;

use super::Error;

pub static COUNTRIES: [&str; 15] = [
    "Scotland",
    "England",
    "Wales",
    "Northern Ireland",
    "Ireland",
    "France",
    "Germany",
    "Netherlands",
    "Spain",
    "Portugal",
    "Belgium",
    "Luxembourg",
    "Switzerland",
    "Italy",
    "Greece",
];

pub static COUNTIES: [&str; 9] = [
    "Argyll and Bute",
    "Caithness",
    "Kingdom of Fife",
    "East Lothian",
    "Highland",
    "Dumfries and Galloway",
    "Renfrewshire",
    "Scottish Borders",
    "Perth and Kinross",
];

pub static CITIES: [&str; 10] = [
    "St Andrews",
    "Edinburgh",
    "Glasgow",
    "Kirkcaldy",
    "Perth",
    "Dundee",
    "Stirling",
    "Inverness",
    "Aberdeen",
    "Falkirk",
];

/// Read a phrase source, one phrase per line.
///
/// Lines are trimmed and repeated lines dropped, first occurrence wins.
pub fn import(path: &Path) -> Result<Vec<String>, Error> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::Missing {
            path: path.to_path_buf(),
        },
        _ => Error::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    read_phrases(BufReader::new(file)).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_phrases(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut phrases = vec![];

    for line in reader.lines() {
        let line = line?;
        let phrase = line.trim();
        if seen.insert(phrase.to_owned()) {
            phrases.push(phrase.to_owned());
        }
    }
    Ok(phrases)
}
