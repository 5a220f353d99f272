use std::env;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;

use muhkeus::{
    display_form, find_best_pairs_par, normalize, unique_words, word_profiles, MuhkeusError,
};

fn main() {
    let started = Instant::now();
    // Failed runs report on stderr and exit clean; there is no
    // distinguishing exit code.
    if let Err(err) = run(started) {
        eprintln!("{err:#}");
    }
}

fn run(started: Instant) -> Result<()> {
    let path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or(MuhkeusError::MissingPath)?;
    let raw = read_corpus(&path)?;

    let text = normalize(&raw);
    let words = unique_words(&text);
    let profiles = word_profiles(&words);
    let best = find_best_pairs_par(&profiles)?;
    let searched = started.elapsed();

    for &(i, j) in &best.pairs {
        println!("{}\t{}", display_form(&words[i]), display_form(&words[j]));
    }

    eprintln!("search finished in {searched:?}");
    eprintln!("whole run took {:?}", started.elapsed());
    Ok(())
}

/// Read the whole corpus as raw bytes, sizing the buffer from file
/// metadata up front.
fn read_corpus(path: &Path) -> Result<Vec<u8>, MuhkeusError> {
    let io_err = |source| MuhkeusError::Io {
        path: path.to_owned(),
        source,
    };
    let len = fs::metadata(path).map_err(&io_err)?.len();
    let mut raw = Vec::with_capacity(len as usize);
    File::open(path)
        .map_err(&io_err)?
        .read_to_end(&mut raw)
        .map_err(&io_err)?;
    Ok(raw)
}
