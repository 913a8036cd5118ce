//! Remote word source
//!
//! Fetches five-letter candidate words from the Datamuse API and picks one
//! uniformly at random. Every failure path (transport error, bad status,
//! malformed payload, empty candidate set) collapses to a fixed fallback word;
//! a fetch problem is logged but never surfaced to the player.

use crate::core::Word;
use anyhow::{Context, Result, anyhow};
use rand::seq::IndexedRandom;
use serde::Deserialize;
use std::sync::mpsc;
use std::thread;

/// Wildcard query matching every five-letter word
const WORD_ENDPOINT: &str = "https://api.datamuse.com/words?sp=?????";

/// Word used when the remote source is unavailable
pub const FALLBACK_WORD: &str = "hello";

/// One entry of the Datamuse response body
#[derive(Debug, Deserialize)]
struct WordEntry {
    word: String,
}

/// Fetch a random solution word, falling back to [`FALLBACK_WORD`] on any failure
#[must_use]
pub fn fetch_solution() -> Word {
    match fetch_remote(WORD_ENDPOINT) {
        Ok(word) => {
            tracing::debug!(word = word.text(), "fetched solution word");
            word
        }
        Err(err) => {
            tracing::warn!("word fetch failed, using fallback: {err:#}");
            fallback_word()
        }
    }
}

/// Run [`fetch_solution`] on a background thread
///
/// The returned receiver yields exactly one word. Dropping the receiver
/// detaches an in-flight fetch: the thread's send fails silently and the
/// thread exits.
#[must_use]
pub fn spawn_fetch() -> mpsc::Receiver<Word> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let _ = tx.send(fetch_solution());
    });

    rx
}

/// The fixed fallback as a [`Word`]
///
/// # Panics
/// Will not panic - `FALLBACK_WORD` is a valid five-letter word.
#[must_use]
pub fn fallback_word() -> Word {
    Word::new(FALLBACK_WORD).expect("fallback word is valid")
}

fn fetch_remote(endpoint: &str) -> Result<Word> {
    let entries: Vec<WordEntry> = reqwest::blocking::get(endpoint)
        .and_then(reqwest::blocking::Response::error_for_status)
        .context("request failed")?
        .json()
        .context("malformed word list payload")?;

    pick_word(&entries).ok_or_else(|| anyhow!("no usable words in response"))
}

/// Select one valid word uniformly at random from the response entries
///
/// Entries that do not parse as five-letter words are skipped.
fn pick_word(entries: &[WordEntry]) -> Option<Word> {
    let candidates: Vec<Word> = entries
        .iter()
        .filter_map(|entry| Word::new(entry.word.as_str()).ok())
        .collect();

    candidates.choose(&mut rand::rng()).cloned()
}
