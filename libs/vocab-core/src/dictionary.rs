//! Mapping of free-dictionary API responses into word drafts.
//!
//! The upstream API returns a list of entries per word. Only the first entry
//! is used; see [`map_entries`] for how its fields are chosen.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::LookupError;
use crate::types::WordDraft;

/// Cap on the number of synonyms and antonyms kept.
pub const MAX_RELATED_WORDS: usize = 5;

/// Words picked from when no word of the day exists yet.
pub const WORD_OF_THE_DAY_CANDIDATES: [&str; 10] = [
    "ephemeral",
    "serendipity",
    "ubiquitous",
    "luminescence",
    "mellifluous",
    "eloquent",
    "pernicious",
    "esoteric",
    "quintessential",
    "surreptitious",
];

/// Phonetic spelling and optional audio.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

/// One sense of a meaning.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// Definitions grouped by part of speech.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

/// A single dictionary entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

/// Placeholder image URL for a word.
///
/// `sig` varies the image returned for the same word.
pub fn placeholder_image_url(word: &str, sig: u8) -> String {
    format!(
        "https://source.unsplash.com/featured/?{}&sig={}",
        urlencoding::encode(word),
        sig
    )
}

/// Build a draft from the entries returned for `query`.
pub fn map_entries(
    query: &str,
    entries: &[DictionaryEntry],
    image_sig: u8,
) -> Result<WordDraft, LookupError> {
    let entry = entries
        .first()
        .ok_or_else(|| LookupError::NoEntries(query.to_string()))?;
    map_entry(entry, image_sig)
}

/// Build a draft from a single entry.
pub fn map_entry(entry: &DictionaryEntry, image_sig: u8) -> Result<WordDraft, LookupError> {
    let meaning = entry
        .meanings
        .iter()
        .find(|m| !m.definitions.is_empty())
        .ok_or_else(|| LookupError::NoDefinitions(entry.word.clone()))?;
    let first_definition = &meaning.definitions[0];

    let synonyms = collect_related(
        meaning
            .synonyms
            .iter()
            .chain(entry.meanings.iter().flat_map(|m| m.synonyms.iter())),
    );
    let antonyms = collect_related(
        meaning
            .antonyms
            .iter()
            .chain(entry.meanings.iter().flat_map(|m| m.antonyms.iter())),
    );

    let example = first_definition
        .example
        .clone()
        .filter(|e| !e.is_empty())
        .or_else(|| {
            entry
                .meanings
                .iter()
                .flat_map(|m| m.definitions.iter())
                .find_map(|d| d.example.clone().filter(|e| !e.is_empty()))
        })
        .unwrap_or_default();

    let phonetic = entry
        .phonetic
        .clone()
        .filter(|p| !p.is_empty())
        .or_else(|| entry.phonetics.first().and_then(|p| p.text.clone()))
        .unwrap_or_default();

    Ok(WordDraft {
        word: entry.word.clone(),
        phonetic,
        part_of_speech: meaning.part_of_speech.clone(),
        definition: first_definition.definition.clone(),
        example,
        image_url: placeholder_image_url(&entry.word, image_sig),
        synonyms,
        antonyms,
        pronunciation_url: audio_url(&entry.phonetics),
        is_word_of_the_day: false,
    })
}

/// First non-empty audio URL.
fn audio_url(phonetics: &[Phonetic]) -> String {
    phonetics
        .iter()
        .filter_map(|p| p.audio.as_deref())
        .find(|a| !a.is_empty())
        .unwrap_or_default()
        .to_string()
}

fn collect_related<'a>(words: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .filter(|w| seen.insert(*w))
        .take(MAX_RELATED_WORDS)
        .cloned()
        .collect()
}
