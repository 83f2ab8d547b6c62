/*! Morphological features

Compounds are spotted through the lemmatizer, which marks the boundaries between
compound parts with [COMPOUND_SEPARATOR] (`laki#ehdotus`).
!*/
use super::SpeechMetric;
use crate::annotation::Upos;
use crate::speech::Speech;

pub const COMPOUND_SEPARATOR: char = '#';

/// Share of compound words in a lemmatized text.
pub fn compound_ratio(lemmatized: &str) -> Option<f64> {
    let (words, compounds) = lemmatized
        .split_whitespace()
        .fold((0usize, 0usize), |(w, c), word| {
            (w + 1, c + usize::from(word.contains(COMPOUND_SEPARATOR)))
        });

    if words == 0 {
        return None;
    }
    Some(compounds as f64 / words as f64)
}

/// Mean ratio between the length of original words and of their lemmas.
///
/// Words are aligned by position: if the word counts differ, there is no result.
/// Pairs with an empty lemma are ignored.
pub fn orig_lemma_ratio(original: &str, lemmatized: &str) -> Option<f64> {
    let lemmatized = lemmatized.replace(COMPOUND_SEPARATOR, "");
    let orig_words: Vec<&str> = original.split_whitespace().collect();
    let lemm_words: Vec<&str> = lemmatized.split_whitespace().collect();

    if orig_words.len() != lemm_words.len() {
        return None;
    }

    let ratios: Vec<f64> = orig_words
        .iter()
        .zip(lemm_words.iter())
        .filter_map(|(orig, lemm)| {
            let lemm_len = lemm.chars().count();
            if lemm_len == 0 {
                None
            } else {
                Some(orig.chars().count() as f64 / lemm_len as f64)
            }
        })
        .collect();

    if ratios.is_empty() {
        return None;
    }
    Some(ratios.iter().sum::<f64>() / ratios.len() as f64)
}

/// Share of compound words per speech (on lemmatized content).
#[derive(Default)]
pub struct CompoundWords;

impl SpeechMetric for CompoundWords {
    fn name(&self) -> String {
        "compound_words".to_string()
    }

    fn measure(&self, speech: &Speech) -> Option<f64> {
        compound_ratio(speech.lemmatized_content.as_deref()?)
    }
}

/// Share of compounds among the nouns of a speech (on annotation).
#[derive(Default)]
pub struct NounCompounds;

impl SpeechMetric for NounCompounds {
    fn name(&self) -> String {
        "noun_compound_words".to_string()
    }

    fn measure(&self, speech: &Speech) -> Option<f64> {
        let doc = speech.annotation.as_ref()?;
        let (nouns, compounds) = doc
            .words()
            .filter(|w| w.upos == Upos::Noun)
            .fold((0usize, 0usize), |(n, c), w| {
                (n + 1, c + usize::from(w.lemma.contains(COMPOUND_SEPARATOR)))
            });

        if nouns == 0 {
            return None;
        }
        Some(compounds as f64 / nouns as f64)
    }

    fn needs_annotation(&self) -> bool {
        true
    }
}

/// Original/lemma length ratio per speech, on cleaned and lemmatized content.
#[derive(Default)]
pub struct LengthRatio;

impl SpeechMetric for LengthRatio {
    fn name(&self) -> String {
        "length_ratios".to_string()
    }

    fn measure(&self, speech: &Speech) -> Option<f64> {
        orig_lemma_ratio(
            speech.clean_content.as_deref()?,
            speech.lemmatized_content.as_deref()?,
        )
    }
}
