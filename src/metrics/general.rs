//! Surface features computed on cleaned text.
use super::SpeechMetric;
use crate::speech::Speech;

/// Length of the speech in characters.
///
/// Speeches longer than `max_length` are considered outliers and dropped.
pub struct SpeechLength {
    max_length: Option<usize>,
}

impl SpeechLength {
    pub fn with_max_length(max_length: Option<usize>) -> Self {
        Self { max_length }
    }
}

impl Default for SpeechLength {
    fn default() -> Self {
        Self {
            max_length: Some(60_000),
        }
    }
}

impl SpeechMetric for SpeechLength {
    fn name(&self) -> String {
        "speech_length".to_string()
    }

    fn measure(&self, speech: &Speech) -> Option<f64> {
        let length = speech.clean_content.as_deref()?.chars().count();
        match self.max_length {
            Some(max) if length > max => None,
            _ => Some(length as f64),
        }
    }
}

/// Mean word length (in characters) of a speech.
#[derive(Default)]
pub struct WordLength;

impl SpeechMetric for WordLength {
    fn name(&self) -> String {
        "word_length".to_string()
    }

    fn measure(&self, speech: &Speech) -> Option<f64> {
        let (nb_words, nb_chars) = speech
            .clean_content
            .as_deref()?
            .split_whitespace()
            .fold((0usize, 0usize), |(n, c), w| (n + 1, c + w.chars().count()));

        if nb_words == 0 {
            return None;
        }
        Some(nb_chars as f64 / nb_words as f64)
    }
}
