//! Part-of-speech proportions.
use super::SpeechMetric;
use crate::annotation::Upos;
use crate::speech::Speech;

/// Share of the words of a speech whose tag belongs to a set of tags.
pub struct PosProportion {
    tags: Vec<Upos>,
}

impl PosProportion {
    pub fn new(tags: Vec<Upos>) -> Self {
        Self { tags }
    }

    pub fn tags(&self) -> &[Upos] {
        &self.tags
    }

    /// The default tag sets: verbs, nouns, pronouns and conjunctions.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(vec![Upos::Verb]),
            Self::new(vec![Upos::Noun]),
            Self::new(vec![Upos::Pron]),
            Self::new(vec![Upos::CConj, Upos::SConj]),
        ]
    }
}

impl SpeechMetric for PosProportion {
    /// Space-joined tags, e.g. `CCONJ SCONJ`.
    fn name(&self) -> String {
        self.tags
            .iter()
            .map(Upos::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn measure(&self, speech: &Speech) -> Option<f64> {
        let doc = speech.annotation.as_ref()?;
        let total = doc.word_count();
        if total == 0 {
            return None;
        }
        let matching = doc.words().filter(|w| self.tags.contains(&w.upos)).count();
        Some(matching as f64 / total as f64)
    }

    fn needs_annotation(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{Document, Sentence, Word};

    fn speech(tags: &[Upos]) -> Speech {
        let words = tags
            .iter()
            .enumerate()
            .map(|(i, t)| Word::new(i + 1, "x", *t, 0))
            .collect();
        Speech::new("0", Some(2010)).with_annotation(Document::new(vec![Sentence::new(words)]))
    }

    #[test]
    fn names() {
        let names: Vec<String> = PosProportion::defaults().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["VERB", "NOUN", "PRON", "CCONJ SCONJ"]);
    }

    #[test]
    fn proportion() {
        let s = speech(&[Upos::Noun, Upos::Verb, Upos::Noun, Upos::Punct]);
        assert_eq!(PosProportion::new(vec![Upos::Noun]).measure(&s), Some(0.5));
        assert_eq!(
            PosProportion::new(vec![Upos::CConj, Upos::SConj]).measure(&s),
            Some(0.0)
        );
    }

    #[test]
    fn partition_sums_to_one() {
        let s = speech(&[
            Upos::Noun,
            Upos::Verb,
            Upos::Adj,
            Upos::Punct,
            Upos::Noun,
            Upos::X,
            Upos::CConj,
        ]);
        let sum: f64 = Upos::ALL
            .iter()
            .map(|t| PosProportion::new(vec![*t]).measure(&s).unwrap())
            .sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_speech() {
        let s = speech(&[]);
        assert_eq!(PosProportion::new(vec![Upos::Noun]).measure(&s), None);
        let unannotated = Speech::new("1", Some(2010));
        assert_eq!(PosProportion::new(vec![Upos::Noun]).measure(&unannotated), None);
    }
}
