//! Annotated documents, as returned by the annotation engine.
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Upos {
    Adj,
    Adp,
    Adv,
    Aux,
    CConj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    PropN,
    Punct,
    SConj,
    Sym,
    Verb,
    X,
}

impl Upos {
    /// Every tag of the closed set, in tag order.
    pub const ALL: [Upos; 17] = [
        Upos::Adj,
        Upos::Adp,
        Upos::Adv,
        Upos::Aux,
        Upos::CConj,
        Upos::Det,
        Upos::Intj,
        Upos::Noun,
        Upos::Num,
        Upos::Part,
        Upos::Pron,
        Upos::PropN,
        Upos::Punct,
        Upos::SConj,
        Upos::Sym,
        Upos::Verb,
        Upos::X,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Upos::Adj => "ADJ",
            Upos::Adp => "ADP",
            Upos::Adv => "ADV",
            Upos::Aux => "AUX",
            Upos::CConj => "CCONJ",
            Upos::Det => "DET",
            Upos::Intj => "INTJ",
            Upos::Noun => "NOUN",
            Upos::Num => "NUM",
            Upos::Part => "PART",
            Upos::Pron => "PRON",
            Upos::PropN => "PROPN",
            Upos::Punct => "PUNCT",
            Upos::SConj => "SCONJ",
            Upos::Sym => "SYM",
            Upos::Verb => "VERB",
            Upos::X => "X",
        }
    }
}

impl FromStr for Upos {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Upos::ALL
            .iter()
            .find(|tag| tag.as_str() == s)
            .copied()
            .ok_or_else(|| Error::Conllu(format!("unknown UPOS tag {:?}", s)))
    }
}

impl fmt::Display for Upos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single syntactic word.
///
/// `id` is 1-based within its sentence, and `head` points to the governor's `id`
/// (`0` for the sentence root).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub id: usize,
    pub lemma: String,
    pub upos: Upos,
    pub head: usize,
}

impl Word {
    pub fn new(id: usize, lemma: impl Into<String>, upos: Upos, head: usize) -> Self {
        Self {
            id,
            lemma: lemma.into(),
            upos,
            head,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    words: Vec<Word>,
}

impl Sentence {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Id of the first word governed by nothing, if any.
    pub fn root(&self) -> Option<usize> {
        self.words.iter().find(|w| w.head == 0).map(|w| w.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    sentences: Vec<Sentence>,
}

impl Document {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Iterates over the words of every sentence, in order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.sentences.iter().flat_map(|s| s.words.iter())
    }

    pub fn word_count(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upos_roundtrip_all_tags() {
        for tag in Upos::ALL {
            assert_eq!(tag.as_str().parse::<Upos>().unwrap(), tag);
        }
    }

    #[test]
    fn upos_unknown() {
        assert!("NOUNS".parse::<Upos>().is_err());
        assert!("noun".parse::<Upos>().is_err());
    }

    #[test]
    fn sentence_root() {
        let s = Sentence::new(vec![
            Word::new(1, "koira", Upos::Noun, 2),
            Word::new(2, "haukkua", Upos::Verb, 0),
        ]);
        assert_eq!(s.root(), Some(2));
        assert_eq!(Sentence::default().root(), None);
    }

    #[test]
    fn document_words() {
        let d = Document::new(vec![
            Sentence::new(vec![Word::new(1, "a", Upos::X, 0)]),
            Sentence::new(vec![
                Word::new(1, "b", Upos::X, 0),
                Word::new(2, "c", Upos::X, 1),
            ]),
        ]);
        assert_eq!(d.word_count(), 3);
        let lemmas: Vec<_> = d.words().map(|w| w.lemma.as_str()).collect();
        assert_eq!(lemmas, vec!["a", "b", "c"]);
    }
}
