/*! Linguistic annotation

The annotation engine itself (tokenizer, lemmatizer, tagger, dependency parser) is external:
it is reached through the [Parse] trait, the default implementation being [CommandParser]
that reads CoNLL-U from an annotator process.

[Annotator] is the service handle the rest of the crate uses. Build it once, pass it by reference.
!*/
mod annotator;
pub mod conllu;
mod document;
mod engine;

pub use annotator::Annotator;
pub use document::{Document, Sentence, Upos, Word};
pub use engine::{CommandParser, Parse};
