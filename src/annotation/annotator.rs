//! Annotation service.
//!
//! Wraps an annotation engine ([Parse]) and applies the skip policy:
//! absent or blank texts are never sent to the engine, and engine failures are
//! logged and turned into a missing annotation.
use log::{debug, error, info};
use rayon::prelude::*;

use super::document::Document;
use super::engine::Parse;
use crate::speech::Speech;

pub struct Annotator {
    engine: Box<dyn Parse>,
}

impl Annotator {
    pub fn new(engine: Box<dyn Parse>) -> Self {
        Self { engine }
    }

    /// Annotate a text, returning `None` on empty input or on engine failure.
    pub fn annotate(&self, text: Option<&str>) -> Option<Document> {
        let text = match text {
            Some(t) if !t.trim().is_empty() => t,
            _ => return None,
        };

        match self.engine.parse(text) {
            Ok(doc) => Some(doc),
            Err(e) => {
                let excerpt: String = text.chars().take(50).collect();
                error!("could not annotate {:?}...: {:?}", excerpt, e);
                None
            }
        }
    }

    /// Annotate texts concurrently.
    /// The annotation at index `i` belongs to the text at index `i`.
    pub fn annotate_all(&self, texts: &[Option<&str>]) -> Vec<Option<Document>> {
        texts.par_iter().map(|text| self.annotate(*text)).collect()
    }

    /// Fill the annotation of each speech from its raw content.
    pub fn annotate_speeches(&self, speeches: &mut [Speech]) {
        info!("annotating {} speeches", speeches.len());
        speeches.par_iter_mut().for_each(|speech| {
            speech.annotation = self.annotate(speech.content.as_deref());
        });
        let missing = speeches.iter().filter(|s| s.annotation.is_none()).count();
        if missing > 0 {
            info!("{} speeches have no annotation", missing);
        }
    }

    /// Space-joined lemmas of a text.
    pub fn lemmatize(&self, text: &str) -> Option<String> {
        let doc = self.annotate(Some(text))?;
        let lemmas: Vec<&str> = doc.words().map(|w| w.lemma.as_str()).collect();
        debug!("lemmatized {} words", lemmas.len());
        Some(lemmas.join(" "))
    }
}
