/*! CoNLL-U reading

Annotation engines (Stanza, UDPipe, Turku pipeline...) all speak CoNLL-U, so it is the
format we expect on the engine's standard output.

Only the columns we need are kept: `ID`, `LEMMA`, `UPOS` and `HEAD`.
Multi-word token ranges (`1-2`) and empty nodes (`8.1`) are skipped.
!*/
use super::document::{Document, Sentence, Word};
use crate::error::Error;

const NB_COLUMNS: usize = 10;

/// Parse a whole CoNLL-U stream into a [Document].
pub fn parse(input: &str) -> Result<Document, Error> {
    let mut sentences = Vec::new();
    let mut words = Vec::new();

    for (line_nb, line) in input.lines().enumerate() {
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() {
            if !words.is_empty() {
                sentences.push(Sentence::new(std::mem::take(&mut words)));
            }
            continue;
        }

        if line.starts_with('#') {
            continue;
        }

        if let Some(word) = parse_line(line).map_err(|e| match e {
            Error::Conllu(msg) => Error::Conllu(format!("line {}: {}", line_nb + 1, msg)),
            e => e,
        })? {
            words.push(word);
        }
    }

    // no trailing blank line
    if !words.is_empty() {
        sentences.push(Sentence::new(words));
    }

    Ok(Document::new(sentences))
}

/// Parse a word line. Returns `None` for token ranges and empty nodes.
fn parse_line(line: &str) -> Result<Option<Word>, Error> {
    let columns: Vec<&str> = line.split('\t').collect();
    if columns.len() != NB_COLUMNS {
        return Err(Error::Conllu(format!(
            "expected {} columns, got {}",
            NB_COLUMNS,
            columns.len()
        )));
    }

    let id = columns[0];
    if id.contains('-') || id.contains('.') {
        return Ok(None);
    }

    let id = id
        .parse::<usize>()
        .map_err(|e| Error::Conllu(format!("invalid id {:?}: {}", id, e)))?;
    let lemma = columns[2];
    let upos = columns[3].parse()?;
    let head = columns[6]
        .parse::<usize>()
        .map_err(|e| Error::Conllu(format!("invalid head {:?}: {}", columns[6], e)))?;

    Ok(Some(Word::new(id, lemma, upos, head)))
}
