/*! Speech ingestion

Loads speeches from a folder of CSV files. Each row needs at least
`content`, `date` (`d.m.yyyy`) and `speech` (free-form speaker header).
Optional columns: `id`, `speaker`, `clean_content`, `lemmatized_content`.

Missing cleaned or lemmatized versions are computed here (lemmatization needs an [Annotator]).
!*/
use std::path::Path;

use itertools::Itertools;
use log::{debug, error, info, warn};
use rayon::prelude::*;
use serde::Deserialize;

use crate::annotation::Annotator;
use crate::error::Error;
use crate::speech::{Role, Speech};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Row {
    id: Option<String>,
    content: Option<String>,
    date: Option<String>,
    speech: Option<String>,
    speaker: Option<String>,
    clean_content: Option<String>,
    lemmatized_content: Option<String>,
}

/// Year of a `d.m.yyyy` date (the last dot-separated component).
pub fn parse_year(date: &str) -> Option<i32> {
    date.trim().rsplit('.').next()?.trim().parse().ok()
}

/// Lowercase, keep only letters (including å, ä, ö) and digits, collapse whitespace.
pub fn clean_text(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || "åäöÅÄÖ".contains(c) {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .join(" ")
        .to_lowercase()
}

impl Row {
    fn into_speech(self, default_id: String) -> Speech {
        let clean_content = self
            .clean_content
            .or_else(|| self.content.as_deref().map(clean_text));

        Speech {
            id: self.id.unwrap_or(default_id),
            year: self.date.as_deref().and_then(parse_year),
            role: self
                .speech
                .as_deref()
                .map(Role::from_header)
                .unwrap_or_default(),
            speaker: self.speaker,
            content: self.content,
            clean_content,
            lemmatized_content: self.lemmatized_content,
            annotation: None,
        }
    }
}

/// Read the speeches of a single CSV file.
///
/// Rows that can't be read are logged and skipped.
pub fn load_file(path: &Path) -> Result<Vec<Speech>, Error> {
    let mut reader = csv::Reader::from_path(path)?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut speeches = Vec::new();
    for (idx, row) in reader.deserialize::<Row>().enumerate() {
        match row {
            Ok(row) => speeches.push(row.into_speech(format!("{}:{}", stem, idx))),
            Err(e) => warn!("{:?}: skipping row {}: {}", path, idx, e),
        }
    }
    Ok(speeches)
}

/// Read every CSV file of `dir`.
///
/// Fails if `dir` does not exist. Unreadable files are logged and skipped.
/// If an annotator is provided, speeches without lemmatized content get lemmatized.
pub fn load_dir(dir: &Path, annotator: Option<&Annotator>) -> Result<Vec<Speech>, Error> {
    if !dir.is_dir() {
        return Err(Error::MissingInput(dir.to_path_buf()));
    }

    let pattern = dir.join("*.csv");
    let mut speeches = Vec::new();
    for path in glob::glob(&pattern.to_string_lossy())? {
        let path = path?;
        match load_file(&path) {
            Ok(s) => {
                debug!("{:?}: {} speeches", path, s.len());
                speeches.extend(s);
            }
            Err(e) => error!("could not read {:?}: {:?}", path, e),
        }
    }
    info!("loaded {} speeches from {:?}", speeches.len(), dir);

    if let Some(annotator) = annotator {
        lemmatize_missing(&mut speeches, annotator);
    }

    Ok(speeches)
}

/// Lemmatize (concurrently) the cleaned content of speeches that have no lemmatized content.
pub fn lemmatize_missing(speeches: &mut [Speech], annotator: &Annotator) {
    let missing = speeches
        .iter()
        .filter(|s| s.lemmatized_content.is_none())
        .count();
    if missing == 0 {
        return;
    }

    info!("lemmatizing {} speeches", missing);
    speeches
        .par_iter_mut()
        .filter(|s| s.lemmatized_content.is_none())
        .for_each(|s| {
            s.lemmatized_content = s
                .clean_content
                .as_deref()
                .and_then(|text| annotator.lemmatize(text));
        });
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn years() {
        assert_eq!(parse_year("12.3.1985"), Some(1985));
        assert_eq!(parse_year("1999"), Some(1999));
        assert_eq!(parse_year(" 1.1.2001 "), Some(2001));
        assert_eq!(parse_year("12.3."), None);
        assert_eq!(parse_year("eilen"), None);
    }

    #[test]
    fn cleaning() {
        assert_eq!(
            clean_text("  Arvoisa  puhemies! Ed. Äijälä (kok.) sanoi: 5 %. "),
            "arvoisa puhemies ed äijälä kok sanoi 5"
        );
        assert_eq!(clean_text("---"), "");
    }

    #[test]
    fn missing_dir() {
        let res = load_dir(Path::new("surely/not/a/dir"), None);
        assert!(matches!(res, Err(Error::MissingInput(_))));
    }

    #[test]
    fn load() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = std::fs::File::create(dir.path().join("1985.csv")).unwrap();
        writeln!(f, "id,date,speech,speaker,content,extra").unwrap();
        writeln!(f, "a1,12.3.1985,Ed. Virtanen,Virtanen,\"Hyvä, puhe.\",x").unwrap();
        writeln!(f, "a2,13.3.1985,Puhemies,Puhemies,,x").unwrap();
        writeln!(f, "a3,huomenna,Varapuhemies,,Toinen puhe,x").unwrap();
        // not a csv file, ignored
        std::fs::write(dir.path().join("notes.txt"), "nothing").unwrap();

        let speeches = load_dir(dir.path(), None).unwrap();
        assert_eq!(speeches.len(), 3);

        assert_eq!(speeches[0].id, "a1");
        assert_eq!(speeches[0].year, Some(1985));
        assert_eq!(speeches[0].role, Role::Ordinary);
        assert_eq!(speeches[0].clean_content.as_deref(), Some("hyvä puhe"));
        assert!(speeches[0].lemmatized_content.is_none());

        assert_eq!(speeches[1].role, Role::Speaker);
        assert!(speeches[1].content.is_none());
        assert!(speeches[1].clean_content.is_none());

        assert_eq!(speeches[2].year, None);
        assert_eq!(speeches[2].role, Role::DeputySpeaker);
        assert!(speeches[2].speaker.is_none());
    }

    #[test]
    fn default_ids() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("puheet.csv"),
            "date,speech,content\n1.1.2000,Ed. A,yksi\n2.1.2000,Ed. B,kaksi\n",
        )
        .unwrap();
        let speeches = load_dir(dir.path(), None).unwrap();
        let ids: Vec<&str> = speeches.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["puheet:0", "puheet:1"]);
    }
}
