//! Export of speeches with unusually high feature values, for manual inspection.
use std::path::Path;

use log::info;

use crate::error::Error;
use crate::metrics::SpeechMetric;
use crate::speech::Speech;

/// Write every speech whose `metric` value is above `threshold` to a CSV file at `dst`.
///
/// Columns: `id, role, speaker, year, <metric name>, content, lemmatized_content`.
/// Returns the number of exported speeches.
pub fn export(
    speeches: &[Speech],
    metric: &dyn SpeechMetric,
    threshold: f64,
    dst: &Path,
) -> Result<usize, Error> {
    let name = metric.name();
    let mut out = csv::Writer::from_path(dst)?;
    out.write_record([
        "id",
        "role",
        "speaker",
        "year",
        name.as_str(),
        "content",
        "lemmatized_content",
    ])?;

    let mut nb_outliers = 0;
    for speech in speeches {
        let value = match metric.measure(speech) {
            Some(v) if v > threshold => v,
            _ => continue,
        };

        out.write_record([
            speech.id.clone(),
            u8::from(speech.role).to_string(),
            speech.speaker.clone().unwrap_or_default(),
            speech.year.map(|y| y.to_string()).unwrap_or_default(),
            value.to_string(),
            speech.content.clone().unwrap_or_default(),
            speech.lemmatized_content.clone().unwrap_or_default(),
        ])?;
        nb_outliers += 1;
    }
    out.flush()?;

    info!(
        "[{}] {} speeches above {} written to {:?}",
        name, nb_outliers, threshold, dst
    );
    Ok(nb_outliers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::CompoundWords;
    use crate::speech::Role;

    #[test]
    fn export_above_threshold() {
        let mut speaker_speech = Speech::new("b", Some(2001))
            .with_content("Talousarvio")
            .with_lemmatized_content("talous#arvio");
        speaker_speech.role = Role::Speaker;
        speaker_speech.speaker = Some("Puhemies".to_string());

        let speeches = vec![
            Speech::new("a", Some(2000)).with_lemmatized_content("koira kissa"),
            speaker_speech,
            Speech::new("c", None),
        ];

        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("outliers.csv");
        let n = export(&speeches, &CompoundWords, 0.5, &dst).unwrap();
        assert_eq!(n, 1);

        let mut reader = csv::Reader::from_path(&dst).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.get(4), Some("compound_words"));

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "b");
        assert_eq!(&rows[0][1], "2");
        assert_eq!(&rows[0][2], "Puhemies");
        assert_eq!(&rows[0][3], "2001");
        assert_eq!(&rows[0][4], "1");
        assert_eq!(&rows[0][6], "talous#arvio");
    }
}
