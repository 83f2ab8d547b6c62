/*! Aggregation store

Holds every computed feature as two named numeric arrays:
`<feature>` for the values and `<feature>_year` for the years.

The store is persisted as a single JSON object. Merging a feature only touches its two arrays,
so features computed by different runs can live in the same file.

The store is single-writer: [Store::merge_key] takes `&mut self`, and nothing guards
the file against another process doing a concurrent load/flush.
!*/
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, info};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::metrics::FeatureSeries;

const YEAR_SUFFIX: &str = "_year";

/// A stored numeric array.
///
/// Years are stored as integers, values as floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Array {
    Int(Vec<i64>),
    Float(Vec<f64>),
}

impl Array {
    fn to_floats(&self) -> Vec<f64> {
        match self {
            Array::Int(v) => v.iter().map(|x| *x as f64).collect(),
            Array::Float(v) => v.clone(),
        }
    }

    fn to_years(&self) -> Option<Vec<i32>> {
        match self {
            Array::Int(v) => v.iter().map(|x| i32::try_from(*x).ok()).collect(),
            Array::Float(v) => v
                .iter()
                .map(|x| if x.fract() == 0.0 { Some(*x as i32) } else { None })
                .collect(),
        }
    }
}

#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    arrays: BTreeMap<String, Array>,
}

impl Store {
    /// Open the store at `path`.
    /// A missing file is not an error and yields an empty store.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let arrays = match File::open(path) {
            Ok(f) => serde_json::from_reader(BufReader::new(f))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no store at {:?}, starting empty", path);
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path: path.to_path_buf(),
            arrays,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set (or replace) both arrays of a feature.
    pub fn merge_key(&mut self, key: &str, series: &FeatureSeries) {
        let values = Array::Float(series.values().to_vec());
        let years = Array::Int(series.years().iter().map(|y| i64::from(*y)).collect());

        self.arrays.insert(key.to_string(), values);
        self.arrays.insert(format!("{}{}", key, YEAR_SUFFIX), years);
    }

    /// Write the whole store.
    ///
    /// Content is first written to a sibling file that then replaces the store,
    /// so a failed write leaves the previous store intact.
    pub fn flush(&self) -> Result<(), Error> {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        {
            let mut w = BufWriter::new(File::create(&tmp)?);
            serde_json::to_writer(&mut w, &self.arrays)?;
            w.flush()?;
        }
        std::fs::rename(&tmp, &self.path)?;

        debug!("flushed {} arrays to {:?}", self.arrays.len(), self.path);
        Ok(())
    }

    /// Read back a feature.
    ///
    /// Returns `None` if one of the arrays is missing, or if they are not aligned.
    pub fn series(&self, key: &str) -> Option<FeatureSeries> {
        let values = self.arrays.get(key)?.to_floats();
        let years = self
            .arrays
            .get(&format!("{}{}", key, YEAR_SUFFIX))?
            .to_years()?;
        FeatureSeries::new(values, years)
    }

    /// Names of the stored features (keys that have a matching `_year` array).
    pub fn features(&self) -> Vec<&str> {
        self.arrays
            .keys()
            .filter(|k| self.arrays.contains_key(&format!("{}{}", k, YEAR_SUFFIX)))
            .map(String::as_str)
            .collect()
    }

    /// Raw arrays, by name.
    pub fn arrays(&self) -> &BTreeMap<String, Array> {
        &self.arrays
    }

    /// Load, merge a feature and write back.
    ///
    /// Errors are logged and not propagated: a failed merge only loses this feature.
    /// Returns whether the feature was persisted.
    pub fn merge(path: &Path, key: &str, series: &FeatureSeries) -> bool {
        let result = Self::load(path).and_then(|mut store| {
            store.merge_key(key, series);
            store.flush()
        });

        match result {
            Ok(()) => {
                info!("[{}] saved {} values", key, series.len());
                true
            }
            Err(e) => {
                error!("could not save feature {}: {:?}", key, e);
                false
            }
        }
    }
}
