//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use plenum::annotation::{Annotator, CommandParser};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "plenum",
    about = "diachronic linguistic features of parliamentary speeches."
)]
/// Holds every command that is callable by the `plenum` command.
pub enum Plenum {
    #[structopt(about = "Extract every feature into the store")]
    Extract(Extract),
    #[structopt(about = "Correlate stored features with time")]
    Summarize(Summarize),
    #[structopt(about = "Export speeches with unusually high feature values")]
    Outliers(Outliers),
}

#[derive(Debug, StructOpt)]
/// External annotation engine.
///
/// The program gets raw text on stdin and must write CoNLL-U on stdout.
pub struct ParserOpt {
    #[structopt(
        long = "parser",
        help = "annotation program. Without one, syntactic and part-of-speech features are skipped."
    )]
    pub program: Option<String>,
    #[structopt(
        long = "parser-arg",
        number_of_values = 1,
        allow_hyphen_values = true,
        help = "argument passed to the annotation program (repeatable)"
    )]
    pub args: Vec<String>,
}

impl ParserOpt {
    pub fn annotator(&self) -> Option<Annotator> {
        self.program.as_ref().map(|program| {
            let parser = CommandParser::new(program, &self.args);
            Annotator::new(Box::new(parser))
        })
    }
}

#[derive(Debug, StructOpt)]
pub struct Extract {
    #[structopt(parse(from_os_str), help = "folder of speech CSV files")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "store",
        default_value = "language_metrics.json"
    )]
    pub store: PathBuf,
    #[structopt(
        long = "sample-size",
        short = "n",
        help = "maximum number of speeches per year. 0 or absent means every speech."
    )]
    pub sample_size: Option<usize>,
    #[structopt(long = "seed", default_value = "42")]
    pub seed: u64,
    #[structopt(
        long = "ttr-window",
        default_value = "1000",
        help = "number of words in a TTR window"
    )]
    pub ttr_window: usize,
    #[structopt(
        long = "ttr-draws",
        default_value = "1000",
        help = "number of TTR windows per year"
    )]
    pub ttr_draws: usize,
    #[structopt(flatten)]
    pub parser: ParserOpt,
}

#[derive(Debug, StructOpt)]
pub struct Summarize {
    #[structopt(
        parse(from_os_str),
        long = "store",
        default_value = "language_metrics.json"
    )]
    pub store: PathBuf,
    #[structopt(parse(from_os_str), help = "destination CSV file")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Outliers {
    #[structopt(parse(from_os_str), help = "folder of speech CSV files")]
    pub src: PathBuf,
    #[structopt(help = "per-speech feature name (e.g. speech_length, compound_words)")]
    pub feature: String,
    #[structopt(help = "export speeches strictly above this value")]
    pub threshold: f64,
    #[structopt(parse(from_os_str), long = "dst", default_value = "outliers.csv")]
    pub dst: PathBuf,
    #[structopt(flatten)]
    pub parser: ParserOpt,
}
