//! # Plenum
//!
//! Diachronic linguistic features of parliamentary speeches.
//!
//! ## Getting started
//!
//! ```sh
//! plenum 0.1.0
//! diachronic linguistic features of parliamentary speeches.
//!
//! USAGE:
//!     plenum <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     extract      Extract every feature into the store
//!     help         Prints this message or the help of the given subcommand(s)
//!     outliers     Export speeches with unusually high feature values
//!     summarize    Correlate stored features with time
//! ```
//!
//! Annotation-based features need an external annotator that reads raw text on stdin
//! and writes CoNLL-U on stdout:
//!
//! ```sh
//! RUST_LOG=info plenum extract speeches/ -n 1000 --parser ./annotate.sh --parser-arg fi
//! ```
use plenum::error::Error;
use plenum::metrics::Ttr;
use plenum::pipelines::{Extraction, Outliers, Pipeline, Summary};
use plenum::sampling::Sampler;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Plenum::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Plenum::Extract(e) => {
            let sampler = Sampler::new(e.sample_size, e.seed);
            let ttr = Ttr::new(e.ttr_window, e.ttr_draws, e.seed);
            let p = Extraction::new(e.src, e.store, sampler, ttr, e.parser.annotator());
            let saved = p.run()?;
            info!("saved features: {:?}", saved);
        }

        cli::Plenum::Summarize(s) => {
            let p = Summary::new(s.store, s.dst);
            p.run()?;
        }

        cli::Plenum::Outliers(o) => {
            let annotator = o.parser.annotator();
            let p = Outliers::new(o.src, o.feature, o.threshold, o.dst, annotator);
            p.run()?;
        }
    };
    Ok(())
}
