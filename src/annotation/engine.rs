//! Annotation engine trait and the external process engine.
use std::ffi::OsString;
use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

use log::debug;

use super::conllu;
use super::document::Document;
use crate::error::Error;

/// Anything able to turn raw text into a parsed [Document]
/// (tokenization, lemmatization, POS tagging and dependency parsing).
pub trait Parse: Send + Sync {
    fn parse(&self, text: &str) -> Result<Document, Error>;
}

/// Runs an external annotator for each text.
///
/// The text is written on the process' standard input,
/// and CoNLL-U is expected on its standard output.
#[derive(Debug, Clone)]
pub struct CommandParser {
    program: OsString,
    args: Vec<OsString>,
}

impl CommandParser {
    pub fn new<I, S>(program: impl Into<OsString>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl Parse for CommandParser {
    fn parse(&self, text: &str) -> Result<Document, Error> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::Annotation(format!("could not spawn {:?}: {}", self.program, e)))?;

        // write from another thread so that a full stdout pipe can't block us
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::Annotation("no stdin on annotator process".to_string()))?;
        let input = text.to_string();
        let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child.wait_with_output()?;
        let written = writer
            .join()
            .map_err(|_| Error::Annotation("stdin writer panicked".to_string()))?;

        // a process dying early also breaks the pipe, report the exit status first
        if !output.status.success() {
            return Err(Error::Annotation(format!(
                "{:?} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        written?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!("annotator returned {} bytes", stdout.len());
        conllu::parse(&stdout)
    }
}
