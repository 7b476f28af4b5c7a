use api_cli_codegen::schema_from_sample;
use api_cli_core::CoreError;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::interactive;

/// Where the JSON sample comes from
#[derive(Debug, Clone)]
pub enum SampleSource {
    Prompt,
    Inline(String),
    /// `-` reads stdin
    File(PathBuf),
}

impl SampleSource {
    pub fn from_args(input: Option<String>, file: Option<PathBuf>) -> Self {
        match (input, file) {
            (Some(text), _) => SampleSource::Inline(text),
            (None, Some(path)) => SampleSource::File(path),
            (None, None) => SampleSource::Prompt,
        }
    }

    fn read(self) -> Result<String, CoreError> {
        match self {
            SampleSource::Prompt => interactive::prompt_json_sample(),
            SampleSource::Inline(text) => Ok(text),
            SampleSource::File(path) if path.as_os_str() == "-" => {
                Ok(io::read_to_string(io::stdin())?)
            }
            SampleSource::File(path) => Ok(fs::read_to_string(path)?),
        }
    }
}

/// Generate a JSON schema from a JSON object and print it to stdout
pub fn run(source: SampleSource) -> Result<(), CoreError> {
    tracing::debug!(?source, "reading JSON sample");
    let sample = source.read()?;
    let schema = schema_from_sample(&sample)?;
    println!("{}", schema);
    Ok(())
}
