//! Analyzer settings.
//!
//! The host plugin exposes three settings: where the pattern grammar comes
//! from (inline text or a file), and which upstream analyzer feeds it. On
//! the command line they are `--pattern=<text>` or `--pattern-file=<path>`,
//! and `--input=<kind>`, with [`INPUT_ENV`] as a fallback for the input
//! kind.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::{ExtractError, InputKind};

/// Environment variable naming the default input kind.
pub const INPUT_ENV: &str = "SIFT_INPUT";

/// Where the pattern grammar comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternSource {
    Text(String),
    File(PathBuf),
}

impl PatternSource {
    /// Name used in syntax error messages.
    pub fn name(&self) -> String {
        match self {
            PatternSource::Text(_) => "<pattern>".to_owned(),
            PatternSource::File(path) => path.display().to_string(),
        }
    }

    pub fn load(&self) -> io::Result<String> {
        match self {
            PatternSource::Text(text) => Ok(text.clone()),
            PatternSource::File(path) => fs::read_to_string(path),
        }
    }
}

/// Invalid command-line settings.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("no pattern given; use --pattern=<text> or --pattern-file=<path>")]
    MissingPattern,
    #[error("--pattern and --pattern-file cannot be combined")]
    ConflictingPattern,
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error(transparent)]
    Input(#[from] ExtractError),
}

/// Settings for one `run`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub source: PatternSource,
    pub input: InputKind,
    /// Frames file; `None` reads standard input.
    pub frames: Option<PathBuf>,
}

impl Settings {
    /// Parse `run` arguments. `env_input` is the value of [`INPUT_ENV`], if
    /// set; an explicit `--input` wins over it.
    pub fn from_args<S: AsRef<str>>(
        args: &[S],
        env_input: Option<&str>,
    ) -> Result<Settings, SettingsError> {
        let mut source = None;
        let mut input = None;
        let mut frames = None;

        for arg in args.iter().map(AsRef::as_ref) {
            let next_source = if let Some(text) = arg.strip_prefix("--pattern=") {
                Some(PatternSource::Text(text.to_owned()))
            } else if let Some(path) = arg.strip_prefix("--pattern-file=") {
                Some(PatternSource::File(PathBuf::from(path)))
            } else {
                None
            };

            if let Some(next) = next_source {
                if source.is_some() {
                    return Err(SettingsError::ConflictingPattern);
                }
                source = Some(next);
            } else if let Some(name) = arg.strip_prefix("--input=") {
                input = Some(InputKind::parse(name)?);
            } else if arg == "-" && frames.is_none() {
                frames = Some(None);
            } else if arg.starts_with('-') {
                return Err(SettingsError::UnknownOption(arg.to_owned()));
            } else if frames.is_none() {
                frames = Some(Some(PathBuf::from(arg)));
            } else {
                return Err(SettingsError::UnexpectedArgument(arg.to_owned()));
            }
        }

        let input = match (input, env_input) {
            (Some(kind), _) => kind,
            (None, Some(name)) => InputKind::parse(name)?,
            (None, None) => InputKind::default(),
        };

        Ok(Settings {
            source: source.ok_or(SettingsError::MissingPattern)?,
            input,
            frames: frames.flatten(),
        })
    }
}

#[cfg(test)]
mod tests;
