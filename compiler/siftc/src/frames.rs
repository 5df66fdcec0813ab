//! JSON Lines frame input and annotation output.
//!
//! Input, one frame per line (blank lines ignored):
//!
//! ```text
//! {"type": "data", "start_time": 0.10, "end_time": 0.11, "data": {"data": 1}}
//! ```
//!
//! Output, one annotation per line:
//!
//! ```text
//! {"type":"named","start_time":0.1,"end_time":0.21,"data":{"text":"Get Version"}}
//! {"type":"unnamed","start_time":0.3,"end_time":0.41,"data":{}}
//! ```

use std::io::{self, BufRead};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sift_eval::{Annotation, Label};

/// One frame from an upstream analyzer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Analyzer-specific frame type, e.g. `data` or `result`.
    #[serde(rename = "type")]
    pub kind: String,
    pub start_time: f64,
    pub end_time: f64,
    #[serde(default)]
    pub data: Map<String, Value>,
}

/// A frame line that could not be read.
#[derive(Debug, thiserror::Error)]
pub enum FrameReadError {
    #[error("cannot read frame at line {line}: {source}")]
    Io { line: usize, source: io::Error },
    #[error("malformed frame at line {line}: {source}")]
    Malformed {
        line: usize,
        source: serde_json::Error,
    },
}

impl FrameReadError {
    /// 1-based line number of the failing frame.
    pub fn line(&self) -> usize {
        match self {
            FrameReadError::Io { line, .. } | FrameReadError::Malformed { line, .. } => *line,
        }
    }
}

/// Iterate the frames of a JSON Lines stream.
pub fn read_frames<R: BufRead>(reader: R) -> impl Iterator<Item = Result<Frame, FrameReadError>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line_no = index + 1;
            match line {
                Err(source) => Some(Err(FrameReadError::Io {
                    line: line_no,
                    source,
                })),
                Ok(text) if text.trim().is_empty() => None,
                Ok(text) => Some(serde_json::from_str(&text).map_err(|source| {
                    FrameReadError::Malformed {
                        line: line_no,
                        source,
                    }
                })),
            }
        })
}

/// Payload of an emitted annotation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// An annotation in the host's result format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// `named` or `unnamed`.
    #[serde(rename = "type")]
    pub kind: String,
    pub start_time: f64,
    pub end_time: f64,
    pub data: AnnotationData,
}

impl From<Annotation<f64>> for AnnotationRecord {
    fn from(annotation: Annotation<f64>) -> Self {
        let (kind, text) = match annotation.label {
            Label::Named(text) => ("named", Some(text)),
            Label::Unnamed => ("unnamed", None),
        };
        AnnotationRecord {
            kind: kind.to_owned(),
            start_time: annotation.start_time,
            end_time: annotation.end_time,
            data: AnnotationData { text },
        }
    }
}

#[cfg(test)]
mod tests;
