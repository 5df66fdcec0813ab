//! Label templates: literal text with `{capture}` / `{capture:spec}`
//! placeholders. `{{` and `}}` stand for literal braces.

use std::fmt;

use crate::bytes::{render_bytes, ByteFormat};

/// Failure to parse or render a label template.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LabelError {
    #[error("unclosed `{{` at offset {offset}")]
    UnclosedPlaceholder { offset: usize },
    #[error("single `}}` at offset {offset}; write `}}}}` for a literal brace")]
    UnmatchedBrace { offset: usize },
    #[error("empty placeholder at offset {offset}")]
    EmptyPlaceholder { offset: usize },
    #[error("unknown format spec `{spec}` for capture `{name}`")]
    UnknownSpec { name: String, spec: String },
    #[error("no capture named `{name}`")]
    UnknownCapture { name: String },
}

/// One piece of a parsed label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    Literal(String),
    Placeholder { name: String, format: ByteFormat },
}

/// A parsed label, ready to render against a candidate's captures.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LabelTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl LabelTemplate {
    pub fn parse(source: &str) -> Result<Self, LabelError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            let doubled = chars.peek().is_some_and(|&(_, next)| next == ch);
            match ch {
                '{' | '}' if doubled => {
                    chars.next();
                    literal.push(ch);
                }
                '}' => return Err(LabelError::UnmatchedBrace { offset }),
                '{' => {
                    let body_start = offset + 1;
                    let Some(len) = source[body_start..].find('}') else {
                        return Err(LabelError::UnclosedPlaceholder { offset });
                    };
                    let body = &source[body_start..body_start + len];
                    if body.contains('{') {
                        return Err(LabelError::UnclosedPlaceholder { offset });
                    }
                    // Skip the body and its closing brace.
                    for _ in 0..=body.chars().count() {
                        chars.next();
                    }

                    let (name, spec) = body.split_once(':').unwrap_or((body, ""));
                    if name.is_empty() {
                        return Err(LabelError::EmptyPlaceholder { offset });
                    }
                    let format =
                        ByteFormat::from_spec(spec).ok_or_else(|| LabelError::UnknownSpec {
                            name: name.to_owned(),
                            spec: spec.to_owned(),
                        })?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder {
                        name: name.to_owned(),
                        format,
                    });
                }
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(LabelTemplate {
            source: source.to_owned(),
            segments,
        })
    }

    /// The label text as written in the grammar.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Capture names referenced by placeholders, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder { name, .. } => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Check that every placeholder names one of `captures`.
    pub fn check_captures(&self, captures: &[&str]) -> Result<(), LabelError> {
        match self.placeholders().find(|name| !captures.contains(name)) {
            Some(name) => Err(LabelError::UnknownCapture {
                name: name.to_owned(),
            }),
            None => Ok(()),
        }
    }

    /// Render the label, fetching capture buffers through `lookup`.
    pub fn render<'a, F>(&self, lookup: F) -> Result<String, LabelError>
    where
        F: Fn(&str) -> Option<&'a [u8]>,
    {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder { name, format } => {
                    let bytes = lookup(name).ok_or_else(|| LabelError::UnknownCapture {
                        name: name.clone(),
                    })?;
                    out.push_str(&render_bytes(bytes, *format));
                }
            }
        }
        Ok(out)
    }
}

impl fmt::Display for LabelTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
