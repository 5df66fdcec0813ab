//! Grammar rules.
//!
//! ```text
//! Program    := (Entry (";" Entry)*)? ";"?
//! Entry      := NamedEntry | Body
//! NamedEntry := QuotedString "=" Body
//! Body       := Element*                -- until ";", ")" or end of input
//! Element    := Datum (":" Element)?    -- "name:" prefix = Capture
//!             | "."                     -- Wildcard
//!             | "(" Body ")"            -- nested Sequence
//! ```

use sift_fmt::LabelTemplate;
use sift_ir::{Pattern, Span, Template, TokenKind};
use sift_stack::ensure_sufficient_stack;

use crate::cursor::Cursor;
use crate::literal::resolve_byte;
use crate::ParseError;

const ELEMENT: &str = "a byte literal, `.`, `(` or a capture";

pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(cursor: Cursor<'a>) -> Self {
        Parser { cursor }
    }

    pub(crate) fn program(&mut self) -> Result<Vec<Template>, ParseError> {
        let mut templates = Vec::new();
        while let Some(token) = self.cursor.current() {
            match &token.kind {
                TokenKind::Semicolon => {
                    self.cursor.advance()?;
                }
                TokenKind::QuotedString(_) => templates.push(Template::new(self.named_entry()?)),
                TokenKind::Datum(_) | TokenKind::Dot | TokenKind::LParen => {
                    let start = token.span;
                    templates.push(Template::new(self.sequence(start)?));
                }
                _ => return Err(ParseError::unexpected(token, "a pattern entry")),
            }
        }
        Ok(templates)
    }

    /// `"label" = Body`, with the label checked against the body's captures.
    fn named_entry(&mut self) -> Result<Pattern, ParseError> {
        let token = self.cursor.advance()?;
        let TokenKind::QuotedString(label) = &token.kind else {
            return Err(ParseError::unexpected(token, "a quoted label"));
        };
        let label_span = token.span;
        let equals_span = self.cursor.expect(&TokenKind::Equals, "`=`")?;

        let body = self.sequence(label_span.merge(equals_span))?;

        let invalid_label = |reason| ParseError::InvalidLabel {
            reason,
            span: label_span,
        };
        LabelTemplate::parse(label)
            .and_then(|template| template.check_captures(&body.capture_names()))
            .map_err(invalid_label)?;

        Ok(Pattern::named(label.clone(), body))
    }

    /// A `Body` as a sequence. `anchor` locates the error if it is empty.
    fn sequence(&mut self, anchor: Span) -> Result<Pattern, ParseError> {
        let elements = self.body()?;
        Pattern::sequence(elements).map_err(|_| ParseError::EmptySequence { span: anchor })
    }

    fn body(&mut self) -> Result<Vec<Pattern>, ParseError> {
        let mut elements = Vec::new();
        while let Some(kind) = self.cursor.current_kind() {
            if matches!(kind, TokenKind::Semicolon | TokenKind::RParen) {
                break;
            }
            elements.push(self.element()?);
        }
        Ok(elements)
    }

    fn element(&mut self) -> Result<Pattern, ParseError> {
        ensure_sufficient_stack(|| {
            let token = self.cursor.advance()?;
            match &token.kind {
                TokenKind::Datum(text) => {
                    if self.cursor.check(&TokenKind::Colon) {
                        self.cursor.advance()?;
                        let inner = self.element()?;
                        return Ok(Pattern::capture(text.as_str(), inner));
                    }
                    resolve_byte(text)
                        .map(Pattern::Fixed)
                        .map_err(|reason| ParseError::InvalidDatum {
                            reason,
                            span: token.span,
                        })
                }
                TokenKind::Dot => Ok(Pattern::Wildcard),
                TokenKind::LParen => {
                    let open = token.span;
                    let elements = self.body()?;
                    let close = self.cursor.expect(&TokenKind::RParen, "`)`")?;
                    Pattern::sequence(elements).map_err(|_| ParseError::EmptySequence {
                        span: open.merge(close),
                    })
                }
                _ => Err(ParseError::unexpected(token, ELEMENT)),
            }
        })
    }
}
