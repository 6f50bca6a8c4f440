//! Message pattern scanning and interpolation
//!
//! Catalog messages may embed `{placeholder}` markers, e.g.
//! `"Delete model {model}?"`. This module tokenizes patterns with logos,
//! validates their structure and substitutes supplied values.

use std::collections::HashMap;

use ariadne::{Color, Label, Report, ReportKind, Source};
use logos::Logos;
use thiserror::Error;

/// Byte range in a message pattern
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum PatternToken {
    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    /// Literal text between placeholders
    #[regex(r"[^{}]+")]
    Text,
}

/// Errors for malformed message patterns
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Pattern error at {span:?}: {message}")]
    Syntax { span: Span, message: String },
}

impl PatternError {
    /// Format the error with source context using ariadne
    ///
    /// `filename` is a display label only; catalog validation passes the
    /// message id here.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            PatternError::Syntax { span, message } => {
                Report::build(ReportKind::Error, filename, span.start)
                    .with_message(message)
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(message)
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf)
                    .unwrap();
            }
        }
        String::from_utf8(buf).unwrap()
    }
}

/// One parsed pattern segment
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    /// Literal text, emitted verbatim
    Text(&'a str),
    /// `{name}` marker to be substituted at format time
    Placeholder { name: &'a str, span: Span },
}

/// Parse a message pattern into literal and placeholder segments
pub fn parse_pattern(pattern: &str) -> Result<Vec<Segment<'_>>, PatternError> {
    let mut segments = Vec::new();
    let mut lexer = PatternToken::lexer(pattern);
    // Span of the '{' currently being parsed, if any
    let mut open: Option<Span> = None;
    // Name seen since the last '{'
    let mut name: Option<(Span, &str)> = None;

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        let token = token.map_err(|()| PatternError::Syntax {
            span: span.clone(),
            message: "invalid character in message pattern".to_string(),
        })?;

        match (token, &open) {
            (PatternToken::Text, None) => segments.push(Segment::Text(lexer.slice())),
            (PatternToken::Text, Some(_)) => {
                name = Some((span, lexer.slice()));
            }
            (PatternToken::BraceOpen, None) => open = Some(span),
            (PatternToken::BraceOpen, Some(start)) => {
                return Err(PatternError::Syntax {
                    span: start.clone(),
                    message: "unclosed '{' in message pattern".to_string(),
                });
            }
            (PatternToken::BraceClose, None) => {
                return Err(PatternError::Syntax {
                    span,
                    message: "stray '}' in message pattern".to_string(),
                });
            }
            (PatternToken::BraceClose, Some(start)) => {
                let full_span = start.start..span.end;
                match name.take() {
                    Some((_, text)) if is_valid_name(text) => {
                        segments.push(Segment::Placeholder {
                            name: text,
                            span: full_span,
                        });
                    }
                    Some((name_span, text)) => {
                        return Err(PatternError::Syntax {
                            span: name_span,
                            message: format!("invalid placeholder name '{}'", text),
                        });
                    }
                    None => {
                        return Err(PatternError::Syntax {
                            span: full_span,
                            message: "empty placeholder name".to_string(),
                        });
                    }
                }
                open = None;
            }
        }
    }

    if let Some(start) = open {
        return Err(PatternError::Syntax {
            span: start,
            message: "unclosed '{' in message pattern".to_string(),
        });
    }

    Ok(segments)
}

/// Placeholder names: identifier characters plus '-' to match message ids
fn is_valid_name(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Substitute placeholder values into a pattern
///
/// Placeholders with no supplied value are kept literal (`{name}`), so a
/// partially filled message still renders something readable.
pub fn interpolate(
    pattern: &str,
    values: &HashMap<String, String>,
) -> Result<String, PatternError> {
    let segments = parse_pattern(pattern)?;
    let mut out = String::with_capacity(pattern.len());
    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Placeholder { name, .. } => match values.get(name) {
                Some(value) => out.push_str(value),
                None => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
            },
        }
    }
    Ok(out)
}
