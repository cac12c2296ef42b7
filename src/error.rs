//! Error types for reading entity input

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors raised while reading a categorized entity document
#[derive(Error, Debug)]
pub enum InputError {
    /// The input is not well-formed JSON
    #[error("syntax error at {span:?}: {message}")]
    Syntax { span: Span, message: String },

    /// Well-formed JSON with the wrong shape (e.g. a number where an item list was expected)
    #[error("invalid entities: {message}")]
    Shape { span: Option<Span>, message: String },

    /// A JSON pointer did not resolve to any value
    #[error("pointer '{pointer}' does not match any value")]
    PointerNotFound { pointer: String },
}

impl InputError {
    /// Convert a serde_json error into an input error with a byte span into `source`
    pub fn from_json(err: serde_json::Error, source: &str) -> Self {
        let span = position_to_span(source, err.line(), err.column());
        let message = strip_position(&err.to_string());

        match err.classify() {
            serde_json::error::Category::Syntax | serde_json::error::Category::Eof => {
                InputError::Syntax {
                    span: span.unwrap_or(source.len()..source.len()),
                    message,
                }
            }
            _ => InputError::Shape { span, message },
        }
    }

    /// Get the source span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::Syntax { span, .. } => Some(span),
            Self::Shape { span, .. } => span.as_ref(),
            Self::PointerNotFound { .. } => None,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span() else {
            return format!("Error: {}\n", self);
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message(self.label())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("Error: {}\n", self),
        }
    }

    fn label(&self) -> String {
        match self {
            Self::Syntax { message, .. } | Self::Shape { message, .. } => message.clone(),
            Self::PointerNotFound { pointer } => format!("no value at '{}'", pointer),
        }
    }
}

/// Map serde_json's one-based line/column to a one-byte span
///
/// serde_json reports line 0 when the error carries no position (e.g. errors
/// from deserializing an in-memory `Value`).
fn position_to_span(source: &str, line: usize, column: usize) -> Option<Span> {
    if line == 0 {
        return None;
    }

    let line_start: usize = source
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let start = (line_start + column.saturating_sub(1)).min(source.len());
    let end = (start + 1).min(source.len());
    Some(start..end)
}

/// serde_json appends " at line X column Y" to its messages; ariadne shows the position itself
fn strip_position(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_to_span_first_line() {
        assert_eq!(position_to_span("{\"a\": 1}", 1, 7), Some(6..7));
    }

    #[test]
    fn test_position_to_span_later_line() {
        let source = "{\n  \"a\": x\n}";
        // line 2, column 8 points at the 'x'
        let span = position_to_span(source, 2, 8).unwrap();
        assert_eq!(&source[span], "x");
    }

    #[test]
    fn test_position_to_span_without_position() {
        assert_eq!(position_to_span("{}", 0, 0), None);
    }

    #[test]
    fn test_strip_position() {
        assert_eq!(
            strip_position("expected value at line 1 column 2"),
            "expected value"
        );
        assert_eq!(strip_position("no position"), "no position");
    }

    #[test]
    fn test_syntax_error_is_classified() {
        let source = "{\"PERSON\": [\"Alice\",]}";
        let err = serde_json::from_str::<serde_json::Value>(source).unwrap_err();
        let input_err = InputError::from_json(err, source);
        assert!(matches!(input_err, InputError::Syntax { .. }));
        assert!(input_err.span().is_some());
    }

    #[test]
    fn test_format_includes_filename_and_message() {
        let source = "{\"PERSON\": 42}";
        let err = InputError::Shape {
            span: Some(11..13),
            message: "expected a list of strings".to_string(),
        };
        let report = err.format(source, "entities.json");
        assert!(report.contains("entities.json"));
        assert!(report.contains("expected a list of strings"));
    }

    #[test]
    fn test_format_without_span() {
        let err = InputError::PointerNotFound {
            pointer: "/entities".to_string(),
        };
        let report = err.format("{}", "doc.json");
        assert!(report.contains("/entities"));
    }
}
