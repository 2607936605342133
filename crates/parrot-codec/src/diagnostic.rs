//! Terminal diagnostics for parse errors.

use ariadne::{Color, Label, Report, ReportKind, Source};
use parrot_reader::{ParseError, ParseErrorKind};

/// Render a parse error with source context.
///
/// Returns a string containing the formatted report. Falls back to the
/// error's `Display` form if the report cannot be rendered.
pub fn render(error: &ParseError, filename: &str, source: &str) -> String {
    let mut output = Vec::new();
    write_report(error, filename, source, &mut output);
    String::from_utf8(output).unwrap_or_else(|_| error.to_string())
}

/// Write an error report to a writer.
pub fn write_report<W: std::io::Write>(
    error: &ParseError,
    filename: &str,
    source: &str,
    writer: W,
) {
    let at = error.position.index as usize;
    let len = source.chars().count();
    let end = (at + 1).min(len.max(at));
    let range = at..end;

    let mut report = Report::build(ReportKind::Error, (filename, range.clone()))
        .with_message(error.kind.to_string())
        .with_label(
            Label::new((filename, range))
                .with_message(label_for(&error.kind))
                .with_color(Color::Red),
        );
    if let Some(help) = help_for(&error.kind) {
        report = report.with_help(help);
    }
    let _ = report.finish().write((filename, Source::from(source)), writer);
}

fn label_for(kind: &ParseErrorKind) -> &'static str {
    match kind {
        ParseErrorKind::UnexpectedEndOfInput | ParseErrorKind::UnclosedStructure => {
            "input ends here"
        }
        ParseErrorKind::InvalidEscape(_)
        | ParseErrorKind::InvalidHexDigit
        | ParseErrorKind::UnterminatedEscape => "invalid escape",
        ParseErrorKind::MaxDepthExceeded(_) => "nesting starts here",
        ParseErrorKind::TrailingCommaInArray | ParseErrorKind::TrailingCommaInObject => {
            "comma before closer"
        }
        _ => "unexpected",
    }
}

fn help_for(kind: &ParseErrorKind) -> Option<&'static str> {
    match kind {
        ParseErrorKind::InvalidEscape(_) | ParseErrorKind::InvalidHexDigit => {
            Some("valid escapes are: \\\", \\\\, \\/, \\b, \\f, \\n, \\r, \\t, \\uXXXX")
        }
        ParseErrorKind::TrailingCommaInArray | ParseErrorKind::TrailingCommaInObject => {
            Some("remove the comma or enable allow_trailing_commas")
        }
        ParseErrorKind::SingleLineCommentsDisabled => {
            Some("enable allow_single_line_comments to accept // comments")
        }
        ParseErrorKind::MultiLineCommentsDisabled => {
            Some("enable allow_multi_line_comments to accept /* */ comments")
        }
        ParseErrorKind::MaxDepthExceeded(_) => {
            Some("raise max_nesting_depth or flatten the document")
        }
        _ => None,
    }
}
