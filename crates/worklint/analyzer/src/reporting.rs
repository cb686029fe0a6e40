// Worklint
// Copyright (C) 2025 Worklint Contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Formatting of emitted diagnostics

use crate::diagnostics::Diagnostic;
use thiserror::Error;

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Error during report formatting
#[derive(Debug, Error)]
#[error("report formatting failed: {0}")]
pub struct FormatError(String);

/// Renders a batch of diagnostics for consumption outside the engine
pub trait ReportFormatter {
    fn format(&self, diagnostics: &[Diagnostic]) -> Result<String, FormatError>;
    fn supported_formats(&self) -> &[ReportFormat];
}

/// One line per diagnostic: `severity[id] unit:line:col: message`
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, diagnostics: &[Diagnostic]) -> Result<String, FormatError> {
        let mut out = String::new();
        for diagnostic in diagnostics {
            out.push_str(&diagnostic.to_string());
            out.push('\n');
        }
        Ok(out)
    }

    fn supported_formats(&self) -> &[ReportFormat] {
        &[ReportFormat::Text]
    }
}

/// Machine-readable JSON array of diagnostics
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, diagnostics: &[Diagnostic]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(diagnostics).map_err(|e| FormatError(e.to_string()))
    }

    fn supported_formats(&self) -> &[ReportFormat] {
        &[ReportFormat::Json]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worklint_syntax::{Position, Span};

    fn sample() -> Vec<Diagnostic> {
        vec![Diagnostic::unresolved_call(
            "app.src",
            Span::single(Position::new(3, 14)),
            "sayHelo",
            Some("sayHello"),
        )]
    }

    #[test]
    fn test_text_format_is_one_line_per_diagnostic() {
        let rendered = TextFormatter.format(&sample()).unwrap();
        assert_eq!(rendered.lines().count(), 1);
        assert!(rendered.starts_with("warning[WL0109] app.src:3:14:"));
    }

    #[test]
    fn test_json_format_round_trips_fields() {
        let rendered = JsonFormatter.format(&sample()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed[0]["kind"], "UnresolvedCall");
        assert_eq!(parsed[0]["unit"], "app.src");
        assert_eq!(parsed[0]["span"]["start"]["line"], 3);
    }

    #[test]
    fn test_supported_formats() {
        assert_eq!(TextFormatter.supported_formats(), &[ReportFormat::Text]);
        assert_eq!(JsonFormatter.supported_formats(), &[ReportFormat::Json]);
    }
}
