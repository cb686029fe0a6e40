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

//! Diagnostic kinds, severities and message templates

use serde::Serialize;
use std::fmt;
use worklint_syntax::Span;

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// The closed set of issues the engine detects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticKind {
    /// No work-item definition matches the called name
    UnresolvedCall,
    /// The call's input type disagrees with the definition's parameter type
    ArgumentMismatch,
    /// The call's expected return type disagrees with the declared one
    ReturnTypeMismatch,
}

impl DiagnosticKind {
    /// Stable identifier of this diagnostic kind
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::UnresolvedCall => "WL0109",
            DiagnosticKind::ArgumentMismatch => "WL0108",
            DiagnosticKind::ReturnTypeMismatch => "WL0110",
        }
    }

    /// Fixed severity policy: every kind reports as a warning.
    pub fn severity(&self) -> Severity {
        Severity::Warning
    }
}

/// One detected issue, anchored at the most specific source location known
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// What kind of issue this is
    pub kind: DiagnosticKind,
    /// Path of the source unit containing the anchor
    pub unit: String,
    /// Anchor location within the unit
    pub span: Span,
    /// Rendered message
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic with a pre-rendered message
    pub fn new(kind: DiagnosticKind, unit: impl Into<String>, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            unit: unit.into(),
            span,
            message: message.into(),
        }
    }

    /// Stable identifier, delegated to the kind
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Severity, delegated to the kind
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// A call whose name resolves to no work-item definition
    pub fn unresolved_call(unit: &str, span: Span, name: &str, suggestion: Option<&str>) -> Self {
        let message = match suggestion {
            Some(candidate) => format!("work item function '{name}' is not defined, did you mean '{candidate}'?"),
            None => format!("work item function '{name}' is not defined in this compilation"),
        };
        Self::new(DiagnosticKind::UnresolvedCall, unit, span, message)
    }

    /// A call whose supplied input disagrees with the definition's parameter
    pub fn argument_mismatch(unit: &str, span: Span, name: &str, expected: Option<&str>, supplied: Option<&str>) -> Self {
        let message = match (expected, supplied) {
            (Some(expected), Some(supplied)) => {
                format!("work item function '{name}' expects input of type '{expected}' but the call supplies '{supplied}'")
            }
            (Some(expected), None) => {
                format!("work item function '{name}' expects input of type '{expected}' but the call supplies none")
            }
            (None, Some(supplied)) => {
                format!("work item function '{name}' does not use an input but the call supplies '{supplied}'")
            }
            (None, None) => format!("work item function '{name}' input mismatch"),
        };
        Self::new(DiagnosticKind::ArgumentMismatch, unit, span, message)
    }

    /// A call whose expected return type disagrees with the declared one
    pub fn return_type_mismatch(unit: &str, span: Span, name: &str, expected: &str, declared: Option<&str>) -> Self {
        let message = match declared {
            Some(declared) => format!("work item function '{name}' returns '{declared}' but the call expects '{expected}'"),
            None => format!("work item function '{name}' returns nothing but the call expects '{expected}'"),
        };
        Self::new(DiagnosticKind::ReturnTypeMismatch, unit, span, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}] {}:{}: {}", self.severity(), self.code(), self.unit, self.span, self.message)
    }
}
