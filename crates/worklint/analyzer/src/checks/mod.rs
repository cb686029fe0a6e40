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

//! The match engine and its closed set of call-site checks
//!
//! The check set is fixed and small, so it is a tagged variant list rather
//! than an open plugin registry. Checks run in a defined order for every
//! collected call; each check emits at most one diagnostic per call.

mod argument;
mod name;
mod return_type;

pub use name::suggestion_threshold;

use crate::collector::FunctionCall;
use crate::diagnostics::Diagnostic;
use crate::registry::{FunctionDefinition, FunctionKind};
use std::collections::HashMap;

/// One call-site check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallCheck {
    /// Name resolution, with fuzzy suggestions on a miss
    Name,
    /// Structural compatibility of the supplied input
    Argument,
    /// Structural compatibility of the expected return type
    ReturnType,
}

impl CallCheck {
    /// Fixed evaluation order
    pub const ALL: [CallCheck; 3] = [CallCheck::Name, CallCheck::Argument, CallCheck::ReturnType];

    /// Run one check against one call
    pub fn run(self, call: &FunctionCall, definitions: &HashMap<String, FunctionDefinition>) -> Option<Diagnostic> {
        match self {
            CallCheck::Name => name::check(call, definitions),
            CallCheck::Argument => argument::check(call, definitions),
            CallCheck::ReturnType => return_type::check(call, definitions),
        }
    }
}

/// Resolve every collected call against the frozen registry, in collected
/// order, and gather the diagnostics.
pub fn run_checks(definitions: &HashMap<String, FunctionDefinition>, calls: &[FunctionCall]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for call in calls {
        for check in CallCheck::ALL {
            if let Some(diagnostic) = check.run(call, definitions) {
                diagnostics.push(diagnostic);
            }
        }
    }
    diagnostics
}

/// Exact-match lookup. Work-item calls only ever resolve against work-item
/// definitions; a coordinator of the same name is not a match.
pub(crate) fn resolve<'a>(
    call: &FunctionCall,
    definitions: &'a HashMap<String, FunctionDefinition>,
) -> Option<&'a FunctionDefinition> {
    definitions.get(&call.name).filter(|definition| definition.kind == FunctionKind::WorkItem)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use worklint_syntax::{Position, Span};

    pub fn definition(name: &str, parameter_type: Option<&str>, return_type: Option<&str>) -> FunctionDefinition {
        FunctionDefinition {
            name: name.to_string(),
            kind: FunctionKind::WorkItem,
            parameter_type: parameter_type.map(str::to_string),
            return_type: return_type.map(str::to_string),
        }
    }

    pub fn coordinator(name: &str) -> FunctionDefinition {
        FunctionDefinition {
            name: name.to_string(),
            kind: FunctionKind::Coordinator,
            parameter_type: None,
            return_type: None,
        }
    }

    pub fn registry(definitions: impl IntoIterator<Item = FunctionDefinition>) -> HashMap<String, FunctionDefinition> {
        definitions.into_iter().map(|d| (d.name.clone(), d)).collect()
    }

    pub fn call(name: &str) -> FunctionCall {
        FunctionCall {
            name: name.to_string(),
            unit: "app.src".to_string(),
            name_span: Span::single(Position::new(3, 14)),
            argument_span: None,
            argument_type: None,
            expected_return_type: None,
            expected_return_span: None,
        }
    }

    pub fn call_with_argument(name: &str, argument_type: Option<&str>) -> FunctionCall {
        FunctionCall {
            argument_span: Some(Span::single(Position::new(3, 30))),
            argument_type: argument_type.map(str::to_string),
            ..call(name)
        }
    }

    pub fn call_expecting(name: &str, argument_type: Option<&str>, expected_return: &str) -> FunctionCall {
        FunctionCall {
            expected_return_type: Some(expected_return.to_string()),
            expected_return_span: Some(Span::single(Position::new(3, 40))),
            ..call_with_argument(name, argument_type)
        }
    }
}
