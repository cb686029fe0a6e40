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

//! Structural compatibility of a call's supplied input

use super::resolve;
use crate::collector::FunctionCall;
use crate::diagnostics::Diagnostic;
use crate::registry::FunctionDefinition;
use crate::typetext;
use std::collections::HashMap;

pub(super) fn check(call: &FunctionCall, definitions: &HashMap<String, FunctionDefinition>) -> Option<Diagnostic> {
    let definition = resolve(call, definitions)?;

    // An argument was supplied but its type never resolved: undecidable,
    // skip rather than false-flag.
    if call.argument_span.is_some() && call.argument_type.is_none() {
        return None;
    }

    let anchor = call.argument_span.unwrap_or(call.name_span);
    match (definition.parameter_type.as_deref(), call.argument_type.as_deref()) {
        (None, None) => None,
        (Some(expected), Some(supplied)) if typetext::matches(expected, supplied) => None,
        (expected, supplied) => Some(Diagnostic::argument_mismatch(&call.unit, anchor, &call.name, expected, supplied)),
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{call, call_with_argument, definition, registry};
    use super::*;

    #[test]
    fn test_matching_types_are_silent() {
        let definitions = registry([definition("say_hello", Some("String"), None)]);
        assert!(check(&call_with_argument("say_hello", Some("String")), &definitions).is_none());
    }

    #[test]
    fn test_whitespace_differences_are_silent() {
        let definitions = registry([definition("merge", Some("(i64, String)"), None)]);
        assert!(check(&call_with_argument("merge", Some("(i64,String)")), &definitions).is_none());
    }

    #[test]
    fn test_type_disagreement_is_flagged_at_the_argument() {
        let definitions = registry([definition("say_hello", Some("String"), None)]);
        let diagnostic = check(&call_with_argument("say_hello", Some("i64")), &definitions).unwrap();
        assert!(diagnostic.message.contains("expects input of type 'String'"));
        assert_eq!(diagnostic.span.start.column, 30);
    }

    #[test]
    fn test_missing_argument_is_flagged_at_the_name() {
        let definitions = registry([definition("say_hello", Some("String"), None)]);
        let diagnostic = check(&call("say_hello"), &definitions).unwrap();
        assert!(diagnostic.message.contains("the call supplies none"));
        assert_eq!(diagnostic.span.start.column, 14);
    }

    #[test]
    fn test_unused_input_is_flagged() {
        let definitions = registry([definition("ping", None, None)]);
        let diagnostic = check(&call_with_argument("ping", Some("String")), &definitions).unwrap();
        assert!(diagnostic.message.contains("does not use an input"));
    }

    #[test]
    fn test_no_parameter_and_no_argument_match() {
        let definitions = registry([definition("ping", None, None)]);
        assert!(check(&call("ping"), &definitions).is_none());
    }

    #[test]
    fn test_unresolved_argument_type_is_skipped() {
        let definitions = registry([definition("say_hello", Some("String"), None)]);
        assert!(check(&call_with_argument("say_hello", None), &definitions).is_none());
    }

    #[test]
    fn test_unresolved_name_is_not_this_checks_problem() {
        let definitions = registry([definition("say_hello", Some("String"), None)]);
        assert!(check(&call_with_argument("missing", Some("i64")), &definitions).is_none());
    }
}
