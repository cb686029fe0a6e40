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

//! Structural compatibility of a call's expected return type
//!
//! Only runs when the call used the generic form. Discarding a result is
//! legal, so a call without an expectation is never checked.

use super::resolve;
use crate::collector::FunctionCall;
use crate::diagnostics::Diagnostic;
use crate::registry::FunctionDefinition;
use crate::typetext;
use std::collections::HashMap;

pub(super) fn check(call: &FunctionCall, definitions: &HashMap<String, FunctionDefinition>) -> Option<Diagnostic> {
    let expected = call.expected_return_type.as_deref()?;
    let definition = resolve(call, definitions)?;

    let anchor = call.expected_return_span.unwrap_or(call.name_span);
    match definition.return_type.as_deref() {
        Some(declared) if typetext::matches(expected, declared) => None,
        declared => Some(Diagnostic::return_type_mismatch(&call.unit, anchor, &call.name, expected, declared)),
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{call_expecting, call_with_argument, definition, registry};
    use super::*;

    #[test]
    fn test_matching_return_type_is_silent() {
        let definitions = registry([definition("say_hello", Some("String"), Some("String"))]);
        assert!(check(&call_expecting("say_hello", Some("String"), "String"), &definitions).is_none());
    }

    #[test]
    fn test_disagreement_is_flagged_at_the_type_argument() {
        let definitions = registry([definition("say_hello", Some("String"), Some("String"))]);
        let diagnostic = check(&call_expecting("say_hello", Some("String"), "i64"), &definitions).unwrap();
        assert!(diagnostic.message.contains("returns 'String' but the call expects 'i64'"));
        assert_eq!(diagnostic.span.start.column, 40);
    }

    #[test]
    fn test_expecting_from_fire_and_forget_is_flagged() {
        let definitions = registry([definition("log_event", Some("String"), None)]);
        let diagnostic = check(&call_expecting("log_event", Some("String"), "String"), &definitions).unwrap();
        assert!(diagnostic.message.contains("returns nothing"));
    }

    #[test]
    fn test_discarding_a_result_is_legal() {
        let definitions = registry([definition("say_hello", Some("String"), Some("String"))]);
        assert!(check(&call_with_argument("say_hello", Some("String")), &definitions).is_none());
    }

    #[test]
    fn test_unresolved_name_is_not_this_checks_problem() {
        let definitions = registry([definition("say_hello", Some("String"), Some("String"))]);
        assert!(check(&call_expecting("missing", Some("String"), "String"), &definitions).is_none());
    }
}
