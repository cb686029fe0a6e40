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

//! Name resolution with fuzzy suggestions
//!
//! Acceptance is by exact name equality only. Edit distance ranks the
//! suggestion candidates when the lookup misses; it never resolves a call.

use super::resolve;
use crate::collector::FunctionCall;
use crate::diagnostics::Diagnostic;
use crate::distance::edit_distance;
use crate::registry::{FunctionDefinition, FunctionKind};
use std::collections::HashMap;

pub(super) fn check(call: &FunctionCall, definitions: &HashMap<String, FunctionDefinition>) -> Option<Diagnostic> {
    if resolve(call, definitions).is_some() {
        return None;
    }
    let suggestion = closest_name(&call.name, definitions);
    Some(Diagnostic::unresolved_call(&call.unit, call.name_span, &call.name, suggestion.as_deref()))
}

/// Best fuzzy candidate among work-item definitions, if close enough.
///
/// Equal distances tie-break to the lexicographically smallest candidate so
/// the suggestion does not depend on map iteration order.
fn closest_name(name: &str, definitions: &HashMap<String, FunctionDefinition>) -> Option<String> {
    let mut best: Option<(usize, &str)> = None;
    for candidate in definitions.values().filter(|d| d.kind == FunctionKind::WorkItem) {
        let distance = edit_distance(name, &candidate.name);
        let better = match best {
            None => true,
            Some((best_distance, best_name)) => {
                distance < best_distance || (distance == best_distance && candidate.name.as_str() < best_name)
            }
        };
        if better {
            best = Some((distance, candidate.name.as_str()));
        }
    }

    let (distance, candidate) = best?;
    (distance <= suggestion_threshold(name)).then(|| candidate.to_string())
}

/// Edit-distance budget for accepting a suggestion, proportional to the
/// called name's length: `max(1, chars / 3)`.
pub fn suggestion_threshold(name: &str) -> usize {
    (name.chars().count() / 3).max(1)
}
