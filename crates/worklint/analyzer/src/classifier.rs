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

//! Classification of declarations via parameter annotations
//!
//! Not every declaration in a compilation participates in dispatch;
//! unclassifiable declarations are ignored without diagnostics.

use crate::registry::{FunctionDefinition, FunctionKind};
use worklint_syntax::{AstNode, NodeKind};

/// Annotation marking the parameter that receives a work item's input.
pub const WORK_ITEM_TRIGGER: &str = "WorkTrigger";

/// Annotation marking the context parameter of a coordinator.
pub const COORDINATOR_TRIGGER: &str = "CoordinationTrigger";

/// Declaration-level annotation carrying an explicit external name.
pub const NAME_ANNOTATION: &str = "WorkFunction";

/// Classify a declaration node into a [`FunctionDefinition`], if any of its
/// parameters carries a trigger annotation.
pub fn classify<N: AstNode>(declaration: &N) -> Option<FunctionDefinition> {
    if declaration.kind() != NodeKind::Declaration {
        return None;
    }

    let (kind, trigger_parameter) = find_trigger(declaration)?;
    let name = external_name(declaration)?;

    let parameter_type = match kind {
        FunctionKind::WorkItem => trigger_parameter
            .child_of_kind(NodeKind::TypeName)
            .map(|type_name| type_name.text().to_string()),
        // A coordinator's trigger parameter is its context, not an input.
        FunctionKind::Coordinator => None,
    };

    let return_type = declaration
        .child_of_kind(NodeKind::ReturnType)
        .map(AstNode::text)
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string);

    Some(FunctionDefinition {
        name,
        kind,
        parameter_type,
        return_type,
    })
}

/// Find the first parameter carrying a trigger annotation.
fn find_trigger<N: AstNode>(declaration: &N) -> Option<(FunctionKind, &N)> {
    for parameter in declaration.children_of_kind(NodeKind::Parameter) {
        for annotation in parameter.children_of_kind(NodeKind::Annotation) {
            match annotation.text() {
                WORK_ITEM_TRIGGER => return Some((FunctionKind::WorkItem, parameter)),
                COORDINATOR_TRIGGER => return Some((FunctionKind::Coordinator, parameter)),
                _ => {}
            }
        }
    }
    None
}

/// Resolve the externally visible name. An explicit name on the declaration
/// annotation always wins over the declaration's own identifier.
fn external_name<N: AstNode>(declaration: &N) -> Option<String> {
    for annotation in declaration.children_of_kind(NodeKind::Annotation) {
        if annotation.text() == NAME_ANNOTATION {
            if let Some(literal) = annotation.child_of_kind(NodeKind::StringLiteral) {
                return Some(literal.text().to_string());
            }
        }
    }
    declaration
        .child_of_kind(NodeKind::Identifier)
        .map(|identifier| identifier.text().to_string())
}
